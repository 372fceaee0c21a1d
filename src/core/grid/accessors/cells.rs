use super::super::*;

impl Grid {
    /// Cell value; anything outside the grid reads as 0 (no wraparound)
    #[inline]
    pub fn get(&self, row: i64, col: i64) -> u32 {
        if !self.in_bounds(row, col) { return 0; }
        self.cells[self.index(row as usize, col as usize)]
    }

    /// Write a cell; out-of-range writes are dropped
    #[inline]
    pub fn set(&mut self, row: i64, col: i64, value: u32) {
        if !self.in_bounds(row, col) { return; }
        let idx = self.index(row as usize, col as usize);
        self.cells[idx] = value;
    }

    /// Any non-zero value counts as alive
    #[inline]
    pub fn is_alive(&self, row: i64, col: i64) -> bool {
        self.get(row, col) > 0
    }

    /// 0/1 view of a cell, for rule lookups
    #[inline]
    pub fn bit(&self, row: i64, col: i64) -> u32 {
        u32::from(self.is_alive(row, col))
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c > 0).count()
    }

    /// Sum of all cell values
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&c| u64::from(c)).sum()
    }
}
