//! Grid - fixed-size row-major cell buffer
//!
//! One `u32` per cell. 0 = inactive; automaton patterns write 0/1, the
//! calendar writes raw contribution counts. Dimensions are fixed at
//! construction and every step produces a new buffer of the same shape.

use rand::Rng;

mod indexing;
mod accessors;

/// Row-major R x C buffer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl Grid {
    /// All-zero grid
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Each cell is 1 with independent probability `density`, else 0
    pub fn randomized<R: Rng + ?Sized>(rows: usize, cols: usize, density: f64, rng: &mut R) -> Self {
        let density = density.clamp(0.0, 1.0);
        let cells = (0..rows * cols)
            .map(|_| u32::from(rng.gen_bool(density)))
            .collect();
        Self { rows, cols, cells }
    }

    /// Empty grid with the same shape as `self`
    #[inline]
    pub fn blank_like(&self) -> Self {
        Self::empty(self.rows, self.cols)
    }

    #[inline]
    pub fn same_shape(&self, other: &Grid) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Zero every cell in place (shape unchanged)
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    // === Raw access for JS interop ===
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.cells
    }

    pub fn cells_ptr(&self) -> *const u32 {
        self.cells.as_ptr()
    }

    /// Row `row` as a slice (empty when out of range)
    pub fn row(&self, row: usize) -> &[u32] {
        if row >= self.rows {
            return &[];
        }
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Rows as owned vectors, mostly useful in tests and debug output
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }

    /// Build from nested rows; `None` when the rows are ragged
    pub fn from_rows(rows: &[Vec<u32>]) -> Option<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        Some(Self {
            rows: rows.len(),
            cols,
            cells: rows.iter().flatten().copied().collect(),
        })
    }
}
