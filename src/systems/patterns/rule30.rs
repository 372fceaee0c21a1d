//! Rule30Pattern - elementary automaton on the middle row; every other row
//! scrolls right one column per step

use super::{PatternBehavior, StepContext, StepOutcome};
use crate::core::grid::Grid;
use crate::domain::patterns::PatternState;

/// Next center value indexed by `(left << 2) | (center << 1) | right`
pub const RULE30_TABLE: [u32; 8] = [0, 1, 1, 1, 1, 0, 0, 0];

pub struct Rule30Pattern;

impl Rule30Pattern {
    pub fn new() -> Self {
        Self
    }

    /// Empty grid with a single live cell at (rows/2, cols/2)
    pub fn seed(rows: usize, cols: usize) -> Grid {
        let mut grid = Grid::empty(rows, cols);
        grid.set((rows / 2) as i64, (cols / 2) as i64, 1);
        grid
    }
}

impl PatternBehavior for Rule30Pattern {
    fn step(&self, ctx: &mut StepContext) -> StepOutcome {
        let before = ctx.grid;
        let mut next = before.clone();
        let rows = before.rows() as i64;
        let cols = before.cols() as i64;
        let middle = rows / 2;

        for col in 1..cols - 1 {
            let pattern = (before.bit(middle, col - 1) << 2)
                | (before.bit(middle, col) << 1)
                | before.bit(middle, col + 1);
            next.set(middle, col, RULE30_TABLE[pattern as usize]);
        }

        for row in (0..rows).filter(|&r| r != middle) {
            for col in (1..cols).rev() {
                next.set(row, col, before.get(row, col - 1));
            }
            next.set(row, 0, 0);
        }

        StepOutcome::changed(next, PatternState::Empty)
    }
}
