//! WavePattern - two interfering sine waves, one along columns, one along rows

use super::{PatternBehavior, StepContext, StepOutcome};
use crate::core::grid::Grid;
use crate::domain::patterns::PatternState;

const THRESHOLD: f64 = 0.3;

pub struct WavePattern;

impl WavePattern {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn lit(row: usize, col: usize, time: u64) -> bool {
        let t = time as f64;
        let along_cols = (col as f64 * 0.2 + t * 0.1).sin();
        let along_rows = (row as f64 * 0.3 + t * 0.15).sin();
        (along_cols + along_rows) / 2.0 > THRESHOLD
    }

    pub fn frame(rows: usize, cols: usize, time: u64) -> Grid {
        let mut grid = Grid::empty(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                grid.set(row as i64, col as i64, u32::from(Self::lit(row, col, time)));
            }
        }
        grid
    }
}

impl PatternBehavior for WavePattern {
    fn step(&self, ctx: &mut StepContext) -> StepOutcome {
        let time = ctx.state.wave_time();
        let grid = Self::frame(ctx.grid.rows(), ctx.grid.cols(), time);
        StepOutcome::changed(grid, PatternState::Wave { time: time + 1 })
    }
}
