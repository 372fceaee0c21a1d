//! SpiralPattern - three-armed spiral rotating around the grid center

use super::{PatternBehavior, StepContext, StepOutcome};
use crate::core::grid::Grid;
use crate::domain::patterns::PatternState;

const THRESHOLD: f64 = 0.5;

pub struct SpiralPattern;

impl SpiralPattern {
    pub fn new() -> Self {
        Self
    }

    pub fn frame(rows: usize, cols: usize, time: u64) -> Grid {
        let center_row = rows as f64 / 2.0;
        let center_col = cols as f64 / 2.0;
        let t = time as f64;

        let mut grid = Grid::empty(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                let dx = col as f64 - center_col;
                let dy = row as f64 - center_row;
                let angle = dy.atan2(dx);
                let distance = (dx * dx + dy * dy).sqrt();
                let value = (angle * 3.0 + distance * 0.5 - t * 0.2).sin();
                grid.set(row as i64, col as i64, u32::from(value > THRESHOLD));
            }
        }
        grid
    }
}

impl PatternBehavior for SpiralPattern {
    fn step(&self, ctx: &mut StepContext) -> StepOutcome {
        let time = ctx.state.spiral_time();
        let grid = Self::frame(ctx.grid.rows(), ctx.grid.cols(), time);
        StepOutcome::changed(grid, PatternState::Spiral { time: time + 1 })
    }
}
