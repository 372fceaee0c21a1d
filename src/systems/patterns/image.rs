//! ImagePattern - thresholded brightness of a host-supplied raster.
//! Without a raster the step is a no-op.

use super::{PatternBehavior, StepContext, StepOutcome};
use crate::domain::patterns::PatternState;

const BRIGHTNESS_THRESHOLD: f64 = 128.0;

pub struct ImagePattern;

impl ImagePattern {
    pub fn new() -> Self {
        Self
    }
}

impl PatternBehavior for ImagePattern {
    fn step(&self, ctx: &mut StepContext) -> StepOutcome {
        let Some(raster) = ctx.image else {
            return StepOutcome {
                grid: ctx.grid.clone(),
                changed: false,
                state: ctx.state.clone(),
            };
        };

        let (rows, cols) = (ctx.grid.rows(), ctx.grid.cols());
        let mut grid = ctx.grid.blank_like();
        for row in 0..rows {
            for col in 0..cols {
                let lit = raster.cell_brightness(row, col, rows, cols) > BRIGHTNESS_THRESHOLD;
                grid.set(row as i64, col as i64, u32::from(lit));
            }
        }

        StepOutcome::changed(grid, PatternState::Empty)
    }
}
