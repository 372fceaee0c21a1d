//! RainPattern - drops appear on the top row, fall one row per step and
//! randomly drain from the bottom row

use rand::Rng;

use super::{PatternBehavior, StepContext, StepOutcome};
use crate::core::grid::Grid;
use crate::domain::patterns::PatternState;

const DROP_CHANCE: f64 = 0.05;
const DRAIN_CHANCE: f64 = 0.3;

pub struct RainPattern;

impl RainPattern {
    pub fn new() -> Self {
        Self
    }
}

/// Move every drop of `before` down one row, writing into `next`.
///
/// Reads only `before`, so a drop never advances twice in one step. Rows
/// are processed bottom-to-top; a drop on the bottom row stays put.
pub fn fall(before: &Grid, next: &mut Grid) {
    let rows = before.rows() as i64;
    let cols = before.cols() as i64;
    for row in (1..rows).rev() {
        for col in 0..cols {
            if before.is_alive(row - 1, col) {
                next.set(row, col, 1);
                next.set(row - 1, col, 0);
            }
        }
    }
}

impl PatternBehavior for RainPattern {
    fn step(&self, ctx: &mut StepContext) -> StepOutcome {
        let before = ctx.grid;
        let mut next = before.clone();
        let cols = before.cols() as i64;

        for col in 0..cols {
            if ctx.rng.gen_bool(DROP_CHANCE) {
                next.set(0, col, 1);
            }
        }

        fall(before, &mut next);

        let bottom = before.rows() as i64 - 1;
        for col in 0..cols {
            if ctx.rng.gen_bool(DRAIN_CHANCE) {
                next.set(bottom, col, 0);
            }
        }

        StepOutcome::changed(next, PatternState::Empty)
    }
}
