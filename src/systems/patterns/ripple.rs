//! RipplePattern - rings that spawn at random cells and expand until they
//! reach their own maximum radius

use rand::Rng;

use super::{PatternBehavior, StepContext, StepOutcome};
use crate::core::grid::Grid;
use crate::domain::patterns::{PatternState, Ripple};

const SPAWN_CHANCE: f64 = 0.05;
const MIN_MAX_RADIUS: f64 = 5.0;
const MAX_MAX_RADIUS: f64 = 20.0;
const GROWTH_PER_STEP: f64 = 0.5;
/// Cells closer than this to the ring are lit
const RING_WIDTH: f64 = 1.0;

pub struct RipplePattern;

impl RipplePattern {
    pub fn new() -> Self {
        Self
    }

    fn spawn<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Ripple {
        Ripple {
            center_row: rng.gen_range(0..rows),
            center_col: rng.gen_range(0..cols),
            radius: 0.0,
            max_radius: rng.gen_range(MIN_MAX_RADIUS..MAX_MAX_RADIUS),
        }
    }
}

/// Grow every ripple and drop those past their maximum radius
pub fn advance_ripples(ripples: &[Ripple]) -> Vec<Ripple> {
    ripples
        .iter()
        .map(|r| Ripple { radius: r.radius + GROWTH_PER_STEP, ..*r })
        .filter(|r| r.radius <= r.max_radius)
        .collect()
}

/// Fresh grid with every ring drawn; overlaps simply stay lit
pub fn draw_ripples(rows: usize, cols: usize, ripples: &[Ripple]) -> Grid {
    let mut grid = Grid::empty(rows, cols);
    for ripple in ripples {
        for row in 0..rows {
            for col in 0..cols {
                let dr = row as f64 - ripple.center_row as f64;
                let dc = col as f64 - ripple.center_col as f64;
                let distance = (dr * dr + dc * dc).sqrt();
                if (distance - ripple.radius).abs() < RING_WIDTH {
                    grid.set(row as i64, col as i64, 1);
                }
            }
        }
    }
    grid
}

impl PatternBehavior for RipplePattern {
    fn step(&self, ctx: &mut StepContext) -> StepOutcome {
        let (rows, cols) = (ctx.grid.rows(), ctx.grid.cols());
        let mut ripples = ctx.state.ripples().to_vec();

        if rows > 0 && cols > 0 && ctx.rng.gen_bool(SPAWN_CHANCE) {
            ripples.push(Self::spawn(rows, cols, &mut *ctx.rng));
        }

        let ripples = advance_ripples(&ripples);
        let grid = draw_ripples(rows, cols, &ripples);
        StepOutcome::changed(grid, PatternState::Ripple(ripples))
    }
}
