//! NoisePattern - independent random cells every step

use super::{PatternBehavior, StepContext, StepOutcome};
use crate::core::grid::Grid;
use crate::domain::patterns::PatternState;

const LIVE_CHANCE: f64 = 0.2;

pub struct NoisePattern;

impl NoisePattern {
    pub fn new() -> Self {
        Self
    }
}

impl PatternBehavior for NoisePattern {
    fn step(&self, ctx: &mut StepContext) -> StepOutcome {
        let grid = Grid::randomized(ctx.grid.rows(), ctx.grid.cols(), LIVE_CHANCE, &mut *ctx.rng);
        StepOutcome::changed(grid, PatternState::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::patterns::EngineRng;
    use rand::SeedableRng;

    fn step(grid: &Grid, rng: &mut EngineRng) -> StepOutcome {
        let state = PatternState::Empty;
        let mut ctx = StepContext { grid, state: &state, rng, image: None };
        NoisePattern::new().step(&mut ctx)
    }

    #[test]
    fn cells_are_binary_at_noise_density() {
        let mut rng = EngineRng::seed_from_u64(21);
        let grid = Grid::empty(70, 52);
        let out = step(&grid, &mut rng);

        assert!(out.changed);
        assert!(out.state.is_empty());
        assert_eq!((out.grid.rows(), out.grid.cols()), (70, 52));
        assert!(out.grid.as_slice().iter().all(|&c| c <= 1));
        let live = out.grid.live_count() as f64 / out.grid.len() as f64;
        assert!(live > 0.15 && live < 0.25, "density {live}");
    }

    #[test]
    fn ignores_the_previous_frame() {
        let mut rng = EngineRng::seed_from_u64(22);
        let full = Grid::from_rows(&vec![vec![9; 52]; 7]).unwrap();
        let out = step(&full, &mut rng);
        assert!(out.changed);
        assert!(out.grid.live_count() < full.live_count());
        assert!(out.grid.as_slice().iter().all(|&c| c <= 1));
    }
}
