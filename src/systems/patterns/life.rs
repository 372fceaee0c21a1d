//! LifePattern - Conway's Game of Life on a bounded (non-wrapping) grid

use super::{PatternBehavior, StepContext, StepOutcome};
use crate::core::grid::Grid;
use crate::domain::patterns::PatternState;

const NEIGHBORS: [(i64, i64); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Live cells in the 8-neighborhood; off-grid cells count as dead
#[inline]
pub fn count_neighbors(grid: &Grid, row: i64, col: i64) -> u32 {
    NEIGHBORS
        .iter()
        .map(|&(dr, dc)| grid.bit(row + dr, col + dc))
        .sum()
}

pub struct LifePattern;

impl LifePattern {
    pub fn new() -> Self {
        Self
    }

    /// Next generation and whether any cell differs from `grid`
    pub fn next_generation(grid: &Grid) -> (Grid, bool) {
        let mut next = grid.blank_like();
        let mut changed = false;

        for row in 0..grid.rows() as i64 {
            for col in 0..grid.cols() as i64 {
                let neighbors = count_neighbors(grid, row, col);
                let current = grid.get(row, col);
                let alive = if current > 0 {
                    neighbors == 2 || neighbors == 3
                } else {
                    neighbors == 3
                };
                let value = u32::from(alive);
                next.set(row, col, value);
                if value != current {
                    changed = true;
                }
            }
        }

        (next, changed)
    }
}

impl PatternBehavior for LifePattern {
    fn step(&self, ctx: &mut StepContext) -> StepOutcome {
        let (grid, changed) = Self::next_generation(ctx.grid);
        StepOutcome {
            grid,
            changed,
            state: PatternState::Empty,
        }
    }
}
