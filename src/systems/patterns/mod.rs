//! Patterns - one step function per animation
//!
//! Every step reads a consistent snapshot (`ctx.grid`) and writes a fresh
//! buffer of the same shape, so no cell ever sees an already-updated
//! neighbor. Randomness comes only from `ctx.rng`.

mod life;
mod ripple;
mod wave;
mod rain;
mod spiral;
mod noise;
mod rule30;
mod image;

pub use life::{count_neighbors, LifePattern};
pub use ripple::{advance_ripples, draw_ripples, RipplePattern};
pub use wave::WavePattern;
pub use rain::{fall, RainPattern};
pub use spiral::SpiralPattern;
pub use noise::NoisePattern;
pub use rule30::{Rule30Pattern, RULE30_TABLE};
pub use image::ImagePattern;

use rand::rngs::SmallRng;

use crate::core::grid::Grid;
use crate::domain::patterns::{Pattern, PatternState};
use crate::domain::raster::Raster;

/// Random source threaded through every step
pub type EngineRng = SmallRng;

/// Inputs for one step
pub struct StepContext<'a> {
    pub grid: &'a Grid,
    pub state: &'a PatternState,
    pub rng: &'a mut EngineRng,
    /// Host-supplied raster, only read by the image pattern
    pub image: Option<&'a Raster>,
}

/// Result of one step. The caller decides whether to commit it.
#[derive(Clone, Debug)]
pub struct StepOutcome {
    pub grid: Grid,
    pub changed: bool,
    pub state: PatternState,
}

impl StepOutcome {
    /// Fresh grid that always counts as a change
    #[inline]
    pub fn changed(grid: Grid, state: PatternState) -> Self {
        Self { grid, changed: true, state }
    }
}

/// Pattern trait - each animation implements this
pub trait PatternBehavior {
    fn step(&self, ctx: &mut StepContext) -> StepOutcome;
}

/// Pattern registry - dispatch by pattern id
pub struct PatternRegistry {
    life: LifePattern,
    ripple: RipplePattern,
    wave: WavePattern,
    rain: RainPattern,
    spiral: SpiralPattern,
    noise: NoisePattern,
    rule30: Rule30Pattern,
    image: ImagePattern,
}

impl PatternRegistry {
    pub fn new() -> Self {
        Self {
            life: LifePattern::new(),
            ripple: RipplePattern::new(),
            wave: WavePattern::new(),
            rain: RainPattern::new(),
            spiral: SpiralPattern::new(),
            noise: NoisePattern::new(),
            rule30: Rule30Pattern::new(),
            image: ImagePattern::new(),
        }
    }

    /// Dispatch one step to the pattern's implementation
    pub fn step(&self, pattern: Pattern, ctx: &mut StepContext) -> StepOutcome {
        match pattern {
            Pattern::Life => self.life.step(ctx),
            Pattern::Ripple => self.ripple.step(ctx),
            Pattern::Wave => self.wave.step(ctx),
            Pattern::Rain => self.rain.step(ctx),
            Pattern::Spiral => self.spiral.step(ctx),
            Pattern::Noise => self.noise.step(ctx),
            Pattern::Rule30 => self.rule30.step(ctx),
            Pattern::ImageThreshold => self.image.step(ctx),
        }
    }

    /// Grid a pattern starts from when it becomes active
    pub fn seed_grid(&self, pattern: Pattern, rows: usize, cols: usize, density: f64, rng: &mut EngineRng) -> Grid {
        match pattern {
            Pattern::Life | Pattern::Noise => Grid::randomized(rows, cols, density, rng),
            Pattern::Rule30 => Rule30Pattern::seed(rows, cols),
            Pattern::ImageThreshold
            | Pattern::Ripple
            | Pattern::Wave
            | Pattern::Rain
            | Pattern::Spiral => Grid::empty(rows, cols),
        }
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::new()
    }
}
