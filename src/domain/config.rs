//! Engine configuration
//!
//! Loaded from JSON by the host (camelCase keys, every field optional) or
//! built from defaults. Runtime changes go through `simulation::settings`.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

pub const DEFAULT_ROWS: usize = 7;
pub const DEFAULT_COLS: usize = 52;
pub const DEFAULT_FRAME_INTERVAL_MS: f64 = 150.0;
pub const DEFAULT_MAX_GENERATIONS: u64 = 500;
pub const DEFAULT_SEED_DENSITY: f64 = 0.3;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Grid rows (days of the week)
    pub rows: usize,
    /// Grid columns (weeks)
    pub cols: usize,
    /// Minimum time between two applied frames
    pub frame_interval_ms: f64,
    /// Generation cap after which the scheduler stops itself
    pub max_generations: u64,
    /// Live probability for randomized grids
    pub seed_density: f64,
    /// Fixed RNG seed; `None` seeds from the host clock
    pub rng_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            max_generations: DEFAULT_MAX_GENERATIONS,
            seed_density: DEFAULT_SEED_DENSITY,
            rng_seed: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: EngineConfig = serde_json::from_str(json).map_err(EngineError::ConfigParse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(EngineError::InvalidConfig(format!(
                "grid must be at least 1x1, got {}x{}",
                self.rows, self.cols
            )));
        }
        if !self.frame_interval_ms.is_finite() || self.frame_interval_ms < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "frameIntervalMs must be a non-negative number, got {}",
                self.frame_interval_ms
            )));
        }
        if !(0.0..=1.0).contains(&self.seed_density) {
            return Err(EngineError::InvalidConfig(format!(
                "seedDensity must be within [0, 1], got {}",
                self.seed_density
            )));
        }
        Ok(())
    }

    /// Same config with a fixed seed (tests, reproducible demos)
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}
