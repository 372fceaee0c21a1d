use rand::SeedableRng;

use crate::core::grid::Grid;
use crate::domain::config::EngineConfig;
use crate::domain::overrides::OverrideTable;
use crate::domain::patterns::{Pattern, PatternState};
use crate::systems::patterns::{EngineRng, PatternRegistry};

use super::host_clock::entropy_seed;
use super::{DisplayMode, EngineCore, FrameClock, RunState};

/// Build a stopped engine showing an empty grid. `config` is already validated.
pub(super) fn create_engine_core(config: EngineConfig) -> EngineCore {
    let seed = config.rng_seed.unwrap_or_else(entropy_seed);
    let cells = config.rows * config.cols;
    log::debug!(
        "engine {}x{} interval={}ms cap={} seed={}",
        config.rows,
        config.cols,
        config.frame_interval_ms,
        config.max_generations,
        seed
    );

    EngineCore {
        grid: Grid::empty(config.rows, config.cols),
        patterns: PatternRegistry::new(),
        pattern: Pattern::default(),
        pattern_state: PatternState::Empty,
        clock: FrameClock::new(config.frame_interval_ms, config.max_generations),
        run_state: RunState::Stopped,
        rng: EngineRng::seed_from_u64(seed),

        image: None,
        baseline: None,
        toggled: None,

        calendar: None,
        overrides: OverrideTable::builtin(),
        display_mode: DisplayMode::Animation,

        levels: vec![0u8; cells],
        config,
    }
}
