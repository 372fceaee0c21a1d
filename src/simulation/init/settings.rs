use crate::domain::overrides::OverrideTable;

use super::EngineCore;

pub(super) fn set_frame_interval(engine: &mut EngineCore, ms: f64) {
    if !ms.is_finite() || ms < 0.0 {
        log::warn!("ignoring frame interval {ms}");
        return;
    }
    engine.config.frame_interval_ms = ms;
    engine.clock.set_frame_interval_ms(ms);
}

pub(super) fn frame_interval(engine: &EngineCore) -> f64 {
    engine.clock.frame_interval_ms()
}

pub(super) fn set_max_generations(engine: &mut EngineCore, max: u64) {
    engine.config.max_generations = max;
    engine.clock.set_max_generations(max);
}

pub(super) fn max_generations(engine: &EngineCore) -> u64 {
    engine.clock.max_generations()
}

pub(super) fn set_seed_density(engine: &mut EngineCore, density: f64) {
    engine.config.seed_density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
}

/// Takes effect on the next ingestion
pub(super) fn set_overrides(engine: &mut EngineCore, overrides: OverrideTable) {
    engine.overrides = overrides;
}
