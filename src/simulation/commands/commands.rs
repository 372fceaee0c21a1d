use crate::core::grid::Grid;
use crate::domain::patterns::{Pattern, PatternState};
use crate::domain::raster::Raster;

use super::{step, Baseline, DisplayMode, EngineCore};

/// New pattern from generation 0 on its own seed grid; run state is kept
pub(super) fn switch_pattern(engine: &mut EngineCore, pattern: Pattern) {
    engine.pattern = pattern;
    engine.pattern_state = PatternState::Empty;
    engine.clock.reset_generation();
    engine.grid = engine.patterns.seed_grid(
        pattern,
        engine.config.rows,
        engine.config.cols,
        engine.config.seed_density,
        &mut engine.rng,
    );
    engine.display_mode = DisplayMode::Animation;
    log::debug!("switched to {}", pattern.display_name());
}

pub(super) fn toggle_pattern(engine: &mut EngineCore, pattern: Pattern, now: f64) {
    if !engine.is_running() {
        engine.baseline = Some(Baseline {
            grid: engine.grid.clone(),
            display_mode: engine.display_mode,
        });
        engine.toggled = Some(pattern);
        switch_pattern(engine, pattern);
        step::start(engine, now);
        return;
    }

    if engine.toggled == Some(pattern) {
        step::stop(engine);
        engine.toggled = None;
        if let Some(baseline) = engine.baseline.take() {
            engine.grid = baseline.grid;
            engine.display_mode = baseline.display_mode;
        }
        return;
    }

    engine.toggled = Some(pattern);
    switch_pattern(engine, pattern);
}

pub(super) fn reset(engine: &mut EngineCore) {
    step::stop(engine);
    engine.grid.clear();
    engine.pattern_state = PatternState::Empty;
    engine.clock.reset_generation();
    engine.display_mode = DisplayMode::Animation;
}

pub(super) fn randomize(engine: &mut EngineCore) {
    step::stop(engine);
    engine.grid = Grid::randomized(
        engine.config.rows,
        engine.config.cols,
        engine.config.seed_density,
        &mut engine.rng,
    );
    engine.pattern_state = PatternState::Empty;
    engine.clock.reset_generation();
    engine.display_mode = DisplayMode::Animation;
}

pub(super) fn set_image(engine: &mut EngineCore, raster: Raster) {
    log::debug!("image set: {}x{}", raster.width(), raster.height());
    engine.image = Some(raster);
}

pub(super) fn clear_image(engine: &mut EngineCore) {
    engine.image = None;
}
