//! Engine - pattern animation and contribution calendar on one grid
//!
//! `EngineCore` only orchestrates: the pattern steps live in
//! `systems::patterns`, calendar ingestion in `systems::calendar`.
//! The host pumps the scheduler by calling `tick(now)` from its frame loop.

use crate::core::grid::Grid;
use crate::domain::calendar::{CalendarQuery, CalendarSnapshot, CalendarSource, CalendarWeek};
use crate::domain::config::EngineConfig;
use crate::domain::overrides::OverrideTable;
use crate::domain::patterns::{Pattern, PatternState};
use crate::domain::raster::Raster;
use crate::error::{CalendarError, EngineResult};
use crate::systems::patterns::{EngineRng, PatternRegistry};

#[path = "clock/host_clock.rs"]
mod host_clock;
#[path = "step/frame_clock.rs"]
mod frame_clock;
#[path = "step/step.rs"]
mod step;
#[path = "status/status.rs"]
mod status;
#[path = "commands/commands.rs"]
mod commands;
#[path = "calendar/calendar.rs"]
mod calendar;
#[path = "render/render_levels.rs"]
mod render_levels;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::ActivityGrid;
pub use frame_clock::FrameClock;
pub use host_clock::now_ms;
pub use render_levels::intensity_level;
pub use status::EngineStatus;

/// Whether the scheduler applies frames on `tick`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

/// What the grid currently shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Animation,
    Calendar,
}

/// Grid saved by `toggle_pattern` so pausing can put it back
#[derive(Clone, Debug)]
struct Baseline {
    grid: Grid,
    display_mode: DisplayMode,
}

/// The engine state holder
pub struct EngineCore {
    config: EngineConfig,
    patterns: PatternRegistry,
    grid: Grid,
    pattern: Pattern,
    pattern_state: PatternState,
    clock: FrameClock,
    run_state: RunState,
    rng: EngineRng,

    image: Option<Raster>,
    baseline: Option<Baseline>,
    toggled: Option<Pattern>,

    calendar: Option<CalendarSnapshot>,
    overrides: OverrideTable,
    display_mode: DisplayMode,

    // Render transfer buffer (one intensity level per cell)
    levels: Vec<u8>,
}

impl EngineCore {
    /// Create an engine from a validated config
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(init::create_engine_core(config))
    }

    pub fn from_json(json: &str) -> EngineResult<Self> {
        Self::new(EngineConfig::from_json(json)?)
    }

    // === GETTERS ===

    pub fn rows(&self) -> usize { self.grid.rows() }

    pub fn cols(&self) -> usize { self.grid.cols() }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn generation(&self) -> u64 { self.clock.generation() }

    pub fn pattern(&self) -> Pattern { self.pattern }

    pub fn pattern_state(&self) -> &PatternState { &self.pattern_state }

    pub fn run_state(&self) -> RunState { self.run_state }

    pub fn is_running(&self) -> bool { self.run_state == RunState::Running }

    pub fn display_mode(&self) -> DisplayMode { self.display_mode }

    pub fn config(&self) -> &EngineConfig { &self.config }

    pub fn overrides(&self) -> &OverrideTable { &self.overrides }

    /// Metadata of the last successful ingestion
    pub fn calendar(&self) -> Option<&CalendarSnapshot> { self.calendar.as_ref() }

    pub fn has_image(&self) -> bool { self.image.is_some() }

    /// Derived status (see `EngineStatus`)
    pub fn status(&self) -> EngineStatus {
        status::derive_status(self)
    }

    // === SCHEDULER ===

    pub fn start(&mut self, now: f64) {
        step::start(self, now);
    }

    pub fn stop(&mut self) {
        step::stop(self);
    }

    /// Apply at most one frame if the interval has elapsed.
    /// Returns whether a step was committed.
    pub fn tick(&mut self, now: f64) -> bool {
        step::tick(self, now)
    }

    // === COMMANDS ===

    pub fn switch_pattern(&mut self, pattern: Pattern) {
        commands::switch_pattern(self, pattern);
    }

    /// Single-button control: start with baseline, pause and restore, or hand over
    pub fn toggle_pattern(&mut self, pattern: Pattern, now: f64) {
        commands::toggle_pattern(self, pattern, now);
    }

    pub fn reset(&mut self) {
        commands::reset(self);
    }

    pub fn randomize(&mut self) {
        commands::randomize(self);
    }

    pub fn set_image(&mut self, raster: Raster) {
        commands::set_image(self, raster);
    }

    pub fn clear_image(&mut self) {
        commands::clear_image(self);
    }

    // === CALENDAR ===

    /// Replace the grid with the calendar built from `weeks`
    pub fn ingest_calendar(&mut self, weeks: &[CalendarWeek], login: &str) -> &CalendarSnapshot {
        calendar::ingest(self, weeks, login)
    }

    /// Parse and ingest a payload. State is untouched on error.
    pub fn ingest_calendar_json(&mut self, json: &str, login: &str) -> Result<&CalendarSnapshot, CalendarError> {
        calendar::ingest_json(self, json, login)
    }

    /// Fetch through `source` and ingest. State is untouched on error.
    pub fn refresh_calendar(
        &mut self,
        source: &dyn CalendarSource,
        query: &CalendarQuery,
    ) -> Result<&CalendarSnapshot, CalendarError> {
        calendar::refresh(self, source, query)
    }

    /// Put the last ingested calendar back on the grid
    pub fn show_calendar(&mut self) -> bool {
        calendar::show(self)
    }

    // === SETTINGS ===

    pub fn set_frame_interval(&mut self, ms: f64) {
        settings::set_frame_interval(self, ms);
    }

    pub fn frame_interval(&self) -> f64 {
        settings::frame_interval(self)
    }

    pub fn set_max_generations(&mut self, max: u64) {
        settings::set_max_generations(self, max);
    }

    pub fn max_generations(&self) -> u64 {
        settings::max_generations(self)
    }

    pub fn set_seed_density(&mut self, density: f64) {
        settings::set_seed_density(self, density);
    }

    pub fn set_overrides(&mut self, overrides: OverrideTable) {
        settings::set_overrides(self, overrides);
    }

    // === RENDER ===

    /// Per-cell intensity levels 0..=4, refreshed from the current grid
    pub fn render_levels(&mut self) -> &[u8] {
        render_levels::extract_levels(self)
    }

    /// Get pointer to the cell array (for JS rendering)
    pub fn cells_ptr(&self) -> *const u32 {
        self.grid.cells_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.grid.len()
    }

    pub fn levels_ptr(&self) -> *const u8 {
        self.levels.as_ptr()
    }
}

impl Default for EngineCore {
    fn default() -> Self {
        init::create_engine_core(EngineConfig::default())
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
