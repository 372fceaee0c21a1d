//! Activity Grid Engine - pattern animations and contribution calendar in WASM
//!
//! Architecture:
//! - core/        - Grid storage and cell access
//! - domain/      - Config, patterns, calendar records, overrides, raster
//! - systems/     - Pattern steps and calendar ingestion
//! - simulation/  - Engine state, scheduler and the JS facade

pub mod core;
pub mod domain;
pub mod error;
pub mod logging;
pub mod simulation;
pub mod systems;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook plus console logging at `info`
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    logging::install(log::LevelFilter::Info);
    log::info!("activity grid engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Change console verbosity ("off", "error", "warn", "info", "debug", "trace")
#[wasm_bindgen]
pub fn set_log_level(level: String) -> Result<(), JsValue> {
    let filter = logging::parse_level(&level)
        .ok_or_else(|| JsValue::from_str(&format!("unknown log level: {level}")))?;
    log::set_max_level(filter);
    Ok(())
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::grid::Grid;
pub use domain::calendar::{CalendarDay, CalendarPayload, CalendarQuery, CalendarSnapshot, CalendarSource, CalendarWeek};
pub use domain::config::EngineConfig;
pub use domain::overrides::OverrideTable;
pub use domain::patterns::{Pattern, PatternState};
pub use domain::raster::Raster;
pub use error::{CalendarError, EngineError, EngineResult};
pub use simulation::{ActivityGrid, DisplayMode, EngineCore, EngineStatus, RunState};

/// Display name for a pattern id ("Conway's Game of Life", ...)
#[wasm_bindgen]
pub fn pattern_display_name(id: u8) -> Option<String> {
    Pattern::from_id(id).map(|p| p.display_name().to_string())
}

/// Host key for a pattern id ("gameOfLife", "ripple", ...)
#[wasm_bindgen]
pub fn pattern_key(id: u8) -> Option<String> {
    Pattern::from_id(id).map(|p| p.key().to_string())
}

// Export pattern ids for JS
#[wasm_bindgen]
pub fn pattern_life() -> u8 { Pattern::Life.id() }
#[wasm_bindgen]
pub fn pattern_ripple() -> u8 { Pattern::Ripple.id() }
#[wasm_bindgen]
pub fn pattern_wave() -> u8 { Pattern::Wave.id() }
#[wasm_bindgen]
pub fn pattern_rain() -> u8 { Pattern::Rain.id() }
#[wasm_bindgen]
pub fn pattern_spiral() -> u8 { Pattern::Spiral.id() }
#[wasm_bindgen]
pub fn pattern_noise() -> u8 { Pattern::Noise.id() }
#[wasm_bindgen]
pub fn pattern_rule30() -> u8 { Pattern::Rule30.id() }
#[wasm_bindgen]
pub fn pattern_image() -> u8 { Pattern::ImageThreshold.id() }
