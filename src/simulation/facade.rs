use wasm_bindgen::prelude::*;

use crate::domain::calendar::CalendarQuery;
use crate::domain::overrides::OverrideTable;
use crate::domain::patterns::Pattern;
use crate::domain::raster::Raster;
use crate::error::EngineError;

use super::{host_clock, DisplayMode, EngineCore};

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn pattern_from_id(id: u8) -> Result<Pattern, JsValue> {
    Pattern::from_id(id).ok_or_else(|| js_error(EngineError::UnknownPattern(id.to_string())))
}

#[wasm_bindgen]
pub struct ActivityGrid {
    core: EngineCore,
}

#[wasm_bindgen]
impl ActivityGrid {
    /// 7x52 grid with default settings and a clock-seeded RNG
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: EngineCore::default(),
        }
    }

    /// Engine from a camelCase JSON config (every field optional)
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: String) -> Result<ActivityGrid, JsValue> {
        let core = EngineCore::from_json(&json).map_err(js_error)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> usize { self.core.rows() }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> usize { self.core.cols() }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.core.generation() }

    #[wasm_bindgen(getter)]
    pub fn pattern(&self) -> u8 { self.core.pattern().id() }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool { self.core.is_running() }

    /// "Running", "Paused", "Empty Grid", "Stable" or "Max Generations Reached"
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> String {
        self.core.status().label().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn showing_calendar(&self) -> bool {
        self.core.display_mode() == DisplayMode::Calendar
    }

    /// Row-major copy of the cell values
    pub fn grid_values(&self) -> Vec<u32> {
        self.core.grid().as_slice().to_vec()
    }

    /// Get pointer to the cell array (for JS rendering)
    pub fn cells_ptr(&self) -> *const u32 {
        self.core.cells_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.core.cells_len()
    }

    /// Refresh the intensity buffer and return its pointer (`cells_len` bytes)
    pub fn render_levels_ptr(&mut self) -> *const u8 {
        self.core.render_levels();
        self.core.levels_ptr()
    }

    pub fn render_levels(&mut self) -> Vec<u8> {
        self.core.render_levels().to_vec()
    }

    // === SCHEDULER ===

    pub fn start(&mut self, now: f64) {
        self.core.start(now);
    }

    pub fn start_now(&mut self) {
        self.core.start(host_clock::now_ms());
    }

    pub fn stop(&mut self) {
        self.core.stop();
    }

    pub fn tick(&mut self, now: f64) -> bool {
        self.core.tick(now)
    }

    pub fn tick_now(&mut self) -> bool {
        self.core.tick(host_clock::now_ms())
    }

    // === COMMANDS ===

    pub fn switch_pattern(&mut self, id: u8) -> Result<(), JsValue> {
        self.core.switch_pattern(pattern_from_id(id)?);
        Ok(())
    }

    /// Switch by host key ("gameOfLife", "ripple", ...)
    pub fn switch_pattern_key(&mut self, key: String) -> Result<(), JsValue> {
        let pattern = Pattern::from_key(&key).ok_or_else(|| js_error(EngineError::UnknownPattern(key)))?;
        self.core.switch_pattern(pattern);
        Ok(())
    }

    pub fn toggle_pattern(&mut self, id: u8) -> Result<(), JsValue> {
        self.core.toggle_pattern(pattern_from_id(id)?, host_clock::now_ms());
        Ok(())
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    pub fn randomize(&mut self) {
        self.core.randomize();
    }

    /// Decoded pixels (RGBA from a canvas, or packed RGB)
    pub fn set_image(&mut self, width: u32, height: u32, data: Vec<u8>) -> Result<(), JsValue> {
        let raster = Raster::from_pixels(width, height, &data).map_err(js_error)?;
        self.core.set_image(raster);
        Ok(())
    }

    pub fn clear_image(&mut self) {
        self.core.clear_image();
    }

    #[wasm_bindgen(getter)]
    pub fn has_image(&self) -> bool { self.core.has_image() }

    // === CALENDAR ===

    /// Ingest a GraphQL response (or bare week array). On error nothing changes.
    pub fn ingest_calendar(&mut self, json: String, login: String) -> Result<(), JsValue> {
        self.core
            .ingest_calendar_json(&json, &login)
            .map_err(js_error)?;
        Ok(())
    }

    pub fn show_calendar(&mut self) -> bool {
        self.core.show_calendar()
    }

    pub fn set_overrides(&mut self, json: String) -> Result<(), JsValue> {
        let table = OverrideTable::from_json(&json).map_err(js_error)?;
        self.core.set_overrides(table);
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn start_date(&self) -> Option<String> {
        self.core.calendar()?.start_date.map(|d| d.to_string())
    }

    #[wasm_bindgen(getter)]
    pub fn end_date(&self) -> Option<String> {
        self.core.calendar()?.end_date.map(|d| d.to_string())
    }

    pub fn month_labels(&self) -> Vec<String> {
        self.core
            .calendar()
            .map(|c| c.month_labels.clone())
            .unwrap_or_default()
    }

    #[wasm_bindgen(getter)]
    pub fn total_contributions(&self) -> u64 {
        self.core.calendar().map_or(0, |c| c.total)
    }

    #[wasm_bindgen(getter)]
    pub fn overrides_applied(&self) -> u64 {
        self.core.calendar().map_or(0, |c| c.overrides_applied)
    }

    /// GraphQL request body for one calendar year, for the host's fetcher
    pub fn calendar_request(login: String, year: i32) -> Result<String, JsValue> {
        CalendarQuery::calendar_year(login, year)
            .map(|q| q.to_request_json())
            .ok_or_else(|| JsValue::from_str(&format!("year {year} is out of range")))
    }

    // === SETTINGS ===

    pub fn set_frame_interval(&mut self, ms: f64) {
        self.core.set_frame_interval(ms);
    }

    #[wasm_bindgen(getter)]
    pub fn frame_interval(&self) -> f64 { self.core.frame_interval() }

    pub fn set_max_generations(&mut self, max: u64) {
        self.core.set_max_generations(max);
    }

    #[wasm_bindgen(getter)]
    pub fn max_generations(&self) -> u64 { self.core.max_generations() }

    pub fn set_seed_density(&mut self, density: f64) {
        self.core.set_seed_density(density);
    }
}

impl Default for ActivityGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityGrid {
    /// Native access to the wrapped engine
    pub fn core(&self) -> &EngineCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut EngineCore {
        &mut self.core
    }
}
