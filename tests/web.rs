//! Browser-side smoke tests (`wasm-pack test --headless --firefox`)

#![cfg(target_arch = "wasm32")]

use activity_grid_engine::{init, pattern_life, version, ActivityGrid};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn init_and_version() {
    init();
    assert_eq!(version(), env!("CARGO_PKG_VERSION"));
}

#[wasm_bindgen_test]
fn errors_cross_the_boundary() {
    let mut grid = ActivityGrid::new();
    assert!(grid.switch_pattern(200).is_err());
    assert!(grid.ingest_calendar("{}".to_string(), "octocat".to_string()).is_err());
    assert!(grid.set_image(2, 2, vec![0; 3]).is_err());
    assert!(!grid.showing_calendar());
}

#[wasm_bindgen_test]
fn host_clock_drives_the_scheduler() {
    let mut grid = ActivityGrid::new();
    grid.set_frame_interval(0.0);
    assert!(grid.switch_pattern(pattern_life()).is_ok());
    grid.start_now();
    grid.tick_now();
    assert!(grid.generation() <= 1);
}
