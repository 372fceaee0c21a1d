use activity_grid_engine::{pattern_rule30, pattern_wave, ActivityGrid, Pattern, RunState};

fn seeded() -> ActivityGrid {
    ActivityGrid::with_config(r#"{"rngSeed": 7, "frameIntervalMs": 100}"#.to_string())
        .unwrap_or_else(|_| panic!("config should load"))
}

#[test]
fn facade_smoke_runs_a_pattern() {
    let mut grid = seeded();
    assert_eq!((grid.rows(), grid.cols()), (7, 52));
    assert_eq!(grid.cells_len(), 7 * 52);
    assert_eq!(grid.frame_interval(), 100.0);

    assert!(grid.switch_pattern(pattern_wave()).is_ok());
    grid.start(0.0);
    assert!(grid.is_running());
    assert_eq!(grid.status(), "Running");

    assert!(!grid.tick(50.0));
    assert!(grid.tick(100.0));
    assert!(grid.tick(200.0));
    assert_eq!(grid.generation(), 2);

    grid.stop();
    assert_eq!(grid.core().run_state(), RunState::Stopped);
    assert_eq!(grid.status(), "Paused");
}

#[test]
fn facade_smoke_rule30_and_levels() {
    let mut grid = seeded();
    assert!(grid.switch_pattern(pattern_rule30()).is_ok());
    assert_eq!(grid.pattern(), Pattern::Rule30.id());

    let values = grid.grid_values();
    assert_eq!(values.iter().filter(|&&v| v == 1).count(), 1);
    assert_eq!(values[3 * 52 + 26], 1);

    let levels = grid.render_levels();
    assert_eq!(levels.len(), values.len());
    assert_eq!(levels[3 * 52 + 26], 1);
}

#[test]
fn facade_smoke_calendar_metadata() {
    let mut grid = seeded();
    assert_eq!(grid.start_date(), None);
    assert!(grid.month_labels().is_empty());

    let json = r#"[{"contributionDays":[
        {"date":"2025-03-09","contributionCount":1},
        {"date":"2025-03-10","contributionCount":0}
    ]}]"#;
    assert!(grid.ingest_calendar(json.to_string(), "ogvaibhavshukla".to_string()).is_ok());

    assert!(grid.showing_calendar());
    assert_eq!(grid.start_date().as_deref(), Some("2025-03-09"));
    assert_eq!(grid.end_date().as_deref(), Some("2025-03-10"));
    assert_eq!(grid.month_labels(), vec!["Mar".to_string()]);
    // Built-in override fills 2025-03-10
    assert_eq!(grid.overrides_applied(), 1);
    assert_eq!(grid.total_contributions(), 2);
}
