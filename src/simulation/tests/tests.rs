use super::*;
use crate::domain::calendar::CalendarDay;
use pretty_assertions::assert_eq;

fn engine(seed: u64) -> EngineCore {
    EngineCore::new(EngineConfig::default().with_seed(seed)).unwrap()
}

fn blinker() -> Grid {
    let mut grid = Grid::empty(7, 52);
    for col in 9..12 {
        grid.set(3, col, 1);
    }
    grid
}

fn block() -> Grid {
    let mut grid = Grid::empty(7, 52);
    for (r, c) in [(2, 2), (2, 3), (3, 2), (3, 3)] {
        grid.set(r, c, 1);
    }
    grid
}

/// 52 weeks starting Sunday 2025-01-05, all zero except the given cells
fn year_of_weeks(cells: &[(usize, usize, u32)]) -> Vec<CalendarWeek> {
    let start = chrono::NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
    (0..52)
        .map(|w| {
            CalendarWeek::new(
                (0..7)
                    .map(|d| {
                        let date = start + chrono::Duration::days((w * 7 + d) as i64);
                        let count = cells
                            .iter()
                            .find(|&&(cd, cw, _)| cd == d && cw == w)
                            .map_or(0, |&(_, _, n)| n);
                        CalendarDay::new(date.format("%Y-%m-%d").to_string(), count)
                    })
                    .collect(),
            )
        })
        .collect()
}

#[test]
fn new_engine_is_stopped_and_empty() {
    let engine = engine(1);
    assert_eq!((engine.rows(), engine.cols()), (7, 52));
    assert_eq!(engine.generation(), 0);
    assert_eq!(engine.pattern(), Pattern::Life);
    assert!(!engine.is_running());
    assert_eq!(engine.status(), EngineStatus::EmptyGrid);
    assert_eq!(engine.status().label(), "Empty Grid");
}

#[test]
fn invalid_config_is_rejected() {
    assert!(EngineCore::from_json(r#"{"cols": 0}"#).is_err());
    assert!(EngineCore::from_json(r#"{"frameIntervalMs": -1}"#).is_err());
}

#[test]
fn tick_is_a_no_op_when_stopped() {
    let mut engine = engine(2);
    engine.switch_pattern(Pattern::Wave);
    let before = engine.grid().clone();
    assert!(!engine.tick(10_000.0));
    assert_eq!(engine.grid(), &before);
    assert_eq!(engine.generation(), 0);
}

#[test]
fn tick_waits_for_the_frame_interval() {
    let mut engine = engine(3);
    engine.switch_pattern(Pattern::Wave);
    engine.start(1_000.0);

    assert!(!engine.tick(1_100.0));
    assert_eq!(engine.generation(), 0);
    assert!(engine.tick(1_150.0));
    assert_eq!(engine.generation(), 1);
    // Next frame is due one interval after the last one, not after the tick
    assert!(!engine.tick(1_299.0));
    assert!(engine.tick(1_300.0));
    assert_eq!(engine.generation(), 2);
}

#[test]
fn at_most_one_step_per_tick() {
    let mut engine = engine(4);
    engine.switch_pattern(Pattern::Spiral);
    engine.start(0.0);
    assert!(engine.tick(10_000.0));
    assert_eq!(engine.generation(), 1);
}

#[test]
fn switch_pattern_resets_generation_and_state() {
    let mut engine = engine(5);
    engine.switch_pattern(Pattern::Wave);
    engine.start(0.0);
    for i in 1..=3 {
        engine.tick(i as f64 * 150.0);
    }
    assert_eq!(engine.generation(), 3);
    assert_eq!(engine.pattern_state(), &PatternState::Wave { time: 3 });

    engine.switch_pattern(Pattern::Rule30);
    assert_eq!(engine.generation(), 0);
    assert!(engine.pattern_state().is_empty());
    assert!(engine.is_running());
    assert_eq!(engine.grid().live_count(), 1);
    assert_eq!(engine.grid().get(3, 26), 1);
}

#[test]
fn life_still_life_stops_without_committing() {
    let mut engine = engine(6);
    engine.switch_pattern(Pattern::Life);
    engine.grid = block();
    engine.start(0.0);

    assert!(!engine.tick(150.0));
    assert!(!engine.is_running());
    assert_eq!(engine.generation(), 0);
    assert_eq!(engine.grid(), &block());
}

#[test]
fn life_oscillator_keeps_running() {
    let mut engine = engine(7);
    engine.grid = blinker();
    engine.start(0.0);
    for i in 1..=4 {
        assert!(engine.tick(i as f64 * 150.0));
    }
    assert_eq!(engine.generation(), 4);
    assert_eq!(engine.grid(), &blinker());
    engine.stop();
    assert_eq!(engine.status(), EngineStatus::Paused);
}

#[test]
fn stable_status_after_life_settles() {
    let mut engine = engine(8);
    // A block next to a single cell: the stray cell dies, the block stays
    let mut grid = block();
    grid.set(6, 40, 1);
    engine.grid = grid;
    engine.start(0.0);

    assert!(engine.tick(150.0));
    assert_eq!(engine.grid(), &block());
    assert!(!engine.tick(300.0));
    assert!(!engine.is_running());
    assert_eq!(engine.generation(), 1);
    assert_eq!(engine.status(), EngineStatus::Stable);
}

#[test]
fn generation_cap_stops_the_scheduler() {
    let mut engine = engine(9);
    engine.set_max_generations(3);
    engine.switch_pattern(Pattern::Noise);
    engine.start(0.0);

    let mut committed = 0;
    for i in 1..=10 {
        if engine.tick(i as f64 * 150.0) {
            committed += 1;
        }
    }
    assert_eq!(committed, 3);
    assert_eq!(engine.generation(), 3);
    assert!(!engine.is_running());
    assert_eq!(engine.status(), EngineStatus::MaxGenerationsReached);
    assert_eq!(engine.status().label(), "Max Generations Reached");
}

#[test]
fn zero_cap_never_commits() {
    let mut engine = engine(10);
    engine.set_max_generations(0);
    engine.switch_pattern(Pattern::Wave);
    engine.start(0.0);
    assert!(!engine.tick(150.0));
    assert!(!engine.is_running());
    assert_eq!(engine.generation(), 0);
}

#[test]
fn stop_is_idempotent_and_wins_over_pending_ticks() {
    let mut engine = engine(11);
    engine.switch_pattern(Pattern::Rain);
    engine.start(0.0);
    engine.stop();
    engine.stop();
    assert!(!engine.tick(1_000.0));
    assert_eq!(engine.run_state(), RunState::Stopped);
}

#[test]
fn reset_and_randomize_stop_and_rewind() {
    let mut engine = engine(12);
    engine.switch_pattern(Pattern::Wave);
    engine.start(0.0);
    engine.tick(150.0);

    engine.reset();
    assert!(!engine.is_running());
    assert_eq!(engine.generation(), 0);
    assert_eq!(engine.grid().live_count(), 0);
    assert!(engine.pattern_state().is_empty());

    engine.set_seed_density(1.0);
    engine.randomize();
    assert_eq!(engine.grid().live_count(), 7 * 52);
    assert_eq!(engine.generation(), 0);
}

#[test]
fn seeded_engines_are_deterministic() {
    let mut a = engine(42);
    let mut b = engine(42);
    for engine in [&mut a, &mut b] {
        engine.switch_pattern(Pattern::Rain);
        engine.start(0.0);
        for i in 1..=20 {
            engine.tick(i as f64 * 150.0);
        }
    }
    assert_eq!(a.grid(), b.grid());
}

#[test]
fn toggle_restores_the_baseline() {
    let mut engine = engine(13);
    engine.ingest_calendar(&year_of_weeks(&[(3, 10, 5)]), "octocat");
    let calendar = engine.grid().clone();

    engine.toggle_pattern(Pattern::Wave, 0.0);
    assert!(engine.is_running());
    assert_eq!(engine.display_mode(), DisplayMode::Animation);
    engine.tick(150.0);
    assert_ne!(engine.grid(), &calendar);

    engine.toggle_pattern(Pattern::Wave, 200.0);
    assert!(!engine.is_running());
    assert_eq!(engine.grid(), &calendar);
    assert_eq!(engine.display_mode(), DisplayMode::Calendar);
}

#[test]
fn toggling_another_pattern_hands_over() {
    let mut engine = engine(14);
    let start = engine.grid().clone();
    engine.toggle_pattern(Pattern::Wave, 0.0);
    engine.toggle_pattern(Pattern::Spiral, 10.0);
    assert!(engine.is_running());
    assert_eq!(engine.pattern(), Pattern::Spiral);

    engine.toggle_pattern(Pattern::Spiral, 20.0);
    assert!(!engine.is_running());
    assert_eq!(engine.grid(), &start);
}

#[test]
fn ingestion_replaces_the_grid() {
    let mut engine = engine(15);
    engine.switch_pattern(Pattern::Noise);
    engine.start(0.0);

    let snapshot = engine.ingest_calendar(&year_of_weeks(&[(3, 10, 5)]), "octocat").clone();
    assert_eq!(snapshot.total, 5);
    assert_eq!(engine.grid().get(3, 10), 5);
    assert_eq!(engine.grid().total(), 5);
    assert!(!engine.is_running());
    assert_eq!(engine.display_mode(), DisplayMode::Calendar);
    assert_eq!(engine.calendar(), Some(&snapshot));
}

#[test]
fn builtin_overrides_fill_known_gaps() {
    let mut engine = engine(16);
    let snapshot = engine.ingest_calendar(&year_of_weeks(&[]), "ogvaibhavshukla");
    // 2025-03-10, 2025-04-12 and 2025-05-12 are inside the window
    assert_eq!(snapshot.overrides_applied, 10);
    assert_eq!(snapshot.total, 10);
    assert_eq!(engine.grid().live_count(), 3);
}

#[test]
fn bad_payload_leaves_state_unchanged() {
    let mut engine = engine(17);
    engine.ingest_calendar(&year_of_weeks(&[(0, 0, 2)]), "octocat");
    let grid = engine.grid().clone();
    let snapshot = engine.calendar().cloned();

    let bad = r#"{"data":{"user":{"contributionsCollection":{"contributionCalendar":{"weeks":"nope"}}}}}"#;
    assert!(engine.ingest_calendar_json(bad, "octocat").is_err());
    assert!(engine.ingest_calendar_json("{", "octocat").is_err());

    assert_eq!(engine.grid(), &grid);
    assert_eq!(engine.calendar().cloned(), snapshot);
    assert_eq!(engine.display_mode(), DisplayMode::Calendar);
}

/// Serves fixed weeks, or fails when it has none
#[test]
fn malformed_week_keeps_the_rest_of_the_calendar() {
    let mut engine = engine(23);
    let json = r#"[{"contributionDays":"oops"},{"contributionDays":[{"date":"2025-01-12","contributionCount":4}]}]"#;
    let snapshot = engine.ingest_calendar_json(json, "octocat").unwrap();
    assert_eq!(snapshot.total, 4);
    assert_eq!(engine.grid().get(0, 1), 4);
    assert_eq!(engine.grid().live_count(), 1);
}

#[test]
fn reset_leaves_calendar_display() {
    let mut engine = engine(24);
    engine.ingest_calendar(&year_of_weeks(&[(2, 5, 9)]), "octocat");
    assert_eq!(engine.display_mode(), DisplayMode::Calendar);

    engine.reset();
    assert_eq!(engine.display_mode(), DisplayMode::Animation);
    assert_eq!(engine.grid().live_count(), 0);
    // The snapshot itself survives and can be shown again
    assert!(engine.show_calendar());
}

struct FixedSource(Option<Vec<CalendarWeek>>);

impl CalendarSource for FixedSource {
    fn fetch_weeks(&self, _query: &CalendarQuery) -> Result<Vec<CalendarWeek>, CalendarError> {
        self.0.clone().ok_or_else(|| CalendarError::Source("offline".into()))
    }
}

#[test]
fn refresh_goes_through_the_source() {
    let mut engine = engine(18);
    let query = CalendarQuery::calendar_year("octocat", 2025).unwrap();

    let failing = FixedSource(None);
    assert!(engine.refresh_calendar(&failing, &query).is_err());
    assert!(engine.calendar().is_none());

    let source = FixedSource(Some(year_of_weeks(&[(1, 51, 3)])));
    let snapshot = engine.refresh_calendar(&source, &query).unwrap();
    assert_eq!(snapshot.total, 3);
    assert_eq!(engine.grid().get(1, 51), 3);
}

#[test]
fn show_calendar_restores_the_ingested_grid() {
    let mut engine = engine(19);
    assert!(!engine.show_calendar());

    engine.ingest_calendar(&year_of_weeks(&[(2, 5, 9)]), "octocat");
    engine.randomize();
    assert!(engine.show_calendar());
    assert_eq!(engine.grid().get(2, 5), 9);
    assert_eq!(engine.display_mode(), DisplayMode::Calendar);
}

#[test]
fn image_pattern_without_image_holds_still() {
    let mut engine = engine(20);
    engine.switch_pattern(Pattern::ImageThreshold);
    engine.start(0.0);
    assert!(engine.tick(150.0));
    assert_eq!(engine.grid().live_count(), 0);

    let white = Raster::from_pixels(52, 7, &vec![255u8; 52 * 7 * 4]).unwrap();
    engine.set_image(white);
    assert!(engine.tick(300.0));
    assert_eq!(engine.grid().live_count(), 7 * 52);
}

#[test]
fn render_levels_bucket_counts() {
    assert_eq!(
        [0, 1, 2, 3, 4, 6, 7, 40].map(intensity_level),
        [0, 1, 2, 2, 3, 3, 4, 4]
    );

    let mut engine = engine(21);
    engine.ingest_calendar(&year_of_weeks(&[(0, 0, 1), (0, 1, 3), (0, 2, 12)]), "octocat");
    let levels = engine.render_levels();
    assert_eq!(levels.len(), 7 * 52);
    assert_eq!(&levels[..4], &[1, 2, 4, 0]);
}

#[test]
fn settings_update_the_clock() {
    let mut engine = engine(22);
    engine.set_frame_interval(40.0);
    engine.set_frame_interval(-5.0);
    assert_eq!(engine.frame_interval(), 40.0);
    engine.set_max_generations(7);
    assert_eq!(engine.max_generations(), 7);
    assert_eq!(engine.config().max_generations, 7);
}
