use crate::core::grid::Grid;
use crate::domain::calendar::{CalendarPayload, CalendarQuery, CalendarSnapshot, CalendarSource, CalendarWeek};
use crate::domain::patterns::PatternState;
use crate::error::CalendarError;
use crate::systems::calendar::ingest_weeks;

use super::{step, DisplayMode, EngineCore};

/// Stops the animation and shows the new calendar
pub(super) fn ingest<'a>(engine: &'a mut EngineCore, weeks: &[CalendarWeek], login: &str) -> &'a CalendarSnapshot {
    let snapshot = ingest_weeks(
        weeks,
        login,
        &engine.overrides,
        engine.config.rows,
        engine.config.cols,
    );
    log::info!(
        "calendar for {login}: {} contributions ({} from overrides)",
        snapshot.total,
        snapshot.overrides_applied
    );
    display(engine, snapshot.grid.clone());
    engine.calendar.insert(snapshot)
}

pub(super) fn ingest_json<'a>(
    engine: &'a mut EngineCore,
    json: &str,
    login: &str,
) -> Result<&'a CalendarSnapshot, CalendarError> {
    let weeks = CalendarPayload::parse(json).map_err(|e| {
        log::warn!("calendar payload rejected: {e}");
        e
    })?;
    Ok(ingest(engine, &weeks, login))
}

pub(super) fn refresh<'a>(
    engine: &'a mut EngineCore,
    source: &dyn CalendarSource,
    query: &CalendarQuery,
) -> Result<&'a CalendarSnapshot, CalendarError> {
    log::debug!("fetching calendar for {} ({}..{})", query.login, query.from, query.to);
    let weeks = source.fetch_weeks(query).map_err(|e| {
        log::warn!("calendar fetch for {} failed: {e}", query.login);
        e
    })?;
    Ok(ingest(engine, &weeks, &query.login))
}

pub(super) fn show(engine: &mut EngineCore) -> bool {
    match engine.calendar.as_ref() {
        Some(snapshot) => {
            let grid = snapshot.grid.clone();
            display(engine, grid);
            true
        }
        None => false,
    }
}

fn display(engine: &mut EngineCore, grid: Grid) {
    step::stop(engine);
    engine.grid = grid;
    engine.pattern_state = PatternState::Empty;
    engine.clock.reset_generation();
    engine.baseline = None;
    engine.toggled = None;
    engine.display_mode = DisplayMode::Calendar;
}
