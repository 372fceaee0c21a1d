//! Calendar ingestion - maps an irregular week/day calendar onto the fixed
//! grid (row = weekday, column = week) and patches known gaps.

mod months;

pub use months::{month_labels, MAX_MONTH_LABELS};

use std::collections::BTreeMap;

use crate::core::grid::Grid;
use crate::domain::calendar::{CalendarSnapshot, CalendarWeek};
use crate::domain::overrides::OverrideTable;

/// Days per week column
const DAYS_PER_WEEK: usize = 7;

/// Non-zero days logged per ingestion
const LOGGED_SAMPLES: usize = 5;

/// One observed non-zero day: date, week (column), day (row), count
pub type NonZeroDay<'a> = (&'a str, usize, usize, u32);

/// The newest `cols` weeks, oldest first
pub fn kept_weeks(weeks: &[CalendarWeek], cols: usize) -> &[CalendarWeek] {
    &weeks[weeks.len().saturating_sub(cols)..]
}

/// Build the grid, date range, month labels and totals for one login.
///
/// `weeks` are oldest first. Only the last `cols` weeks are used; day
/// indices past the grid height are dropped.
pub fn ingest_weeks(
    weeks: &[CalendarWeek],
    login: &str,
    overrides: &OverrideTable,
    rows: usize,
    cols: usize,
) -> CalendarSnapshot {
    let kept = kept_weeks(weeks, cols);
    let mut grid = Grid::empty(rows, cols);
    let mut total = 0u64;
    let mut start_date = None;
    let mut end_date = None;

    for (week_idx, week) in kept.iter().enumerate() {
        for (day_idx, day) in week.contribution_days.iter().enumerate() {
            if day_idx < DAYS_PER_WEEK.min(rows) && week_idx < cols {
                grid.set(day_idx as i64, week_idx as i64, day.contribution_count);
                total += u64::from(day.contribution_count);
            }

            if let Some(date) = day.parsed_date() {
                if start_date.map_or(true, |s| date < s) {
                    start_date = Some(date);
                }
                if end_date.map_or(true, |e| date > e) {
                    end_date = Some(date);
                }
            }
        }
    }

    log::debug!(
        "calendar: {} weeks received, {} kept, {} contributions observed",
        weeks.len(),
        kept.len(),
        total
    );
    if log::log_enabled!(log::Level::Debug) {
        log::debug!(
            "calendar: first non-zero days {:?}",
            nonzero_samples(kept, rows, cols, LOGGED_SAMPLES)
        );
    }

    let month_labels = match (start_date, end_date) {
        (Some(start), Some(end)) => month_labels(start, end),
        _ => Vec::new(),
    };

    let overrides_applied = match overrides.for_login(login) {
        Some(days) => apply_overrides(&mut grid, kept, days),
        None => 0,
    };
    total += overrides_applied;

    if overrides_applied > 0 {
        log::info!(
            "calendar: {} override contributions applied for {}, total now {}",
            overrides_applied,
            login,
            total
        );
    }

    CalendarSnapshot {
        grid,
        start_date,
        end_date,
        month_labels,
        total,
        overrides_applied,
    }
}

/// Fill empty cells from `overrides` (date -> count). Returns the sum added.
///
/// A date is located in the first kept week that contains it. Cells that
/// already hold a count are never overwritten, so applying the same table
/// twice changes nothing the second time. Dates outside the window are
/// ignored.
pub fn apply_overrides(grid: &mut Grid, kept: &[CalendarWeek], overrides: &BTreeMap<String, u32>) -> u64 {
    let mut added = 0u64;

    for (date, &count) in overrides {
        let Some((week_idx, day_idx)) = locate(kept, date) else {
            continue;
        };
        if day_idx >= DAYS_PER_WEEK || week_idx >= grid.cols() || day_idx >= grid.rows() {
            continue;
        }

        let (row, col) = (day_idx as i64, week_idx as i64);
        let current = grid.get(row, col);
        if current == 0 {
            grid.set(row, col, count);
            added += u64::from(count);
            log::debug!("calendar: override applied {} -> {}", date, count);
        } else {
            log::debug!("calendar: override skipped {}, already {}", date, current);
        }
    }

    added
}

/// First `limit` in-bounds days with a non-zero count, in grid order of weeks
pub fn nonzero_samples(kept: &[CalendarWeek], rows: usize, cols: usize, limit: usize) -> Vec<NonZeroDay<'_>> {
    let day_limit = DAYS_PER_WEEK.min(rows);
    kept.iter()
        .take(cols)
        .enumerate()
        .flat_map(|(week_idx, week)| {
            week.contribution_days
                .iter()
                .take(day_limit)
                .enumerate()
                .filter(|(_, day)| day.contribution_count > 0)
                .map(move |(day_idx, day)| (day.date.as_str(), week_idx, day_idx, day.contribution_count))
        })
        .take(limit)
        .collect()
}

fn locate(kept: &[CalendarWeek], date: &str) -> Option<(usize, usize)> {
    kept.iter()
        .enumerate()
        .find_map(|(week_idx, week)| week.day_index(date).map(|day_idx| (week_idx, day_idx)))
}
