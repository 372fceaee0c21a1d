//! Month labels for the ingested date range

use chrono::{Datelike, NaiveDate};

/// Labels never exceed one year's worth
pub const MAX_MONTH_LABELS: usize = 12;

/// One abbreviated English month name ("Jan", "Feb", ...) per calendar
/// month from the start month through `end` inclusive, capped at 12.
pub fn month_labels(start: NaiveDate, end: NaiveDate) -> Vec<String> {
    let mut labels = Vec::new();
    let Some(mut current) = start.with_day(1) else {
        return labels;
    };

    while current <= end && labels.len() < MAX_MONTH_LABELS {
        labels.push(current.format("%b").to_string());
        current = match next_month(current) {
            Some(next) => next,
            None => break,
        };
    }
    labels
}

fn next_month(date: NaiveDate) -> Option<NaiveDate> {
    if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    }
}
