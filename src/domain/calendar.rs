//! Contribution calendar records and the upstream payload shape
//!
//! The data source (a GraphQL endpoint, fetched by the host) returns weeks
//! of up to seven days, oldest first. Inside the weeks array everything is
//! lenient: a day list that is missing or not an array reads as empty, a
//! count that is not a non-negative integer reads as 0. Only a payload
//! without a weeks array is an error.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::core::grid::Grid;
use crate::error::CalendarError;

/// Where the weeks live inside a GraphQL response
const WEEKS_POINTER: &str = "/data/user/contributionsCollection/contributionCalendar/weeks";

pub const GRAPHQL_QUERY: &str = "query($login: String!, $from: DateTime!, $to: DateTime!) {
  user(login: $login) {
    contributionsCollection(from: $from, to: $to) {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            date
            contributionCount
          }
        }
      }
    }
  }
}";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    /// ISO-8601 calendar day, e.g. `2025-03-10`
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub contribution_count: u32,
}

impl CalendarDay {
    pub fn new(date: impl Into<String>, contribution_count: u32) -> Self {
        Self {
            date: date.into(),
            contribution_count,
        }
    }

    /// Parsed date; `None` for anything that is not `YYYY-MM-DD` (a trailing
    /// time part is tolerated)
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let day = self.date.get(..10).unwrap_or(self.date.as_str());
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }
}

/// Up to seven days, Sunday..Saturday
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarWeek {
    #[serde(default, deserialize_with = "lenient_days")]
    pub contribution_days: Vec<CalendarDay>,
}

impl CalendarWeek {
    pub fn new(days: Vec<CalendarDay>) -> Self {
        Self { contribution_days: days }
    }

    /// Index of the first day whose date string equals `date`
    pub fn day_index(&self, date: &str) -> Option<usize> {
        self.contribution_days.iter().position(|d| d.date == date)
    }
}

impl CalendarWeek {
    /// A week entry that is not an object reads as an empty week
    fn from_value_lenient(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

fn lenient_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(date) => date,
        _ => String::new(),
    })
}

fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_u64().and_then(|n| u32::try_from(n).ok()).unwrap_or(0))
}

/// Keeps day positions: a malformed day becomes an empty day, not a gap
fn lenient_days<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<CalendarDay>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(days) => days
            .into_iter()
            .map(|day| serde_json::from_value(day).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    })
}

pub struct CalendarPayload;

impl CalendarPayload {
    /// Extract weeks from a GraphQL response envelope or a bare week array
    pub fn parse(json: &str) -> Result<Vec<CalendarWeek>, CalendarError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Vec<CalendarWeek>, CalendarError> {
        let weeks = match value {
            Value::Array(weeks) => weeks,
            other => match other.pointer(WEEKS_POINTER) {
                Some(Value::Array(weeks)) => weeks.clone(),
                _ => return Err(Self::shape_error(&other)),
            },
        };

        Ok(weeks.into_iter().map(CalendarWeek::from_value_lenient).collect())
    }

    fn shape_error(value: &Value) -> CalendarError {
        let messages: Vec<&str> = value
            .get("errors")
            .and_then(Value::as_array)
            .map(|errs| {
                errs.iter()
                    .filter_map(|e| e.get("message").and_then(Value::as_str))
                    .collect()
            })
            .unwrap_or_default();

        if messages.is_empty() {
            CalendarError::UnexpectedShape("weeks is missing or not an array".to_string())
        } else {
            CalendarError::Upstream(messages.join("; "))
        }
    }
}

/// One calendar request: identity plus closed date interval
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarQuery {
    pub login: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl CalendarQuery {
    /// Jan 1 .. Dec 31 of `year`
    pub fn calendar_year(login: impl Into<String>, year: i32) -> Option<Self> {
        Some(Self {
            login: login.into(),
            from: NaiveDate::from_ymd_opt(year, 1, 1)?,
            to: NaiveDate::from_ymd_opt(year, 12, 31)?,
        })
    }

    /// GraphQL request body for the host's fetcher
    pub fn to_request_json(&self) -> String {
        serde_json::json!({
            "query": GRAPHQL_QUERY,
            "variables": {
                "login": self.login,
                "from": format!("{}T00:00:00.000Z", self.from.format("%Y-%m-%d")),
                "to": format!("{}T23:59:59.999Z", self.to.format("%Y-%m-%d")),
            }
        })
        .to_string()
    }
}

/// Fetches raw weeks for a query. Implemented by native hosts; the browser
/// host fetches itself and hands JSON to the facade.
pub trait CalendarSource {
    fn fetch_weeks(&self, query: &CalendarQuery) -> Result<Vec<CalendarWeek>, CalendarError>;
}

/// Result of one ingestion pass
#[derive(Clone, Debug, PartialEq)]
pub struct CalendarSnapshot {
    pub grid: Grid,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Abbreviated month names covering the range, at most 12
    pub month_labels: Vec<String>,
    /// Observed counts plus applied overrides
    pub total: u64,
    pub overrides_applied: u64,
}
