//! Error types
//!
//! Only calendar ingestion and host-supplied inputs can fail. Pattern steps
//! never do: a missing image degrades to a no-op step.

use thiserror::Error;

/// Upstream calendar data fault
#[derive(Debug, Error)]
pub enum CalendarError {
    /// Payload is not valid JSON at all
    #[error("calendar payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// JSON parsed but the weeks list is missing or not an array
    #[error("unexpected calendar payload: {0}")]
    UnexpectedShape(String),

    /// Upstream reported errors instead of data
    #[error("calendar source reported: {0}")]
    Upstream(String),

    /// The fetcher itself failed (network, auth, ...)
    #[error("calendar source unavailable: {0}")]
    Source(String),
}

/// Errors surfaced by the engine facade
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid engine config: {0}")]
    InvalidConfig(String),

    #[error("engine config is not valid JSON: {0}")]
    ConfigParse(#[source] serde_json::Error),

    #[error("override table is not valid JSON: {0}")]
    OverridesParse(#[source] serde_json::Error),

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    /// Pixel buffer does not match the declared dimensions
    #[error("image buffer of {len} bytes does not match {width}x{height}")]
    InvalidImage {
        width: u32,
        height: u32,
        len: usize,
    },

    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

pub type EngineResult<T> = Result<T, EngineError>;
