//! Error types for eventcal.

use chrono::NaiveDate;
use thiserror::Error;

use crate::time_of_day::TimeOfDay;

/// Errors raised while expanding a recurrence rule.
///
/// These indicate a caller contract violation (or a date beyond chrono's
/// supported range) and are never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceError {
    #[error("Invalid recurrence rule: {0}")]
    InvalidRule(String),

    #[error("Next occurrence after {0} is outside the supported date range")]
    OutOfRange(NaiveDate),

    #[error("Recurrence did not advance past {0}")]
    Stalled(NaiveDate),
}

/// Errors that can occur in eventcal operations.
#[derive(Error, Debug)]
pub enum EventcalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidTime(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Start time {start} must be before end time {end}")]
    InvalidTimeRange { start: TimeOfDay, end: TimeOfDay },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error(transparent)]
    Recurrence(#[from] RecurrenceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for eventcal operations.
pub type EventcalResult<T> = Result<T, EventcalError>;
