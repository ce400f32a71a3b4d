//! Core types and algorithms for eventcal.
//!
//! - `recurrence` expands a start date and a repeat rule into occurrence dates
//! - `overlap` finds events whose time span collides with a candidate
//! - `store` persists events (and materializes recurrence groups) as JSON
//! - `search` and `notification` derive views from an event list
//!
//! Nothing in here reads the system clock; callers pass "now" and horizons explicitly.

pub mod config;
pub mod date_range;
pub mod error;
pub mod event;
pub mod notification;
pub mod overlap;
pub mod recurrence;
pub mod search;
pub mod store;
pub mod time_of_day;

pub use error::{EventcalError, EventcalResult, RecurrenceError};
pub use event::{Event, RecurrenceRule, RepeatType};
pub use time_of_day::TimeOfDay;
