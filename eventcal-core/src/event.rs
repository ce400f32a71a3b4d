//! Calendar event types.
//!
//! Field names serialize in camelCase so stored files keep the same shape as
//! the HTTP payloads the web client exchanges (`startTime`, `repeat.endDate`, ...).

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EventcalError, EventcalResult, RecurrenceError};
use crate::time_of_day::TimeOfDay;

/// Notification lead used when the caller does not pick one.
pub const DEFAULT_NOTIFICATION_MINUTES: u32 = 10;

/// How often an event repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RepeatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatType::None => "none",
            RepeatType::Daily => "daily",
            RepeatType::Weekly => "weekly",
            RepeatType::Monthly => "monthly",
            RepeatType::Yearly => "yearly",
        }
    }

    /// Unit label for "every N <unit>" rendering.
    pub fn unit(&self) -> &'static str {
        match self {
            RepeatType::None => "",
            RepeatType::Daily => "day",
            RepeatType::Weekly => "week",
            RepeatType::Monthly => "month",
            RepeatType::Yearly => "year",
        }
    }
}

impl FromStr for RepeatType {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(RepeatType::None),
            "daily" => Ok(RepeatType::Daily),
            "weekly" => Ok(RepeatType::Weekly),
            "monthly" => Ok(RepeatType::Monthly),
            "yearly" => Ok(RepeatType::Yearly),
            other => Err(RecurrenceError::InvalidRule(format!(
                "unknown repeat type '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for RepeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_interval() -> u32 {
    1
}

/// Repeat settings of an event.
///
/// Every occurrence materialized from one recurring draft carries the same
/// rule, including the shared `group_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    #[serde(rename = "type")]
    pub repeat_type: RepeatType,
    #[serde(default = "default_interval")]
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Recurrence group identifier (`repeat.id` on the wire)
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl RecurrenceRule {
    pub fn none() -> Self {
        RecurrenceRule {
            repeat_type: RepeatType::None,
            interval: 1,
            end_date: None,
            group_id: None,
        }
    }

    pub fn new(repeat_type: RepeatType, interval: u32, end_date: Option<NaiveDate>) -> Self {
        RecurrenceRule {
            repeat_type,
            interval,
            end_date,
            group_id: None,
        }
    }

    pub fn is_recurring(&self) -> bool {
        self.repeat_type != RepeatType::None
    }

    /// Check the rule's own invariants: a recurring rule needs `interval >= 1`,
    /// and a non-recurring one must not belong to a group.
    pub fn validate(&self) -> Result<(), RecurrenceError> {
        if self.is_recurring() {
            if self.interval == 0 {
                return Err(RecurrenceError::InvalidRule(
                    "interval must be at least 1".to_string(),
                ));
            }
        } else if self.group_id.is_some() {
            return Err(RecurrenceError::InvalidRule(
                "a non-recurring event cannot belong to a recurrence group".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RecurrenceRule {
    fn default() -> Self {
        RecurrenceRule::none()
    }
}

/// A single calendar event on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub repeat: RecurrenceRule,
    /// Minutes before the start at which to notify
    #[serde(default)]
    pub notification_time: u32,
}

impl Event {
    /// Create a non-recurring event with a fresh id.
    pub fn new(title: String, date: NaiveDate, start_time: TimeOfDay, end_time: TimeOfDay) -> Self {
        Event {
            id: Uuid::new_v4().to_string(),
            title,
            date,
            start_time,
            end_time,
            description: String::new(),
            location: String::new(),
            category: String::new(),
            repeat: RecurrenceRule::none(),
            notification_time: DEFAULT_NOTIFICATION_MINUTES,
        }
    }

    pub fn is_recurring(&self) -> bool {
        self.repeat.is_recurring()
    }

    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time.to_naive_time())
    }

    /// Whether this event's time span intersects `other`'s on the same date.
    ///
    /// Spans are half-open: 10:00-11:00 and 11:00-12:00 do not overlap.
    /// Empty or inverted spans never overlap anything.
    pub fn overlaps(&self, other: &Event) -> bool {
        if self.start_time >= self.end_time || other.start_time >= other.end_time {
            return false;
        }

        self.date == other.date
            && self.start_time < other.end_time
            && other.start_time < self.end_time
    }

    /// Validate a draft before it is saved.
    pub fn validate(&self) -> EventcalResult<()> {
        if self.title.trim().is_empty() {
            return Err(EventcalError::MissingField("title"));
        }

        if self.start_time >= self.end_time {
            return Err(EventcalError::InvalidTimeRange {
                start: self.start_time,
                end: self.end_time,
            });
        }

        self.repeat.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn make_event(start: &str, end: &str) -> Event {
        Event::new(
            "Team meeting".to_string(),
            NaiveDate::from_ymd_opt(2024, 10, 15).unwrap(),
            time(start),
            time(end),
        )
    }

    #[test]
    fn test_repeat_type_parse() {
        assert_eq!("weekly".parse::<RepeatType>().unwrap(), RepeatType::Weekly);
        assert_eq!("Monthly".parse::<RepeatType>().unwrap(), RepeatType::Monthly);
        assert!(matches!(
            "hourly".parse::<RepeatType>(),
            Err(RecurrenceError::InvalidRule(_))
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_times() {
        let event = make_event("11:00", "10:00");
        assert!(matches!(
            event.validate(),
            Err(EventcalError::InvalidTimeRange { .. })
        ));

        let event = make_event("10:00", "10:00");
        assert!(event.validate().is_err());
    }

    #[test]
    fn test_validate_requires_title() {
        let mut event = make_event("09:00", "10:00");
        event.title = "   ".to_string();
        assert!(matches!(
            event.validate(),
            Err(EventcalError::MissingField("title"))
        ));
    }

    #[test]
    fn test_validate_rule_invariants() {
        let mut event = make_event("09:00", "10:00");
        event.repeat = RecurrenceRule::new(RepeatType::Daily, 0, None);
        assert!(matches!(
            event.validate(),
            Err(EventcalError::Recurrence(RecurrenceError::InvalidRule(_)))
        ));

        event.repeat = RecurrenceRule::none();
        event.repeat.group_id = Some("group-1".to_string());
        assert!(event.validate().is_err());

        event.repeat.group_id = None;
        assert!(event.validate().is_ok());
    }

    #[test]
    fn test_deserialize_web_payload() {
        let json = r#"{
            "id": "3",
            "title": "Repeating meeting",
            "date": "2024-10-16",
            "startTime": "13:00",
            "endTime": "14:00",
            "description": "Weekly sync",
            "location": "Room D",
            "category": "Work",
            "repeat": { "id": "1", "type": "daily", "interval": 1, "endDate": "2024-10-25" },
            "notificationTime": 10
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.repeat.repeat_type, RepeatType::Daily);
        assert_eq!(event.repeat.group_id.as_deref(), Some("1"));
        assert_eq!(
            event.repeat.end_date,
            NaiveDate::from_ymd_opt(2024, 10, 25)
        );
        assert_eq!(event.start_time, time("13:00"));
        assert_eq!(event.notification_time, 10);
    }

    #[test]
    fn test_non_recurring_payload_with_zero_interval() {
        let json = r#"{
            "id": "1",
            "title": "One-off",
            "date": "2024-10-15",
            "startTime": "09:00",
            "endTime": "10:00",
            "repeat": { "type": "none", "interval": 0 },
            "notificationTime": 1
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert!(!event.is_recurring());
        assert!(event.validate().is_ok());

        let out = serde_json::to_value(&event).unwrap();
        assert!(out["repeat"].get("id").is_none());
        assert_eq!(out["startTime"], "09:00");
    }
}
