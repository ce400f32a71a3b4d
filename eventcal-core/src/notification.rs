//! Upcoming-event notifications.

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime};

use crate::event::Event;

/// A reminder that an event is about to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub event_id: String,
    pub message: String,
}

impl Notification {
    fn for_event(event: &Event) -> Self {
        Notification {
            event_id: event.id.clone(),
            message: format!(
                "{} starts in {} minutes",
                event.title, event.notification_time
            ),
        }
    }
}

/// Whether `event` is inside its notification window at `now`: it has not
/// started yet and starts at most `notification_time` minutes from now.
pub fn is_due(event: &Event, now: NaiveDateTime) -> bool {
    let until_start = event.starts_at() - now;
    until_start > Duration::zero()
        && until_start <= Duration::minutes(i64::from(event.notification_time))
}

/// Notifications for every due event whose id is not in `already_notified`.
pub fn upcoming_notifications(
    events: &[Event],
    now: NaiveDateTime,
    already_notified: &HashSet<String>,
) -> Vec<Notification> {
    events
        .iter()
        .filter(|event| !already_notified.contains(&event.id))
        .filter(|event| is_due(event, now))
        .map(Notification::for_event)
        .collect()
}
