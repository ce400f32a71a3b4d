use std::collections::HashSet;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use eventcal_core::notification::upcoming_notifications;
use eventcal_core::store::EventStore;
use owo_colors::OwoColorize;

pub fn run(store: &EventStore, now: Option<&str>) -> Result<()> {
    let now = match now {
        Some(s) => parse_now(s)?,
        None => chrono::Local::now().naive_local(),
    };

    let events = store.list()?;
    let notifications = upcoming_notifications(&events, now, &HashSet::new());

    if notifications.is_empty() {
        println!("{}", "No upcoming events".dimmed());
        return Ok(());
    }

    for notification in &notifications {
        println!("  {} {}", "!".red().bold(), notification.message);
    }

    Ok(())
}

/// Parse "YYYY-MM-DDTHH:MM" (a space is accepted instead of the T).
fn parse_now(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .with_context(|| format!("Invalid time '{}'. Expected YYYY-MM-DDTHH:MM", s))
}
