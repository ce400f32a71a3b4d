pub mod delete;
pub mod edit;
pub mod events;
pub mod new;
pub mod notify;
pub mod search;

use anyhow::Result;
use dialoguer::Confirm;
use eventcal_core::date_range::{parse_date, DateRange};
use eventcal_core::event::Event;
use eventcal_core::overlap::find_overlaps;
use owo_colors::OwoColorize;

use crate::render;

/// The week (or month) around `date`, defaulting to today.
pub fn view_range(date: Option<&str>, month: bool) -> Result<DateRange> {
    let anchor = match date {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };

    Ok(if month {
        DateRange::month_of(anchor)
    } else {
        DateRange::week_of(anchor)
    })
}

/// Show events that collide with `draft` and ask whether to save anyway.
///
/// Returns true when there is no conflict, or the user (or `--yes`) accepts it.
pub fn confirm_overlaps(draft: &Event, existing: &[Event], assume_yes: bool) -> Result<bool> {
    let overlapping = find_overlaps(draft, existing);
    if overlapping.is_empty() {
        return Ok(true);
    }

    println!("{}", "  Overlaps with:".yellow());
    for event in &overlapping {
        println!("    {}", render::event_line(event));
    }

    if assume_yes {
        return Ok(true);
    }

    Ok(Confirm::new()
        .with_prompt("  Save anyway?")
        .default(false)
        .interact()?)
}
