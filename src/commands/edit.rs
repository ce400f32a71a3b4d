use anyhow::Result;
use clap::Args;
use eventcal_core::date_range::parse_date;
use eventcal_core::event::Event;
use eventcal_core::store::EventStore;
use owo_colors::OwoColorize;

use super::confirm_overlaps;

#[derive(Args)]
pub struct EditArgs {
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    /// New date, YYYY-MM-DD
    #[arg(short, long)]
    pub date: Option<String>,

    /// New start time, HH:MM
    #[arg(short, long)]
    pub start: Option<String>,

    /// New end time, HH:MM
    #[arg(short, long)]
    pub end: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    /// Minutes before the start to notify
    #[arg(short, long)]
    pub notify: Option<u32>,

    /// Save even if the edited event overlaps others
    #[arg(short, long)]
    pub yes: bool,
}

pub fn run(store: &EventStore, args: EditArgs) -> Result<()> {
    let stored = store.get(&args.id)?;
    let edited = apply_edits(&stored, &args)?;
    edited.validate()?;

    let existing = store.list()?;
    if !confirm_overlaps(&edited, &existing, args.yes)? {
        println!("{}", "  Not saved".dimmed());
        return Ok(());
    }

    store.update(&edited)?;
    println!("{}", format!("  Updated: {}", edited.title).green());

    Ok(())
}

/// Copy of `stored` with every given field replaced. The repeat rule and id are kept.
fn apply_edits(stored: &Event, args: &EditArgs) -> Result<Event> {
    let mut edited = stored.clone();

    if let Some(title) = &args.title {
        edited.title = title.clone();
    }
    if let Some(date) = &args.date {
        edited.date = parse_date(date)?;
    }
    if let Some(start) = &args.start {
        edited.start_time = start.parse()?;
    }
    if let Some(end) = &args.end {
        edited.end_time = end.parse()?;
    }
    if let Some(description) = &args.description {
        edited.description = description.clone();
    }
    if let Some(location) = &args.location {
        edited.location = location.clone();
    }
    if let Some(category) = &args.category {
        edited.category = category.clone();
    }
    if let Some(minutes) = args.notify {
        edited.notification_time = minutes;
    }

    Ok(edited)
}
