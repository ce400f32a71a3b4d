use anyhow::{Context, Result};
use clap::Args;
use eventcal_core::config::EventcalConfig;
use eventcal_core::date_range::parse_date;
use eventcal_core::event::{Event, RecurrenceRule, RepeatType};
use eventcal_core::store::{materialize_group, EventStore};
use eventcal_core::TimeOfDay;
use owo_colors::OwoColorize;

use super::confirm_overlaps;

#[derive(Args)]
pub struct NewArgs {
    pub title: String,

    /// Date of the (first) event, YYYY-MM-DD
    #[arg(short, long)]
    pub date: String,

    /// Start time, HH:MM
    #[arg(short, long)]
    pub start: String,

    /// End time, HH:MM
    #[arg(short, long)]
    pub end: String,

    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(long, default_value = "")]
    pub location: String,

    #[arg(long, default_value = "")]
    pub category: String,

    /// none, daily, weekly, monthly or yearly
    #[arg(short, long, default_value = "none")]
    pub repeat: String,

    /// Repeat every N days/weeks/months/years
    #[arg(short, long, default_value_t = 1)]
    pub interval: u32,

    /// Last date a repeating event may occur on, YYYY-MM-DD
    #[arg(short, long)]
    pub until: Option<String>,

    /// Minutes before the start to notify (defaults to the configured value)
    #[arg(short, long)]
    pub notify: Option<u32>,

    /// Save even if the event overlaps existing ones
    #[arg(short, long)]
    pub yes: bool,
}

pub fn run(config: &EventcalConfig, store: &EventStore, args: NewArgs) -> Result<()> {
    let draft = build_draft(config, &args)?;
    draft.validate()?;

    let existing = store.list()?;
    if !confirm_overlaps(&draft, &existing, args.yes)? {
        println!("{}", "  Not saved".dimmed());
        return Ok(());
    }

    let created = if draft.is_recurring() {
        let horizon = config.horizon_for(draft.date);
        let batch = materialize_group(&draft, horizon)
            .with_context(|| format!("Could not expand repeat rule of \"{}\"", draft.title))?;
        store.create_many(&batch)?
    } else {
        vec![store.create(&draft)?]
    };

    match created.as_slice() {
        [single] => println!("{}", format!("  Created: {}", single.title).green()),
        [first, .., last] => println!(
            "{}",
            format!(
                "  Created: {} ({} occurrences, {} to {})",
                first.title,
                created.len(),
                first.date,
                last.date
            )
            .green()
        ),
        [] => {}
    }

    Ok(())
}

/// Build the draft event described by the command-line arguments.
fn build_draft(config: &EventcalConfig, args: &NewArgs) -> Result<Event> {
    let date = parse_date(&args.date)?;
    let start: TimeOfDay = args.start.parse()?;
    let end: TimeOfDay = args.end.parse()?;
    let repeat_type: RepeatType = args.repeat.parse()?;
    let until = args.until.as_deref().map(parse_date).transpose()?;

    let mut draft = Event::new(args.title.clone(), date, start, end);
    draft.description = args.description.clone();
    draft.location = args.location.clone();
    draft.category = args.category.clone();
    draft.notification_time = args
        .notify
        .unwrap_or(config.default_notification_minutes);
    draft.repeat = match repeat_type {
        RepeatType::None => RecurrenceRule::none(),
        _ => RecurrenceRule::new(repeat_type, args.interval, until),
    };

    Ok(draft)
}
