//! Terminal rendering of events.

use eventcal_core::date_range::DateRange;
use eventcal_core::event::Event;
use owo_colors::OwoColorize;

/// One-line summary: time span, title, location and repeat info.
pub fn event_line(event: &Event) -> String {
    let mut line = format!(
        "{}-{} {}",
        event.start_time, event.end_time, event.title
    );

    if !event.location.is_empty() {
        line.push_str(&format!(" @ {}", event.location));
    }
    if !event.category.is_empty() {
        line.push_str(&format!(" [{}]", event.category));
    }
    if let Some(repeat) = repeat_label(event) {
        line.push_str(&format!(" ({})", repeat));
    }

    line
}

/// e.g. "every 2 weeks until 2024-12-31"
fn repeat_label(event: &Event) -> Option<String> {
    if !event.is_recurring() {
        return None;
    }

    let rule = &event.repeat;
    let mut label = if rule.interval == 1 {
        format!("every {}", rule.repeat_type.unit())
    } else {
        format!("every {} {}s", rule.interval, rule.repeat_type.unit())
    };
    if let Some(end) = rule.end_date {
        label.push_str(&format!(" until {}", end));
    }

    Some(label)
}

/// Print events grouped by day, sorted by date and start time.
pub fn print_agenda(range: &DateRange, events: &[&Event]) {
    println!(
        "{}",
        format!("{} to {}", range.from, range.to).dimmed()
    );

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return;
    }

    let mut sorted = events.to_vec();
    sorted.sort_by_key(|event| (event.date, event.start_time));

    let mut current_date = None;
    for event in sorted {
        if current_date != Some(event.date) {
            println!();
            println!("{}", event.date.format("%a %b %-d").bold());
            current_date = Some(event.date);
        }
        println!("  {} {}", event_line(event), event.id.dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use eventcal_core::event::{RecurrenceRule, RepeatType};

    fn make_event() -> Event {
        Event::new(
            "Review".to_string(),
            NaiveDate::from_ymd_opt(2024, 10, 15).unwrap(),
            "09:00".parse().unwrap(),
            "10:00".parse().unwrap(),
        )
    }

    #[test]
    fn event_line_single() {
        let mut event = make_event();
        event.location = "Room B".to_string();
        assert_eq!(event_line(&event), "09:00-10:00 Review @ Room B");
    }

    #[test]
    fn event_line_repeating() {
        let mut event = make_event();
        event.repeat = RecurrenceRule::new(
            RepeatType::Weekly,
            2,
            NaiveDate::from_ymd_opt(2024, 12, 31),
        );
        assert_eq!(
            event_line(&event),
            "09:00-10:00 Review (every 2 weeks until 2024-12-31)"
        );

        event.repeat = RecurrenceRule::new(RepeatType::Daily, 1, None);
        event.category = "Work".to_string();
        assert_eq!(event_line(&event), "09:00-10:00 Review [Work] (every day)");
    }
}
