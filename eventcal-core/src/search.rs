//! Event search within a visible date range.

use crate::date_range::DateRange;
use crate::event::Event;

/// Whether `event`'s title, description or location contains `term`
/// (case-insensitive). An empty or blank term matches everything.
pub fn matches_term(event: &Event, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }

    [&event.title, &event.description, &event.location]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

/// Events dated inside `range` that match `term`, in their original order.
pub fn search<'a>(events: &'a [Event], term: &str, range: &DateRange) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| range.contains(event.date))
        .filter(|event| matches_term(event, term))
        .collect()
}
