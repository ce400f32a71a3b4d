use anyhow::Result;
use eventcal_core::date_range::DateRange;
use eventcal_core::store::EventStore;

use crate::render;

pub fn run(store: &EventStore, range: DateRange) -> Result<()> {
    let events = store.list()?;
    let visible: Vec<_> = events
        .iter()
        .filter(|event| range.contains(event.date))
        .collect();

    render::print_agenda(&range, &visible);
    Ok(())
}
