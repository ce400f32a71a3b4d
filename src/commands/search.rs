use anyhow::Result;
use eventcal_core::date_range::DateRange;
use eventcal_core::search::search;
use eventcal_core::store::EventStore;

use crate::render;

pub fn run(store: &EventStore, term: &str, range: DateRange) -> Result<()> {
    let events = store.list()?;
    let found = search(&events, term, &range);

    render::print_agenda(&range, &found);
    Ok(())
}
