//! Add events to the store.

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use super::EventStore;
use crate::error::EventcalResult;
use crate::event::Event;
use crate::recurrence;

/// Turn a draft into the events that should be persisted.
///
/// A non-recurring draft comes back alone. A recurring draft is expanded up to
/// `horizon` (or its own end date, whichever is earlier) into one copy per
/// occurrence date. Ids and the shared group id are assigned by
/// [`EventStore::create_many`] when the batch is stored.
pub fn materialize_group(draft: &Event, horizon: NaiveDate) -> EventcalResult<Vec<Event>> {
    if !draft.is_recurring() {
        let mut single = draft.clone();
        single.repeat.group_id = None;
        return Ok(vec![single]);
    }

    let dates = recurrence::expand(draft.date, &draft.repeat, horizon)?;

    Ok(dates
        .into_iter()
        .map(|date| Event {
            date,
            ..draft.clone()
        })
        .collect())
}

impl EventStore {
    /// Store a single event under a fresh id and return the stored copy.
    pub fn create(&self, event: &Event) -> EventcalResult<Event> {
        let mut created = event.clone();
        created.id = Uuid::new_v4().to_string();

        let mut events = self.list()?;
        events.push(created.clone());
        self.save(events)?;

        debug!(id = %created.id, title = %created.title, "Created event");
        Ok(created)
    }

    /// Store a batch of events produced from one draft.
    ///
    /// Every event gets a fresh id. Recurring events in the batch are tied
    /// together under one new group id; non-recurring ones get none.
    pub fn create_many(&self, batch: &[Event]) -> EventcalResult<Vec<Event>> {
        let group_id = Uuid::new_v4().to_string();

        let created: Vec<Event> = batch
            .iter()
            .map(|event| {
                let mut stored = event.clone();
                stored.id = Uuid::new_v4().to_string();
                stored.repeat.group_id = stored
                    .is_recurring()
                    .then(|| group_id.clone());
                stored
            })
            .collect();

        let mut events = self.list()?;
        events.extend(created.iter().cloned());
        self.save(events)?;

        debug!(count = created.len(), group = %group_id, "Created event batch");
        Ok(created)
    }
}
