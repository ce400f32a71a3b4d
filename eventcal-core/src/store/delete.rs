//! Remove events from the store.

use tracing::debug;

use super::EventStore;
use crate::error::{EventcalError, EventcalResult};

impl EventStore {
    /// Delete the event with `id`. Other members of its recurrence group are kept.
    pub fn delete(&self, id: &str) -> EventcalResult<()> {
        let mut events = self.list()?;
        let before = events.len();
        events.retain(|event| event.id != id);

        if events.len() == before {
            return Err(EventcalError::EventNotFound(id.to_string()));
        }

        self.save(events)?;
        debug!(id, "Deleted event");
        Ok(())
    }
}
