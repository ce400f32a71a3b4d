//! Replace stored events.

use tracing::debug;

use super::EventStore;
use crate::error::{EventcalError, EventcalResult};
use crate::event::Event;

impl EventStore {
    /// Replace the stored event that has `event.id`.
    pub fn update(&self, event: &Event) -> EventcalResult<Event> {
        let mut events = self.list()?;

        let slot = events
            .iter_mut()
            .find(|stored| stored.id == event.id)
            .ok_or_else(|| EventcalError::EventNotFound(event.id.clone()))?;
        *slot = event.clone();

        self.save(events)?;
        debug!(id = %event.id, "Updated event");
        Ok(event.clone())
    }

    /// Replace every stored event whose id appears in `batch`.
    ///
    /// Unknown ids are skipped; the call fails only if none matched.
    pub fn update_many(&self, batch: &[Event]) -> EventcalResult<Vec<Event>> {
        let mut events = self.list()?;
        let mut updated = Vec::new();

        for event in batch {
            match events.iter_mut().find(|stored| stored.id == event.id) {
                Some(slot) => {
                    *slot = event.clone();
                    updated.push(event.clone());
                }
                None => debug!(id = %event.id, "Skipping unknown event in batch update"),
            }
        }

        if updated.is_empty() {
            let ids: Vec<_> = batch.iter().map(|e| e.id.as_str()).collect();
            return Err(EventcalError::EventNotFound(ids.join(", ")));
        }

        self.save(events)?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_event(title: &str) -> Event {
        Event::new(
            title.to_string(),
            NaiveDate::from_ymd_opt(2024, 10, 15).unwrap(),
            "09:00".parse().unwrap(),
            "10:00".parse().unwrap(),
        )
    }

    #[test]
    fn update_replaces_matching_event() {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::open(dir.path());
        let created = store.create(&make_event("Existing meeting")).unwrap();

        let mut edited = created.clone();
        edited.title = "Edited meeting".to_string();
        edited.end_time = "11:00".parse().unwrap();
        store.update(&edited).unwrap();

        assert_eq!(store.get(&created.id).unwrap(), edited);
    }

    #[test]
    fn update_unknown_id_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::open(dir.path());
        store.create(&make_event("Existing meeting")).unwrap();

        assert!(matches!(
            store.update(&make_event("Ghost")),
            Err(EventcalError::EventNotFound(_))
        ));
    }

    #[test]
    fn update_many_skips_unknown_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::open(dir.path());
        let first = store.create(&make_event("First")).unwrap();
        let second = store.create(&make_event("Second")).unwrap();

        let mut edited = first.clone();
        edited.location = "Room C".to_string();
        let updated = store.update_many(&[edited.clone(), make_event("Ghost")]).unwrap();

        assert_eq!(updated, vec![edited.clone()]);
        assert_eq!(store.list().unwrap(), vec![edited, second]);
    }

    #[test]
    fn update_many_with_no_matches_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::open(dir.path());
        store.create(&make_event("First")).unwrap();

        assert!(store.update_many(&[make_event("Ghost")]).is_err());
    }
}
