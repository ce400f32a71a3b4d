//! Local event storage.
//!
//! Events are kept in a single `events.json` file shaped like the web API's
//! list payload: `{ "events": [ ... ] }`. A missing file is an empty store.

mod create;
mod delete;
mod update;

pub use create::materialize_group;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EventcalError, EventcalResult};
use crate::event::Event;

const EVENTS_FILE: &str = "events.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct EventsFile {
    #[serde(default)]
    events: Vec<Event>,
}

/// JSON-file backed event collection.
#[derive(Debug, Clone)]
pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    /// Open the store inside `data_dir` (the file is created on first write).
    pub fn open(data_dir: &Path) -> Self {
        EventStore {
            path: data_dir.join(EVENTS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored events, in insertion order.
    pub fn list(&self) -> EventcalResult<Vec<Event>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let file: EventsFile = serde_json::from_str(&content).map_err(|e| {
            EventcalError::Serialization(format!("{}: {}", self.path.display(), e))
        })?;

        Ok(file.events)
    }

    pub fn get(&self, id: &str) -> EventcalResult<Event> {
        self.list()?
            .into_iter()
            .find(|event| event.id == id)
            .ok_or_else(|| EventcalError::EventNotFound(id.to_string()))
    }

    /// Every event sharing `group_id`, in stored order.
    pub fn group(&self, group_id: &str) -> EventcalResult<Vec<Event>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|event| event.repeat.group_id.as_deref() == Some(group_id))
            .collect())
    }

    fn save(&self, events: Vec<Event>) -> EventcalResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&EventsFile { events })
            .map_err(|e| EventcalError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, content)?;

        debug!(path = %self.path.display(), "Saved events");
        Ok(())
    }
}
