//! Event data access.
//!
//! The engine functions take plain event slices; this module provides the
//! port that supplies them, so callers (CLI, tests) can swap datasets
//! without touching the recurrence logic.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ParishError, ParishResult};
use crate::event::{Event, RsvpResponse};

/// Repository port for event data.
pub trait EventStore {
    /// All anchor records in the dataset (not expanded occurrences).
    fn events(&self) -> ParishResult<Vec<Event>>;

    /// Look up a single event by id.
    fn event(&self, id: &str) -> ParishResult<Event>;

    /// Tally an RSVP response against an event. Application state only.
    fn record_rsvp(&mut self, id: &str, response: RsvpResponse) -> ParishResult<()>;
}

/// In-memory store seeded from fixtures or a dataset file.
pub struct InMemoryEventStore {
    events: Vec<Event>,
}

/// A TOML dataset file: a flat list of `[[events]]` tables.
#[derive(Deserialize)]
struct EventDataset {
    #[serde(default)]
    events: Vec<Event>,
}

impl InMemoryEventStore {
    /// Build a store, validating every recurrence config up front so the
    /// engine never sees contradictory data.
    pub fn new(events: Vec<Event>) -> ParishResult<Self> {
        for event in &events {
            if let Some(config) = &event.recurrence {
                config.validate().map_err(|e| match e {
                    ParishError::InvalidEvent(msg) => {
                        ParishError::InvalidEvent(format!("event '{}': {msg}", event.id))
                    }
                    other => other,
                })?;
            }
        }
        Ok(InMemoryEventStore { events })
    }

    /// Parse a TOML dataset document.
    pub fn from_toml(content: &str) -> ParishResult<Self> {
        let dataset: EventDataset =
            toml::from_str(content).map_err(|e| ParishError::Serialization(e.to_string()))?;
        Self::new(dataset.events)
    }

    /// Load a TOML dataset from disk.
    pub fn load(path: &Path) -> ParishResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

impl EventStore for InMemoryEventStore {
    fn events(&self) -> ParishResult<Vec<Event>> {
        Ok(self.events.clone())
    }

    fn event(&self, id: &str) -> ParishResult<Event> {
        self.events
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| ParishError::EventNotFound(id.to_string()))
    }

    fn record_rsvp(&mut self, id: &str, response: RsvpResponse) -> ParishResult<()> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ParishError::EventNotFound(id.to_string()))?;
        event.record_rsvp(response);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    static SAMPLE: &str = r#"
[[events]]
id = "sunday-service"
date = "2025-03-16"
start_time = "10:00:00"
end_time = "11:30:00"
title = "Sunday Worship Service"
location = "Main Sanctuary"
department = "worship"
color = "blue"
featured = true

[events.recurrence]
type = "weekly"
week_days = ["sun"]
end = "always"

[[events]]
id = "egg-hunt"
date = "2025-04-19"
start_time = "14:00:00"
end_time = "16:00:00"
title = "Easter Egg Hunt"
department = "children"
color = "green"

[events.rsvp]
yes = 12
maybe = 3
no = 1

[[events.attendees]]
id = "member-001"
name = "Grace Okafor"
avatar = "avatars/grace.png"
"#;

    #[test]
    fn parses_a_toml_dataset() {
        let store = InMemoryEventStore::from_toml(SAMPLE).unwrap();
        let events = store.events().unwrap();
        assert_eq!(events.len(), 2);

        let service = store.event("sunday-service").unwrap();
        assert!(service.is_recurring());
        assert_eq!(service.date, NaiveDate::from_ymd_opt(2025, 3, 16).unwrap());
        assert_eq!(service.recurrence.unwrap().interval, 1, "interval defaults");

        let hunt = store.event("egg-hunt").unwrap();
        assert_eq!(hunt.rsvp.yes, 12);
        assert_eq!(hunt.attendees.len(), 1);
        assert_eq!(hunt.attendees[0].name, "Grace Okafor");
    }

    #[test]
    fn rejects_unknown_recurrence_types_at_the_boundary() {
        let broken = r#"
[[events]]
id = "x"
date = "2025-03-16"
start_time = "10:00:00"
end_time = "11:00:00"
title = "X"

[events.recurrence]
type = "fortnightly"
"#;
        let result = InMemoryEventStore::from_toml(broken);
        assert!(matches!(result, Err(ParishError::Serialization(_))));
    }

    #[test]
    fn rejects_zero_intervals_at_the_boundary() {
        let broken = r#"
[[events]]
id = "x"
date = "2025-03-16"
start_time = "10:00:00"
end_time = "11:00:00"
title = "X"

[events.recurrence]
type = "daily"
interval = 0
"#;
        let result = InMemoryEventStore::from_toml(broken);
        assert!(matches!(result, Err(ParishError::InvalidEvent(_))));
    }

    #[test]
    fn missing_events_surface_as_not_found() {
        let store = InMemoryEventStore::from_toml(SAMPLE).unwrap();
        assert!(matches!(
            store.event("nope"),
            Err(ParishError::EventNotFound(_))
        ));
    }

    #[test]
    fn rsvp_mutates_store_state_only() {
        let mut store = InMemoryEventStore::from_toml(SAMPLE).unwrap();
        store.record_rsvp("egg-hunt", RsvpResponse::Yes).unwrap();
        store.record_rsvp("egg-hunt", RsvpResponse::Maybe).unwrap();

        let hunt = store.event("egg-hunt").unwrap();
        assert_eq!(hunt.rsvp.yes, 13);
        assert_eq!(hunt.rsvp.maybe, 4);
    }

    #[test]
    fn load_reads_a_dataset_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.toml");
        std::fs::write(&path, SAMPLE).unwrap();

        let store = InMemoryEventStore::load(&path).unwrap();
        assert_eq!(store.events().unwrap().len(), 2);
        // Anchor weekday survives the round trip
        assert_eq!(
            store.event("sunday-service").unwrap().date.weekday(),
            chrono::Weekday::Sun
        );
    }
}
