//! The remote feed document.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::event::Event;

/// Document served by the events endpoint: `{ "events": [...] }`.
///
/// Records are decoded one by one. A record that does not read as an
/// [`Event`] lands in `skipped` instead of failing the document, so one
/// tenant's bad data never hides another tenant's events.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventFeed {
    /// Every readable event the endpoint knows about, across all tenants.
    pub events: Vec<Event>,

    /// Records that could not be read.
    #[serde(skip)]
    pub skipped: Vec<SkippedRecord>,
}

/// A feed record that failed to decode, with whatever could be salvaged
/// from it for filtering and logging.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub id: Option<String>,
    pub organizer_id: Option<String>,
    /// `dateDeleted` was present and non-null.
    pub deleted: bool,
    pub reason: String,
}

impl SkippedRecord {
    fn inspect(record: &Value, error: serde_json::Error) -> Self {
        let text = |pointer: &str| {
            record
                .pointer(pointer)
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        Self {
            id: text("/id"),
            organizer_id: text("/organizer/id"),
            deleted: record.get("dateDeleted").is_some_and(|v| !v.is_null()),
            reason: error.to_string(),
        }
    }

    /// True when the record names `tenant` as its organizer.
    pub fn belongs_to(&self, tenant: &str) -> bool {
        self.organizer_id.as_deref() == Some(tenant)
    }
}

#[derive(Deserialize)]
struct RawFeed {
    #[serde(default)]
    events: Vec<Value>,
}

impl<'de> Deserialize<'de> for EventFeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawFeed::deserialize(deserializer)?;
        Ok(Self::from_records(raw.events))
    }
}

impl EventFeed {
    /// Creates a feed from a list of events.
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            skipped: Vec::new(),
        }
    }

    /// Decodes raw records, keeping the readable ones.
    pub fn from_records(records: Vec<Value>) -> Self {
        let mut feed = Self::default();
        for record in records {
            match Event::deserialize(&record) {
                Ok(event) => feed.events.push(event),
                Err(e) => feed.skipped.push(SkippedRecord::inspect(&record, e)),
            }
        }
        feed
    }

    /// Parses a feed from JSON text. Fails only when the document itself is
    /// not a feed.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
