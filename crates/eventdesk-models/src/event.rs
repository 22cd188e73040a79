//! Event types for EventDesk.
//!
//! An event is the aggregate root of the model: it embeds its venue, its
//! tickets (with coupons and purchases) and its leads. Nothing nested has a
//! lifecycle of its own.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::lead::Lead;
use crate::ticket::Ticket;
use crate::venue::Venue;

/// Visibility assumed when an event carries no `isPublic` value.
///
/// Every read of the flag goes through [`Event::is_public`], so this is the
/// only place the absent case is decided.
pub const DEFAULT_IS_PUBLIC: bool = false;

/// Status given to newly created events.
pub const DEFAULT_STATUS: &str = "Active";

/// The business account owning an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organizer {
    /// Tenant partition key.
    pub id: String,
    /// Display name of the business.
    #[serde(default)]
    pub business_name: String,
}

impl Organizer {
    /// Creates a new organizer.
    pub fn new(id: impl Into<String>, business_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            business_name: business_name.into(),
        }
    }
}

/// A scheduled event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier.
    pub id: String,

    /// Event title.
    pub title: String,

    /// Free-form status ("Active", "Draft", ...).
    pub status: String,

    /// Owning organizer.
    pub organizer: Organizer,

    /// Start timestamp, ISO-8601, kept exactly as received.
    pub start_date_time: String,

    /// End timestamp, ISO-8601, kept exactly as received.
    pub end_date_time: String,

    /// Descriptive time zone name. Not applied to the timestamps.
    #[serde(default)]
    pub timezone: String,

    /// Long description.
    #[serde(default)]
    pub description: String,

    /// Primary image URL.
    #[serde(default)]
    pub primary_image_url: String,

    /// Cover image URL.
    #[serde(default)]
    pub cover_image_url: String,

    /// Gallery image URLs.
    #[serde(default)]
    pub image_gallery_urls: Vec<String>,

    /// Where the event takes place.
    pub venue: Venue,

    /// Ticket types on sale.
    #[serde(default)]
    pub tickets: Vec<Ticket>,

    /// Sales leads attached to the event.
    #[serde(default)]
    pub leads: Vec<Lead>,

    /// When the event was added.
    #[serde(deserialize_with = "stamp::required")]
    pub date_added: DateTime<Utc>,

    /// When the event was last updated.
    #[serde(default, deserialize_with = "stamp::optional")]
    pub date_updated: Option<DateTime<Utc>>,

    /// When the event was soft-deleted.
    #[serde(default, deserialize_with = "stamp::optional")]
    pub date_deleted: Option<DateTime<Utc>>,

    /// Explicit visibility, if the source provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

impl Event {
    /// Returns the effective visibility, falling back to [`DEFAULT_IS_PUBLIC`].
    pub fn is_public(&self) -> bool {
        self.is_public.unwrap_or(DEFAULT_IS_PUBLIC)
    }

    /// Returns true if the event has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.date_deleted.is_some()
    }

    /// Returns true if the event belongs to the given tenant.
    pub fn belongs_to(&self, tenant_id: &str) -> bool {
        self.organizer.id == tenant_id
    }

    /// Parsed start timestamp, if it is readable.
    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.start_date_time)
    }

    /// Parsed end timestamp, if it is readable.
    pub fn ends_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.end_date_time)
    }

    /// Number of ticket types.
    pub fn ticket_count(&self) -> usize {
        self.tickets.len()
    }

    /// Number of leads.
    pub fn lead_count(&self) -> usize {
        self.leads.len()
    }

    /// Sum of all ticket capacities.
    pub fn total_capacity(&self) -> u64 {
        self.tickets.iter().map(|t| u64::from(t.capacity)).sum()
    }

    /// Sum of purchased quantities across all tickets.
    pub fn total_sales(&self) -> u64 {
        self.tickets.iter().map(Ticket::sold).sum()
    }
}

/// Parses an ISO-8601 timestamp.
///
/// Offsets are honoured; timestamps without one are read as UTC, and a bare
/// date is read as midnight UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Serde readers for lifecycle stamps. Anything [`parse_timestamp`] accepts
/// is read, so a naive `dateAdded` does not reject the whole record.
pub(crate) mod stamp {
    use chrono::{DateTime, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    use super::parse_timestamp;

    fn read<E: Error>(raw: &str) -> Result<DateTime<Utc>, E> {
        parse_timestamp(raw).ok_or_else(|| E::custom(format!("unreadable timestamp '{}'", raw)))
    }

    pub fn required<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        read(&raw)
    }

    pub fn optional<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => read(&raw).map(Some),
            None => Ok(None),
        }
    }
}
