//! Builder patterns for complex types.

use chrono::{DateTime, Utc};

use crate::event::{Event, Organizer, DEFAULT_STATUS};
use crate::lead::Lead;
use crate::ticket::Ticket;
use crate::venue::Venue;

/// Builder for creating Event instances with a fluent API.
///
/// Every field starts from a plausible value so tests only need to set what
/// they assert on.
#[derive(Debug, Clone)]
pub struct EventBuilder {
    id: String,
    organizer: Organizer,
    title: String,
    description: String,
    status: String,
    start_date_time: String,
    end_date_time: String,
    timezone: String,
    venue: Option<Venue>,
    tickets: Vec<Ticket>,
    leads: Vec<Lead>,
    is_public: Option<bool>,
    date_added: DateTime<Utc>,
    date_deleted: Option<DateTime<Utc>>,
}

impl EventBuilder {
    /// Creates a new EventBuilder with required fields.
    pub fn new(id: impl Into<String>, organizer_id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            title: format!("Event {}", id),
            description: format!("Description of {}", id),
            id,
            organizer: Organizer::new(organizer_id, "Event Corp"),
            status: DEFAULT_STATUS.to_string(),
            start_date_time: "2025-01-01T18:00:00.000Z".to_string(),
            end_date_time: "2025-01-01T22:00:00.000Z".to_string(),
            timezone: "UTC".to_string(),
            venue: None,
            tickets: Vec::new(),
            leads: Vec::new(),
            is_public: Some(true),
            date_added: Utc::now(),
            date_deleted: None,
        }
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the start and end timestamps.
    pub fn schedule(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date_time = start.into();
        self.end_date_time = end.into();
        self
    }

    /// Sets the start timestamp only.
    pub fn starts(mut self, start: impl Into<String>) -> Self {
        self.start_date_time = start.into();
        self
    }

    /// Sets the time zone label.
    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Sets the venue.
    pub fn venue(mut self, venue: Venue) -> Self {
        self.venue = Some(venue);
        self
    }

    /// Adds a ticket type.
    pub fn ticket(mut self, ticket: Ticket) -> Self {
        self.tickets.push(ticket);
        self
    }

    /// Adds a lead.
    pub fn lead(mut self, lead: Lead) -> Self {
        self.leads.push(lead);
        self
    }

    /// Sets the explicit visibility (`None` leaves it absent).
    pub fn visibility(mut self, is_public: Option<bool>) -> Self {
        self.is_public = is_public;
        self
    }

    /// Marks the event public or private.
    pub fn public(self, is_public: bool) -> Self {
        self.visibility(Some(is_public))
    }

    /// Marks the event as soft-deleted at the given time.
    pub fn deleted_at(mut self, at: DateTime<Utc>) -> Self {
        self.date_deleted = Some(at);
        self
    }

    /// Builds the Event.
    pub fn build(self) -> Event {
        let venue = self.venue.unwrap_or_else(|| Venue {
            id: format!("venue-{}", self.id),
            email: "info@venue.com".to_string(),
            venue_name: "Main Hall".to_string(),
            address1: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            country: "USA".to_string(),
            postal_zip: "62701".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            image_gallery_urls: Vec::new(),
        });

        Event {
            primary_image_url: format!("https://img.example/{}/primary.jpeg", self.id),
            cover_image_url: format!("https://img.example/{}/cover.jpeg", self.id),
            image_gallery_urls: Vec::new(),
            id: self.id,
            title: self.title,
            status: self.status,
            organizer: self.organizer,
            start_date_time: self.start_date_time,
            end_date_time: self.end_date_time,
            timezone: self.timezone,
            description: self.description,
            venue,
            tickets: self.tickets,
            leads: self.leads,
            date_added: self.date_added,
            date_updated: None,
            date_deleted: self.date_deleted,
            is_public: self.is_public,
        }
    }
}

/// Convenience methods on Event for creating builders.
impl Event {
    /// Creates a builder for a new event.
    pub fn builder(id: impl Into<String>, organizer_id: impl Into<String>) -> EventBuilder {
        EventBuilder::new(id, organizer_id)
    }
}
