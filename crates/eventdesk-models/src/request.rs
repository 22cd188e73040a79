//! Request shapes for creating and updating events.

use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::venue::Venue;

/// Venue fields supplied when creating an event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueRequest {
    pub venue_name: String,
    pub address1: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_zip: String,
}

/// Everything needed to create an event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub start_date_time: String,
    pub end_date_time: String,
    pub timezone: String,
    pub venue: VenueRequest,
    pub primary_image_url: String,
    pub cover_image_url: String,
    pub is_public: bool,
}

/// Partial venue update. Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenuePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_zip: Option<String>,
}

impl VenuePatch {
    /// Writes the supplied fields over `venue`.
    pub fn apply_to(&self, venue: &mut Venue) {
        merge(&mut venue.venue_name, &self.venue_name);
        merge(&mut venue.address1, &self.address1);
        merge(&mut venue.city, &self.city);
        merge(&mut venue.state, &self.state);
        merge(&mut venue.country, &self.country);
        merge(&mut venue.postal_zip, &self.postal_zip);
    }
}

impl From<VenueRequest> for VenuePatch {
    fn from(venue: VenueRequest) -> Self {
        Self {
            venue_name: Some(venue.venue_name),
            address1: Some(venue.address1),
            city: Some(venue.city),
            state: Some(venue.state),
            country: Some(venue.country),
            postal_zip: Some(venue.postal_zip),
        }
    }
}

/// Partial event update. Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<VenuePatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

impl UpdateEventRequest {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the schedule.
    pub fn schedule(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date_time = Some(start.into());
        self.end_date_time = Some(end.into());
        self
    }

    /// Sets the venue patch.
    pub fn venue(mut self, venue: VenuePatch) -> Self {
        self.venue = Some(venue);
        self
    }

    /// Sets the visibility.
    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = Some(is_public);
        self
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow-merges the supplied fields over `event`.
    ///
    /// The venue is merged field by field. Identity and lifecycle fields are
    /// left to the caller.
    pub fn apply_to(&self, event: &mut Event) {
        merge(&mut event.title, &self.title);
        merge(&mut event.description, &self.description);
        merge(&mut event.start_date_time, &self.start_date_time);
        merge(&mut event.end_date_time, &self.end_date_time);
        merge(&mut event.timezone, &self.timezone);
        merge(&mut event.primary_image_url, &self.primary_image_url);
        merge(&mut event.cover_image_url, &self.cover_image_url);
        if let Some(venue) = &self.venue {
            venue.apply_to(&mut event.venue);
        }
        if let Some(is_public) = self.is_public {
            event.is_public = Some(is_public);
        }
    }
}

impl From<CreateEventRequest> for UpdateEventRequest {
    fn from(req: CreateEventRequest) -> Self {
        Self {
            title: Some(req.title),
            description: Some(req.description),
            start_date_time: Some(req.start_date_time),
            end_date_time: Some(req.end_date_time),
            timezone: Some(req.timezone),
            venue: Some(req.venue.into()),
            primary_image_url: Some(req.primary_image_url),
            cover_image_url: Some(req.cover_image_url),
            is_public: Some(req.is_public),
        }
    }
}

fn merge(target: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        target.clone_from(value);
    }
}
