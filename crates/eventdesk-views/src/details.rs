//! Read-only details screen for one event.

use std::sync::Arc;

use eventdesk_models::Event;
use eventdesk_store::{EventStore, EventWatch};
use tracing::{debug, warn};

use crate::display::{self, TagColor, VisibilityTag};
use crate::error::{PlatformError, Result, ViewError};
use crate::notice::{Notice, Outcome};
use crate::route::Route;

/// Host clipboard.
pub trait Clipboard {
    /// Places `text` on the clipboard.
    fn write_text(&self, text: &str) -> std::result::Result<(), PlatformError>;
}

/// Host share sheet.
pub trait ShareTarget {
    /// Returns false if the platform has no share capability.
    fn is_available(&self) -> bool;

    /// Hands the payload to the platform.
    fn share(&self, data: &ShareData) -> std::result::Result<(), PlatformError>;
}

/// Payload passed to a [`ShareTarget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// State behind the event details screen.
///
/// Holds a copy of the event that is replaced on every store emission. If
/// the event disappears (soft-deleted) the next sync reports
/// [`ViewError::NotFound`].
pub struct DetailsViewModel {
    watch: EventWatch,
    event: Event,
}

impl DetailsViewModel {
    /// Opens the screen for the event id carried by the route.
    pub fn open(store: &Arc<EventStore>, id: Option<&str>) -> Result<Self> {
        let id = match id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(ViewError::MissingId),
        };

        let mut watch = store.get_by_id(id);
        let event = watch
            .refresh()
            .ok_or_else(|| ViewError::NotFound(id.to_string()))?;
        debug!(event_id = %id, "details opened");

        Ok(Self { watch, event })
    }

    /// Opens the screen for a `Details` route.
    pub fn for_route(store: &Arc<EventStore>, route: &Route) -> Result<Self> {
        match route {
            Route::Details(id) => Self::open(store, Some(id)),
            _ => Self::open(store, None),
        }
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    /// Applies a pending store emission. Returns true if the event changed.
    pub fn sync(&mut self) -> Result<bool> {
        if !self.watch.has_changed() {
            return Ok(false);
        }
        let latest = self.watch.refresh();
        self.replace(latest)
    }

    /// Waits for the next store emission and re-reads the event.
    pub async fn changed(&mut self) -> Result<bool> {
        let latest = self.watch.changed().await?;
        self.replace(latest)
    }

    fn replace(&mut self, latest: Option<Event>) -> Result<bool> {
        match latest {
            Some(event) => {
                let changed = event != self.event;
                self.event = event;
                Ok(changed)
            }
            None => {
                warn!(event_id = %self.event.id, "event gone while details open");
                Err(ViewError::NotFound(self.event.id.clone()))
            }
        }
    }

    pub fn ticket_count(&self) -> usize {
        self.event.ticket_count()
    }

    pub fn lead_count(&self) -> usize {
        self.event.lead_count()
    }

    pub fn total_capacity(&self) -> u64 {
        self.event.total_capacity()
    }

    pub fn total_sales(&self) -> u64 {
        self.event.total_sales()
    }

    pub fn venue_full_address(&self) -> String {
        self.event.venue.full_address()
    }

    pub fn status_color(&self) -> TagColor {
        display::status_color(&self.event.status)
    }

    pub fn visibility_tag(&self) -> VisibilityTag {
        display::visibility_tag(self.event.is_public())
    }

    /// e.g. "January 10, 2025".
    pub fn start_date(&self) -> String {
        display::format_long_date(&self.event.start_date_time)
    }

    /// e.g. "06:00 PM".
    pub fn start_time(&self) -> String {
        display::format_time(&self.event.start_date_time)
    }

    pub fn end_date(&self) -> String {
        display::format_long_date(&self.event.end_date_time)
    }

    pub fn end_time(&self) -> String {
        display::format_time(&self.event.end_date_time)
    }

    pub fn added_at(&self) -> String {
        display::format_long_date_time(&self.event.date_added.to_rfc3339())
    }

    pub fn updated_at(&self) -> Option<String> {
        self.event
            .date_updated
            .map(|at| display::format_long_date_time(&at.to_rfc3339()))
    }

    /// Public URL of the event, only for public events.
    pub fn public_link(&self, origin: &str) -> Option<String> {
        self.event.is_public().then(|| {
            format!("{}/events/{}", origin.trim_end_matches('/'), self.event.id)
        })
    }

    /// Copies the public link. Does nothing for private events.
    pub fn copy_public_link(&self, clipboard: &dyn Clipboard, origin: &str) -> Outcome {
        let Some(link) = self.public_link(origin) else {
            return Outcome::none();
        };

        match clipboard.write_text(&link) {
            Ok(()) => Outcome::notify(Notice::success("Public link copied to clipboard!")),
            Err(err) => {
                warn!(error = %err, "clipboard write failed");
                Outcome::notify(Notice::error("Failed to copy link"))
            }
        }
    }

    /// Shares the event, falling back to copying the link when the share
    /// target is unavailable or fails. Does nothing for private events.
    pub fn share(
        &self,
        target: &dyn ShareTarget,
        clipboard: &dyn Clipboard,
        origin: &str,
    ) -> Outcome {
        let Some(url) = self.public_link(origin) else {
            return Outcome::none();
        };

        if target.is_available() {
            let data = ShareData {
                title: self.event.title.clone(),
                text: self.event.description.clone(),
                url,
            };
            match target.share(&data) {
                Ok(()) => return Outcome::none(),
                Err(err) => debug!(error = %err, "share failed, copying link instead"),
            }
        }

        self.copy_public_link(clipboard, origin)
    }

    pub fn edit_route(&self) -> Route {
        Route::Edit(self.event.id.clone())
    }

    pub fn back_route(&self) -> Route {
        Route::List
    }
}
