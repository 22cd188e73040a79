//! Live projections over the store's event channel.

use std::sync::Arc;

use eventdesk_models::Event;
use tokio::sync::watch;

use crate::error::{Result, StoreError};
use crate::query::EventQuery;

/// A query bound to the live event stream.
///
/// Each view holds its own receiver, so views re-derive independently and
/// stop observing the store when dropped.
#[derive(Debug, Clone)]
pub struct EventView {
    rx: watch::Receiver<Arc<Vec<Event>>>,
    query: EventQuery,
}

impl EventView {
    pub(crate) fn new(rx: watch::Receiver<Arc<Vec<Event>>>, query: EventQuery) -> Self {
        Self { rx, query }
    }

    /// Returns the query this view applies.
    pub fn query(&self) -> &EventQuery {
        &self.query
    }

    /// Evaluates the query against the latest store state.
    pub fn current(&self) -> Vec<Event> {
        self.query.apply(&self.rx.borrow())
    }

    /// Returns true if the store emitted since the view was last read.
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Waits for the next store emission and returns the re-derived list.
    pub async fn changed(&mut self) -> Result<Vec<Event>> {
        self.rx.changed().await.map_err(|_| StoreError::Closed)?;
        Ok(self.query.apply(&self.rx.borrow_and_update()))
    }
}

/// Observes a single event by id.
///
/// Resolves to `None` while no live event has that id (unknown, not yet
/// loaded, or soft-deleted).
#[derive(Debug, Clone)]
pub struct EventWatch {
    rx: watch::Receiver<Arc<Vec<Event>>>,
    id: String,
}

impl EventWatch {
    pub(crate) fn new(rx: watch::Receiver<Arc<Vec<Event>>>, id: impl Into<String>) -> Self {
        Self { rx, id: id.into() }
    }

    /// Returns the watched id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Looks the event up in the latest store state.
    pub fn current(&self) -> Option<Event> {
        find_live(&self.rx.borrow(), &self.id)
    }

    /// Returns true if the store emitted since the event was last read.
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Marks the latest emission as seen and returns the event.
    pub fn refresh(&mut self) -> Option<Event> {
        find_live(&self.rx.borrow_and_update(), &self.id)
    }

    /// Waits for the next store emission and re-evaluates the lookup.
    pub async fn changed(&mut self) -> Result<Option<Event>> {
        self.rx.changed().await.map_err(|_| StoreError::Closed)?;
        Ok(self.refresh())
    }
}

pub(crate) fn find_live(events: &[Event], id: &str) -> Option<Event> {
    events
        .iter()
        .find(|e| e.id == id && !e.is_deleted())
        .cloned()
}
