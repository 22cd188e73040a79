//! EventStore - the in-session cache of a tenant's events.
//!
//! State lives in two `tokio::sync::watch` channels:
//! - `events`: the ordered event list (load order, then insertion order)
//! - `loading`: whether a fetch is in flight
//!
//! Every mutation runs inside `send_modify`/`send_if_modified`, so it
//! completes under the channel lock before any subscriber observes it, and
//! every subscriber sees the new list on its next read.

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use eventdesk_models::{
    CreateEventRequest, Event, Organizer, UpdateEventRequest, Venue, DEFAULT_STATUS,
};
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::config::StoreConfig;
use crate::query::{EventQuery, SortOrder};
use crate::source::EventSource;
use crate::view::{find_live, EventView, EventWatch};

/// Single source of truth for the session's events.
///
/// Construct one per session and share it with `Arc`. Local mutations are
/// never written back to the source.
pub struct EventStore {
    config: StoreConfig,
    source: Arc<dyn EventSource>,
    events: watch::Sender<Arc<Vec<Event>>>,
    loading: watch::Sender<bool>,
    /// Last epoch-millis value handed out as an id.
    last_id: AtomicI64,
    /// Number of loads started; only the latest may write.
    load_generation: AtomicU64,
}

impl EventStore {
    /// Creates an empty store. Call [`EventStore::load`] to populate it.
    pub fn new(config: StoreConfig, source: Arc<dyn EventSource>) -> Self {
        let (events, _) = watch::channel(Arc::new(Vec::new()));
        let (loading, _) = watch::channel(false);

        Self {
            config,
            source,
            events,
            loading,
            last_id: AtomicI64::new(0),
            load_generation: AtomicU64::new(0),
        }
    }

    /// Creates a store and performs the initial load.
    pub async fn connect(config: StoreConfig, source: Arc<dyn EventSource>) -> Self {
        let store = Self::new(config, source);
        store.load().await;
        store
    }

    /// Returns the configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Reads the feed and replaces the event list with the tenant's live events.
    ///
    /// On any source failure the error is logged and the list becomes empty.
    /// Records that fail to decode are dropped one by one. The previous list
    /// stays visible until the fetch settles. When loads overlap, the most
    /// recently started one wins: an older fetch that settles later is
    /// discarded and leaves `loading` alone.
    pub async fn load(&self) {
        let generation = self.load_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.loading.send_replace(true);
        debug!(source = %self.source.describe(), generation, "loading events");

        let result = self.source.fetch().await;

        if self.load_generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "stale load discarded");
            return;
        }

        let events = match result {
            Ok(feed) => {
                let tenant = self.config.tenant_id.as_str();
                for record in feed
                    .skipped
                    .iter()
                    .filter(|r| r.belongs_to(tenant) && !r.deleted)
                {
                    warn!(
                        id = record.id.as_deref().unwrap_or("?"),
                        reason = %record.reason,
                        "skipping unreadable event"
                    );
                }
                let total = feed.events.len() + feed.skipped.len();
                let skipped = feed.skipped.len();
                let events: Vec<Event> = feed
                    .events
                    .into_iter()
                    .filter(|e| e.belongs_to(tenant) && !e.is_deleted())
                    .collect();
                info!(total, skipped, kept = events.len(), tenant, "events loaded");
                events
            }
            Err(e) => {
                error!(source = %self.source.describe(), error = %e, "error loading events");
                Vec::new()
            }
        };

        self.events.send_replace(Arc::new(events));
        self.loading.send_replace(false);
    }

    /// Reloads from the source, discarding local mutations.
    pub async fn refresh(&self) {
        info!("refreshing events");
        self.load().await;
    }

    /// Subscribes to the event list.
    ///
    /// The receiver reflects every later mutation, including soft-deleted
    /// records still held in the list.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<Event>>> {
        self.events.subscribe()
    }

    /// Live observable of the whole event list. Alias of [`EventStore::subscribe`].
    pub fn get_all(&self) -> watch::Receiver<Arc<Vec<Event>>> {
        self.subscribe()
    }

    /// Subscribes to the loading flag.
    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    /// Returns true while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Returns the current event list.
    pub fn snapshot(&self) -> Arc<Vec<Event>> {
        Arc::clone(&self.events.borrow())
    }

    /// Number of records held, soft-deleted ones included.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up a live event by id.
    pub fn find(&self, id: &str) -> Option<Event> {
        find_live(&self.events.borrow(), id)
    }

    /// Observes the live event with the given id.
    pub fn get_by_id(&self, id: &str) -> EventWatch {
        EventWatch::new(self.subscribe(), id)
    }

    /// Creates an event from the request, appends it and returns it.
    pub fn create(&self, request: CreateEventRequest) -> Event {
        let stamp = self.next_id();
        let venue = request.venue;

        let event = Event {
            id: format!("event-{}", stamp),
            title: request.title,
            status: DEFAULT_STATUS.to_string(),
            organizer: Organizer::new(&self.config.tenant_id, &self.config.organizer_name),
            start_date_time: request.start_date_time,
            end_date_time: request.end_date_time,
            timezone: request.timezone,
            description: request.description,
            image_gallery_urls: vec![
                request.primary_image_url.clone(),
                request.cover_image_url.clone(),
            ],
            primary_image_url: request.primary_image_url,
            cover_image_url: request.cover_image_url,
            venue: Venue {
                id: format!("venue-{}", stamp),
                email: self.config.venue_email.clone(),
                venue_name: venue.venue_name,
                address1: venue.address1,
                city: venue.city,
                state: venue.state,
                country: venue.country,
                postal_zip: venue.postal_zip,
                latitude: 0.0,
                longitude: 0.0,
                image_gallery_urls: Vec::new(),
            },
            tickets: Vec::new(),
            leads: Vec::new(),
            date_added: Utc::now(),
            date_updated: None,
            date_deleted: None,
            is_public: Some(request.is_public),
        };

        self.events
            .send_modify(|events| Arc::make_mut(events).push(event.clone()));
        debug!(event_id = %event.id, title = %event.title, "event created");

        event
    }

    /// Merges `request` over the live event with the given id.
    ///
    /// Returns `None` if there is no such event; the list is then untouched
    /// and nothing is emitted.
    pub fn update(&self, id: &str, request: &UpdateEventRequest) -> Option<Event> {
        let mut updated = None;

        self.events.send_if_modified(|events| {
            let Some(index) = events.iter().position(|e| e.id == id && !e.is_deleted()) else {
                return false;
            };
            let event = &mut Arc::make_mut(events)[index];
            request.apply_to(event);
            event.id = id.to_string();
            event.date_updated = Some(Utc::now());
            updated = Some(event.clone());
            true
        });

        match updated {
            Some(ref event) => debug!(event_id = %event.id, "event updated"),
            None => warn!(event_id = %id, "update of unknown event"),
        }
        updated
    }

    /// Soft-deletes the live event with the given id.
    ///
    /// The record keeps its position in the list with `date_deleted` set.
    /// Returns false if there is no such event.
    pub fn delete(&self, id: &str) -> bool {
        let deleted = self.events.send_if_modified(|events| {
            let Some(index) = events.iter().position(|e| e.id == id && !e.is_deleted()) else {
                return false;
            };
            Arc::make_mut(events)[index].date_deleted = Some(Utc::now());
            true
        });

        if deleted {
            debug!(event_id = %id, "event soft-deleted");
        } else {
            warn!(event_id = %id, "delete of unknown event");
        }
        deleted
    }

    /// Live view of events whose title or description contains `term`.
    pub fn search(&self, term: &str) -> EventView {
        self.view(EventQuery::new().with_search(term))
    }

    /// Live view of events with the given visibility (`None` for all).
    pub fn filter_by_visibility(&self, is_public: Option<bool>) -> EventView {
        self.view(EventQuery::new().with_visibility(is_public))
    }

    /// Live view of events ordered by start time.
    pub fn sort_by_date(&self, ascending: bool) -> EventView {
        self.view(EventQuery::new().with_sort(SortOrder::from_ascending(ascending)))
    }

    /// Live view applying an arbitrary query.
    pub fn view(&self, query: EventQuery) -> EventView {
        EventView::new(self.subscribe(), query)
    }

    /// Next id stamp: current epoch millis, bumped past the last one issued.
    fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let previous = self
            .last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or(now);
        now.max(previous + 1)
    }
}

impl std::fmt::Debug for EventStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventStore")
            .field("config", &self.config)
            .field("source", &self.source.describe())
            .field("events", &self.len())
            .field("loading", &self.is_loading())
            .finish()
    }
}
