//! Event list screen: search, visibility filter, sort, pagination, delete.

use std::sync::Arc;

use eventdesk_models::Event;
use eventdesk_store::{EventQuery, EventStore, SortOrder, StoreError};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::display::{self, TagColor, VisibilityTag};
use crate::error::Result;
use crate::notice::{Notice, Outcome};
use crate::route::Route;

/// Rows per page.
pub const PAGE_SIZE: usize = 10;

/// Visibility selector of the list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityFilter {
    /// No filter.
    #[default]
    All,
    Public,
    Private,
}

impl VisibilityFilter {
    /// The visibility an event must have, or `None` for any.
    pub fn as_flag(self) -> Option<bool> {
        match self {
            VisibilityFilter::All => None,
            VisibilityFilter::Public => Some(true),
            VisibilityFilter::Private => Some(false),
        }
    }
}

/// State behind the event list screen.
///
/// Rows are recomputed from the store's latest list whenever the store emits
/// (picked up by [`ListViewModel::sync`] or [`ListViewModel::changed`]) or a
/// control changes value.
pub struct ListViewModel {
    store: Arc<EventStore>,
    events_rx: watch::Receiver<Arc<Vec<Event>>>,
    loading_rx: watch::Receiver<bool>,
    search: String,
    visibility: VisibilityFilter,
    sort: SortOrder,
    rows: Vec<Event>,
    loading: bool,
    page: usize,
}

impl ListViewModel {
    /// Subscribes to the store and computes the initial rows.
    pub fn new(store: Arc<EventStore>) -> Self {
        let events_rx = store.subscribe();
        let loading_rx = store.subscribe_loading();
        let loading = *loading_rx.borrow();

        let mut vm = Self {
            store,
            events_rx,
            loading_rx,
            search: String::new(),
            visibility: VisibilityFilter::All,
            sort: SortOrder::Ascending,
            rows: Vec::new(),
            loading,
            page: 1,
        };
        vm.recompute();
        vm
    }

    /// Query built from the current controls.
    pub fn query(&self) -> EventQuery {
        EventQuery::new()
            .with_search(self.search.clone())
            .with_visibility(self.visibility.as_flag())
            .with_sort(self.sort)
    }

    /// Filtered and sorted rows, all pages.
    pub fn rows(&self) -> &[Event] {
        &self.rows
    }

    /// Number of rows after filtering.
    pub fn total(&self) -> usize {
        self.rows.len()
    }

    /// True while the store is fetching.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True once loading finished with nothing to show; a failed load also
    /// ends up here.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.rows.is_empty()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn visibility(&self) -> VisibilityFilter {
        self.visibility
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Sets the search term. Returns false if it was already set.
    pub fn set_search(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if term == self.search {
            return false;
        }
        self.search = term;
        self.recompute();
        true
    }

    /// Sets the visibility filter. Returns false if unchanged.
    pub fn set_visibility(&mut self, visibility: VisibilityFilter) -> bool {
        if visibility == self.visibility {
            return false;
        }
        self.visibility = visibility;
        self.recompute();
        true
    }

    /// Sets the sort order. Returns false if unchanged.
    pub fn set_sort(&mut self, sort: SortOrder) -> bool {
        if sort == self.sort {
            return false;
        }
        self.sort = sort;
        self.recompute();
        true
    }

    /// Current 1-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of pages; at least one.
    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(PAGE_SIZE).max(1)
    }

    /// Moves to a page, clamped to the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.page_count());
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> &[Event] {
        let start = (self.page - 1) * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(self.rows.len());
        self.rows.get(start..end).unwrap_or(&[])
    }

    /// Applies pending store emissions. Returns true if anything changed.
    pub fn sync(&mut self) -> bool {
        let mut changed = false;

        if self.loading_rx.has_changed().unwrap_or(false) {
            self.loading = *self.loading_rx.borrow_and_update();
            changed = true;
        }

        if self.events_rx.has_changed().unwrap_or(false) {
            self.recompute();
            changed = true;
        }

        changed
    }

    /// Waits until the store emits on either channel, then syncs.
    pub async fn changed(&mut self) -> Result<()> {
        tokio::select! {
            res = self.events_rx.changed() => res.map_err(|_| StoreError::Closed)?,
            res = self.loading_rx.changed() => res.map_err(|_| StoreError::Closed)?,
        }
        self.sync();
        Ok(())
    }

    /// Soft-deletes an event through the store.
    pub fn delete(&mut self, event_id: &str) -> Outcome {
        if self.store.delete(event_id) {
            info!(event_id, "event deleted from list");
            self.sync();
            Outcome::notify(Notice::success("Event deleted successfully"))
        } else {
            warn!(event_id, "failed to delete event");
            Outcome::notify(Notice::error("Failed to delete event"))
        }
    }

    /// Reloads the store from its source.
    pub async fn refresh(&mut self) {
        self.store.refresh().await;
        self.sync();
    }

    /// Target of the "create" action.
    pub fn create_route(&self) -> Route {
        Route::Create
    }

    /// Target of a row's "edit" action.
    pub fn edit_route(&self, event: &Event) -> Route {
        Route::Edit(event.id.clone())
    }

    /// Target of a row's "view" action.
    pub fn view_route(&self, event: &Event) -> Route {
        Route::Details(event.id.clone())
    }

    /// Status tag colour for a row.
    pub fn status_color(&self, event: &Event) -> TagColor {
        display::status_color(&event.status)
    }

    /// Visibility tag for a row.
    pub fn visibility_tag(&self, event: &Event) -> VisibilityTag {
        display::visibility_tag(event.is_public())
    }

    fn recompute(&mut self) {
        let query = self.query();
        self.rows = query.apply(&self.events_rx.borrow_and_update());
        self.page = self.page.clamp(1, self.page_count());
        debug!(rows = self.rows.len(), "list recomputed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventdesk_models::{EventBuilder, EventFeed};
    use eventdesk_store::{StaticEventSource, StoreConfig};

    fn feed() -> EventFeed {
        EventFeed::new(vec![
            EventBuilder::new("b", "org-123")
                .title("Board Meeting")
                .description("Quarterly review")
                .starts("2025-03-01T09:00:00Z")
                .public(false)
                .build(),
            EventBuilder::new("a", "org-123")
                .title("Alpha Launch")
                .description("Rooftop party")
                .starts("2025-01-10T18:00:00Z")
                .public(true)
                .build(),
        ])
    }

    async fn make_list(feed: EventFeed) -> (Arc<EventStore>, ListViewModel) {
        let source = Arc::new(StaticEventSource::new(feed));
        let store = Arc::new(EventStore::connect(StoreConfig::default(), source).await);
        let list = ListViewModel::new(Arc::clone(&store));
        (store, list)
    }

    fn ids(list: &ListViewModel) -> Vec<&str> {
        list.rows().iter().map(|e| e.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_initial_rows_sorted_ascending() {
        let (_store, list) = make_list(feed()).await;
        assert_eq!(ids(&list), vec!["a", "b"]);
        assert!(!list.is_loading());
        assert_eq!(list.total(), 2);
    }

    #[tokio::test]
    async fn test_controls_recompute() {
        let (_store, mut list) = make_list(feed()).await;

        assert!(list.set_sort(SortOrder::Descending));
        assert_eq!(ids(&list), vec!["b", "a"]);

        assert!(list.set_visibility(VisibilityFilter::Public));
        assert_eq!(ids(&list), vec!["a"]);

        assert!(list.set_visibility(VisibilityFilter::All));
        assert!(list.set_search("REVIEW"));
        assert_eq!(ids(&list), vec!["b"]);

        assert!(!list.set_search("REVIEW"));
    }

    #[tokio::test]
    async fn test_store_mutations_reach_list() {
        let (store, mut list) = make_list(feed()).await;

        store.update(
            "b",
            &eventdesk_models::UpdateEventRequest::new().title("Renamed"),
        );
        assert!(list.sync());
        assert_eq!(list.rows()[1].title, "Renamed");

        assert!(!list.sync());
    }

    #[tokio::test]
    async fn test_delete_hides_row() {
        let (store, mut list) = make_list(feed()).await;

        let outcome = list.delete("a");

        assert_eq!(outcome.notice, Some(Notice::success("Event deleted successfully")));
        assert_eq!(ids(&list), vec!["b"]);
        // Still held by the store.
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_unknown_reports_error() {
        let (_store, mut list) = make_list(feed()).await;

        let outcome = list.delete("missing");

        assert!(outcome.is_error());
        assert_eq!(outcome.notice.unwrap().message, "Failed to delete event");
        assert_eq!(list.total(), 2);
    }

    #[tokio::test]
    async fn test_changed_wakes_on_store_emission() {
        let (store, mut list) = make_list(feed()).await;

        store.delete("b");
        list.changed().await.unwrap();

        assert_eq!(ids(&list), vec!["a"]);
    }

    #[tokio::test]
    async fn test_pagination() {
        let events = (0..23)
            .map(|i| {
                EventBuilder::new(format!("e{:02}", i), "org-123")
                    .starts(format!("2025-01-{:02}T10:00:00Z", i + 1))
                    .build()
            })
            .collect();
        let (_store, mut list) = make_list(EventFeed::new(events)).await;

        assert_eq!(list.page_count(), 3);
        assert_eq!(list.page_rows().len(), PAGE_SIZE);

        list.set_page(3);
        assert_eq!(list.page_rows().len(), 3);
        assert_eq!(list.page_rows()[0].id, "e20");

        list.set_page(99);
        assert_eq!(list.page(), 3);

        // Filtering down clamps the page.
        list.set_search("e05");
        assert_eq!(list.page(), 1);
    }

    #[tokio::test]
    async fn test_empty_after_failed_or_empty_load() {
        let (_store, list) = make_list(EventFeed::default()).await;
        assert!(list.is_empty());
        assert_eq!(list.page_count(), 1);
        assert!(list.page_rows().is_empty());
    }

    #[tokio::test]
    async fn test_row_helpers() {
        let (_store, list) = make_list(feed()).await;
        let row = &list.rows()[0];

        assert_eq!(list.edit_route(row), Route::Edit("a".into()));
        assert_eq!(list.view_route(row), Route::Details("a".into()));
        assert_eq!(list.create_route(), Route::Create);
        assert_eq!(list.status_color(row), TagColor::Green);
        assert_eq!(list.visibility_tag(row).text, "Public");
    }
}
