//! Read-side queries over the event list.
//!
//! A query is a pure function of (events, criteria): it never touches the
//! store, so derived lists can be recomputed whenever an input changes.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use eventdesk_models::Event;

/// Direction for ordering by start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Earliest first.
    #[default]
    Ascending,
    /// Latest first.
    Descending,
}

impl SortOrder {
    /// Returns the order for an `ascending` flag.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }
}

/// Filter and sort criteria for listing events.
///
/// Soft-deleted events never match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQuery {
    /// Case-insensitive substring matched against title or description.
    pub search: Option<String>,
    /// Required visibility.
    pub visibility: Option<bool>,
    /// Ordering by start time; `None` keeps store order.
    pub sort: Option<SortOrder>,
}

impl EventQuery {
    /// Creates a query matching every live event in store order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search term. An empty term matches everything.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = (!term.is_empty()).then_some(term);
        self
    }

    /// Sets the visibility filter (`None` for any).
    pub fn with_visibility(mut self, visibility: Option<bool>) -> Self {
        self.visibility = visibility;
        self
    }

    /// Sets the sort order.
    pub fn with_sort(mut self, order: SortOrder) -> Self {
        self.sort = Some(order);
        self
    }

    /// Returns true if the event passes every filter.
    pub fn matches(&self, event: &Event) -> bool {
        if event.is_deleted() {
            return false;
        }

        if let Some(ref term) = self.search {
            let term = term.to_lowercase();
            if !event.title.to_lowercase().contains(&term)
                && !event.description.to_lowercase().contains(&term)
            {
                return false;
            }
        }

        if let Some(visibility) = self.visibility {
            if event.is_public() != visibility {
                return false;
            }
        }

        true
    }

    /// Filters and sorts `events`, returning owned copies.
    pub fn apply(&self, events: &[Event]) -> Vec<Event> {
        let matched = events.iter().filter(|e| self.matches(e)).cloned();

        let Some(order) = self.sort else {
            return matched.collect();
        };

        let mut keyed: Vec<(Option<DateTime<Utc>>, Event)> =
            matched.map(|e| (e.starts_at(), e)).collect();
        // Stable: equal start times keep store order.
        keyed.sort_by(|(a, _), (b, _)| compare_start(a.as_ref(), b.as_ref(), order));
        keyed.into_iter().map(|(_, e)| e).collect()
    }
}

/// Unreadable timestamps go last in either direction.
fn compare_start(
    a: Option<&DateTime<Utc>>,
    b: Option<&DateTime<Utc>>,
    order: SortOrder,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match order {
            SortOrder::Ascending => a.cmp(b),
            SortOrder::Descending => b.cmp(a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use eventdesk_models::EventBuilder;

    fn event_a() -> Event {
        EventBuilder::new("a", "org-123")
            .title("Alpha Launch")
            .description("Rooftop party")
            .starts("2025-01-10T18:00:00Z")
            .public(true)
            .build()
    }

    fn event_b() -> Event {
        EventBuilder::new("b", "org-123")
            .title("Board Meeting")
            .description("Quarterly review")
            .starts("2025-03-01T09:00:00Z")
            .public(false)
            .build()
    }

    fn ids(events: &[Event]) -> Vec<&str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_keeps_order() {
        let events = vec![event_b(), event_a()];
        assert_eq!(ids(&EventQuery::new().apply(&events)), vec!["b", "a"]);
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let events = vec![event_b(), event_a()];

        let asc = EventQuery::new().with_sort(SortOrder::Ascending).apply(&events);
        assert_eq!(ids(&asc), vec!["a", "b"]);

        let desc = EventQuery::new().with_sort(SortOrder::Descending).apply(&events);
        assert_eq!(ids(&desc), vec!["b", "a"]);
    }

    #[test]
    fn test_filter_by_visibility() {
        let events = vec![event_a(), event_b()];

        let public = EventQuery::new().with_visibility(Some(true)).apply(&events);
        assert_eq!(ids(&public), vec!["a"]);

        let private = EventQuery::new().with_visibility(Some(false)).apply(&events);
        assert_eq!(ids(&private), vec!["b"]);
    }

    #[test]
    fn test_absent_visibility_uses_default() {
        let event = EventBuilder::new("c", "org-123").visibility(None).build();
        let query = EventQuery::new().with_visibility(Some(eventdesk_models::DEFAULT_IS_PUBLIC));
        assert!(query.matches(&event));
    }

    #[test]
    fn test_search_title_or_description_case_insensitive() {
        let events = vec![event_a(), event_b()];

        assert_eq!(ids(&EventQuery::new().with_search("ALPHA").apply(&events)), vec!["a"]);
        assert_eq!(ids(&EventQuery::new().with_search("quarterly").apply(&events)), vec!["b"]);
        assert!(EventQuery::new().with_search("gala").apply(&events).is_empty());
    }

    #[test]
    fn test_empty_search_matches_all() {
        let query = EventQuery::new().with_search("");
        assert!(query.search.is_none());
        assert_eq!(query.apply(&[event_a(), event_b()]).len(), 2);
    }

    #[test]
    fn test_deleted_never_match() {
        let deleted = EventBuilder::new("d", "org-123").deleted_at(Utc::now()).build();
        assert!(!EventQuery::new().matches(&deleted));
        assert!(EventQuery::new().apply(&[deleted]).is_empty());
    }

    #[test]
    fn test_sort_is_stable_and_unparseable_last() {
        let first = EventBuilder::new("x1", "org-123").starts("2025-05-01T10:00:00Z").build();
        let second = EventBuilder::new("x2", "org-123").starts("2025-05-01T10:00:00Z").build();
        let broken = EventBuilder::new("x3", "org-123").starts("TBD").build();
        let events = vec![broken, first, second];

        let asc = EventQuery::new().with_sort(SortOrder::Ascending).apply(&events);
        assert_eq!(ids(&asc), vec!["x1", "x2", "x3"]);

        let desc = EventQuery::new().with_sort(SortOrder::Descending).apply(&events);
        assert_eq!(ids(&desc), vec!["x1", "x2", "x3"]);
    }

    #[test]
    fn test_combined_filters() {
        let extra = EventBuilder::new("c", "org-123")
            .title("Alpha Retro")
            .starts("2024-12-01T09:00:00Z")
            .public(true)
            .build();
        let events = vec![event_a(), event_b(), extra];

        let result = EventQuery::new()
            .with_search("alpha")
            .with_visibility(Some(true))
            .with_sort(SortOrder::Ascending)
            .apply(&events);

        assert_eq!(ids(&result), vec!["c", "a"]);
    }

    #[test]
    fn test_sort_order_from_flag() {
        assert_eq!(SortOrder::from_ascending(true), SortOrder::Ascending);
        assert_eq!(SortOrder::from_ascending(false), SortOrder::Descending);
    }
}
