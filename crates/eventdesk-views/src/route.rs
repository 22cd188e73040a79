//! Routes of the event-management screens.

use std::fmt;

/// Segment all event screens live under.
pub const BASE_PATH: &str = "/p/events";

/// A screen of the event-management section.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/list`, also the target of the empty path.
    List,
    /// `/create`
    Create,
    /// `/edit/:id`
    Edit(String),
    /// `/details/:id`
    Details(String),
}

impl Route {
    /// Resolves a path, with or without the base segment.
    ///
    /// Returns `None` for paths that name no screen.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim();
        let rest = path.strip_prefix(BASE_PATH).unwrap_or(path);
        let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["list"] => Some(Route::List),
            ["create"] => Some(Route::Create),
            ["edit", id] => Some(Route::Edit((*id).to_string())),
            ["details", id] => Some(Route::Details((*id).to_string())),
            _ => None,
        }
    }

    /// The event id carried by the route, if any.
    pub fn event_id(&self) -> Option<&str> {
        match self {
            Route::Edit(id) | Route::Details(id) => Some(id.as_str()),
            Route::List | Route::Create => None,
        }
    }

    /// Full path including the base segment.
    pub fn path(&self) -> String {
        match self {
            Route::List => format!("{}/list", BASE_PATH),
            Route::Create => format!("{}/create", BASE_PATH),
            Route::Edit(id) => format!("{}/edit/{}", BASE_PATH, id),
            Route::Details(id) => format!("{}/details/{}", BASE_PATH, id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
