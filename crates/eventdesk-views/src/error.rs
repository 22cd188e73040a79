//! Error types for view-models.

use eventdesk_store::StoreError;
use thiserror::Error;

use crate::notice::{Notice, Outcome};
use crate::route::Route;

/// Errors that prevent a view-model from showing its screen.
#[derive(Error, Debug)]
pub enum ViewError {
    /// The route carried no event id.
    #[error("Event ID not provided")]
    MissingId,

    /// No live event has the requested id.
    #[error("Event not found")]
    NotFound(String),

    /// The store went away.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl ViewError {
    /// What the screen should do instead: show the error and go back to the list.
    pub fn outcome(&self) -> Outcome {
        Outcome::notify(Notice::error(self.to_string())).then_navigate(Route::List)
    }
}

/// Failure reported by a host platform service (clipboard, share sheet).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct PlatformError(pub String);

/// Result type alias for view-model operations.
pub type Result<T> = std::result::Result<T, ViewError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeLevel;

    #[test]
    fn test_not_found_outcome() {
        let outcome = ViewError::NotFound("event-1".into()).outcome();

        let notice = outcome.notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Event not found");
        assert_eq!(outcome.navigate, Some(Route::List));
    }

    #[test]
    fn test_missing_id_display() {
        assert_eq!(ViewError::MissingId.to_string(), "Event ID not provided");
    }
}
