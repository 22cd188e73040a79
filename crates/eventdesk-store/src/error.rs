//! Error types for store operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading the event feed.
///
/// The store never surfaces these to callers; `EventStore::load` logs them
/// and falls back to an empty list.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The endpoint is not a valid URL.
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The document is not a valid feed.
    #[error("invalid feed: {0}")]
    Decode(#[from] serde_json::Error),

    /// A feed file could not be read.
    #[error("failed to read feed {path:?}: {source}")]
    Io {
        /// Path of the feed file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that can occur while observing the store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store was dropped while a subscriber was waiting.
    #[error("event store closed")]
    Closed,
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
