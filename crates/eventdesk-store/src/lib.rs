//! Reactive in-session event store for EventDesk.
//!
//! This crate provides the `EventStore`, the single source of truth for the
//! events of one tenant during a session:
//! - One read from an `EventSource` (HTTP endpoint or static feed)
//! - Two observable channels (`tokio::sync::watch`): the event list and the
//!   loading flag
//! - Local create/update/soft-delete that re-emit to every subscriber
//! - Pure read-side queries (`EventQuery`) and live derived views
//!
//! Mutations are never written back to the source; `refresh` discards them.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use eventdesk_store::{EventQuery, EventStore, HttpEventSource, SortOrder, StoreConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StoreConfig::default();
//! let source = HttpEventSource::new(&config.endpoint)?;
//! let store = EventStore::connect(config, Arc::new(source)).await;
//!
//! // Live, sorted view over the store
//! let view = store.view(EventQuery::new().with_sort(SortOrder::Descending));
//! for event in view.current() {
//!     println!("{} starts {}", event.title, event.start_date_time);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod query;
pub mod source;
pub mod store;
pub mod view;

pub use config::StoreConfig;
pub use error::{Result, SourceError, StoreError};
pub use query::{EventQuery, SortOrder};
pub use source::{EventSource, HttpEventSource, StaticEventSource};
pub use store::EventStore;
pub use view::{EventView, EventWatch};
