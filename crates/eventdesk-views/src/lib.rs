//! View-models for the EventDesk screens.
//!
//! Each view-model owns receivers on the shared `EventStore`, derives its
//! display state from them, and turns user actions into store calls plus an
//! `Outcome` (a notice to show and/or a route to navigate to):
//! - `ListViewModel` - search, visibility filter, sort, pagination, delete
//! - `FormViewModel` - create/edit form with field and schedule validation
//! - `DetailsViewModel` - read-only projection with ticket/lead aggregates
//!
//! Dropping a view-model drops its receivers, which ends its subscription.

pub mod details;
pub mod display;
pub mod error;
pub mod form;
pub mod list;
pub mod notice;
pub mod route;

pub use details::{Clipboard, DetailsViewModel, ShareData, ShareTarget};
pub use display::{status_color, visibility_tag, TagColor, VisibilityTag};
pub use error::{PlatformError, Result, ViewError};
pub use form::{
    EventFormValues, FieldError, FormField, FormMode, FormViewModel, UploadItem,
    COVER_IMAGE_PLACEHOLDER, PRIMARY_IMAGE_PLACEHOLDER, TIMEZONE_OPTIONS,
};
pub use list::{ListViewModel, VisibilityFilter, PAGE_SIZE};
pub use notice::{Notice, NoticeLevel, Outcome};
pub use route::{Route, BASE_PATH};
