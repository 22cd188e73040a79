//! Create/edit form for a single event.
//!
//! Field validators run on demand against the current values. The schedule
//! rule (end strictly after start) is evaluated whenever one of the four
//! schedule fields changes and is kept apart from the field validators, so a
//! field can carry both a `Required` error and a schedule error.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use eventdesk_models::{CreateEventRequest, Event, VenueRequest};
use eventdesk_store::EventStore;
use tracing::{debug, info, warn};

use crate::error::{Result, ViewError};
use crate::notice::{Notice, Outcome};
use crate::route::Route;

/// URL used when the primary image "upload" carries none.
pub const PRIMARY_IMAGE_PLACEHOLDER: &str =
    "https://api.slingacademy.com/public/sample-photos/1.jpeg";

/// URL used when the cover image "upload" carries none.
pub const COVER_IMAGE_PLACEHOLDER: &str =
    "https://api.slingacademy.com/public/sample-photos/2.jpeg";

/// Time zones offered by the form, as (value, label).
pub const TIMEZONE_OPTIONS: [(&str, &str); 8] = [
    ("UTC", "UTC"),
    ("America/New_York", "Eastern Time"),
    ("America/Chicago", "Central Time"),
    ("America/Denver", "Mountain Time"),
    ("America/Los_Angeles", "Pacific Time"),
    ("Europe/London", "London"),
    ("Europe/Paris", "Paris"),
    ("Asia/Tokyo", "Tokyo"),
];

/// A control of the event form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Description,
    StartDate,
    StartTime,
    EndDate,
    EndTime,
    Timezone,
    VenueName,
    VenueAddress,
    VenueCity,
    VenueState,
    VenueCountry,
    VenuePostalCode,
    PrimaryImageUrl,
    CoverImageUrl,
    IsPublic,
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
}

impl FormField {
    /// Every field, in display order.
    pub const ALL: [FormField; 16] = [
        FormField::Title,
        FormField::Description,
        FormField::StartDate,
        FormField::StartTime,
        FormField::EndDate,
        FormField::EndTime,
        FormField::Timezone,
        FormField::VenueName,
        FormField::VenueAddress,
        FormField::VenueCity,
        FormField::VenueState,
        FormField::VenueCountry,
        FormField::VenuePostalCode,
        FormField::PrimaryImageUrl,
        FormField::CoverImageUrl,
        FormField::IsPublic,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::StartDate => "Start date",
            FormField::StartTime => "Start time",
            FormField::EndDate => "End date",
            FormField::EndTime => "End time",
            FormField::Timezone => "Timezone",
            FormField::VenueName => "Venue name",
            FormField::VenueAddress => "Address",
            FormField::VenueCity => "City",
            FormField::VenueState => "State",
            FormField::VenueCountry => "Country",
            FormField::VenuePostalCode => "Postal code",
            FormField::PrimaryImageUrl => "Primary image",
            FormField::CoverImageUrl => "Cover image",
            FormField::IsPublic => "Public",
        }
    }

    /// Returns true for free-text fields.
    pub fn is_text(self) -> bool {
        !matches!(
            self,
            FormField::StartDate
                | FormField::StartTime
                | FormField::EndDate
                | FormField::EndTime
                | FormField::IsPublic
        )
    }

    fn rules(self) -> &'static [Rule] {
        use Rule::*;
        match self {
            FormField::Title => &[Required, MinLength(3), MaxLength(100)],
            FormField::Description => &[Required, MinLength(10), MaxLength(1000)],
            FormField::VenueName => &[Required, MinLength(2), MaxLength(100)],
            FormField::VenueAddress => &[Required, MinLength(5), MaxLength(200)],
            FormField::VenueCity | FormField::VenueState | FormField::VenueCountry => {
                &[Required, MinLength(2), MaxLength(50)]
            }
            FormField::VenuePostalCode => &[Required, MinLength(3), MaxLength(20)],
            FormField::StartDate
            | FormField::StartTime
            | FormField::EndDate
            | FormField::EndTime
            | FormField::Timezone
            | FormField::PrimaryImageUrl
            | FormField::CoverImageUrl => &[Required],
            FormField::IsPublic => &[],
        }
    }
}

/// Validation failure on a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    MinLength { min: usize, actual: usize },
    MaxLength { max: usize, actual: usize },
    /// End date does not come after the start.
    InvalidEndDate,
    /// End time does not come after the start.
    InvalidEndTime,
}

impl FieldError {
    /// Stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::Required => "required",
            FieldError::MinLength { .. } => "minlength",
            FieldError::MaxLength { .. } => "maxlength",
            FieldError::InvalidEndDate => "invalidEndDate",
            FieldError::InvalidEndTime => "invalidEndTime",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => write!(f, "this field is required"),
            FieldError::MinLength { min, .. } => write!(f, "must be at least {} characters", min),
            FieldError::MaxLength { max, .. } => write!(f, "must be at most {} characters", max),
            FieldError::InvalidEndDate => write!(f, "end date must be after the start"),
            FieldError::InvalidEndTime => write!(f, "end time must be after the start"),
        }
    }
}

/// Raw values of the form controls.
#[derive(Debug, Clone, PartialEq)]
pub struct EventFormValues {
    pub title: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_date: Option<NaiveDate>,
    pub end_time: Option<NaiveTime>,
    pub timezone: String,
    pub venue_name: String,
    pub venue_address: String,
    pub venue_city: String,
    pub venue_state: String,
    pub venue_country: String,
    pub venue_postal_code: String,
    pub primary_image_url: String,
    pub cover_image_url: String,
    pub is_public: bool,
}

impl Default for EventFormValues {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            start_date: None,
            start_time: None,
            end_date: None,
            end_time: None,
            timezone: "UTC".to_string(),
            venue_name: String::new(),
            venue_address: String::new(),
            venue_city: String::new(),
            venue_state: String::new(),
            venue_country: String::new(),
            venue_postal_code: String::new(),
            primary_image_url: String::new(),
            cover_image_url: String::new(),
            is_public: true,
        }
    }
}

impl EventFormValues {
    /// Values shown when editing an existing event.
    pub fn from_event(event: &Event) -> Self {
        let start = event.starts_at();
        let end = event.ends_at();

        Self {
            title: event.title.clone(),
            description: event.description.clone(),
            start_date: start.map(|dt| dt.date_naive()),
            start_time: start.map(|dt| dt.time()),
            end_date: end.map(|dt| dt.date_naive()),
            end_time: end.map(|dt| dt.time()),
            timezone: event.timezone.clone(),
            venue_name: event.venue.venue_name.clone(),
            venue_address: event.venue.address1.clone(),
            venue_city: event.venue.city.clone(),
            venue_state: event.venue.state.clone(),
            venue_country: event.venue.country.clone(),
            venue_postal_code: event.venue.postal_zip.clone(),
            primary_image_url: event.primary_image_url.clone(),
            cover_image_url: event.cover_image_url.clone(),
            is_public: event.is_public(),
        }
    }

    /// Current value of a field rendered as text; empty when unset.
    pub fn display_value(&self, field: FormField) -> String {
        match field {
            FormField::StartDate => fmt_opt(self.start_date.map(|d| d.format("%Y-%m-%d"))),
            FormField::StartTime => fmt_opt(self.start_time.map(|t| t.format("%H:%M"))),
            FormField::EndDate => fmt_opt(self.end_date.map(|d| d.format("%Y-%m-%d"))),
            FormField::EndTime => fmt_opt(self.end_time.map(|t| t.format("%H:%M"))),
            FormField::IsPublic => (if self.is_public { "yes" } else { "no" }).to_string(),
            _ => self.text(field).unwrap_or_default().to_string(),
        }
    }

    fn text(&self, field: FormField) -> Option<&str> {
        let value = match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::Timezone => &self.timezone,
            FormField::VenueName => &self.venue_name,
            FormField::VenueAddress => &self.venue_address,
            FormField::VenueCity => &self.venue_city,
            FormField::VenueState => &self.venue_state,
            FormField::VenueCountry => &self.venue_country,
            FormField::VenuePostalCode => &self.venue_postal_code,
            FormField::PrimaryImageUrl => &self.primary_image_url,
            FormField::CoverImageUrl => &self.cover_image_url,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        let value = match field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::Timezone => &mut self.timezone,
            FormField::VenueName => &mut self.venue_name,
            FormField::VenueAddress => &mut self.venue_address,
            FormField::VenueCity => &mut self.venue_city,
            FormField::VenueState => &mut self.venue_state,
            FormField::VenueCountry => &mut self.venue_country,
            FormField::VenuePostalCode => &mut self.venue_postal_code,
            FormField::PrimaryImageUrl => &mut self.primary_image_url,
            FormField::CoverImageUrl => &mut self.cover_image_url,
            _ => return None,
        };
        Some(value)
    }

    fn is_set(&self, field: FormField) -> bool {
        match field {
            FormField::StartDate => self.start_date.is_some(),
            FormField::StartTime => self.start_time.is_some(),
            FormField::EndDate => self.end_date.is_some(),
            FormField::EndTime => self.end_time.is_some(),
            FormField::IsPublic => true,
            _ => self.text(field).is_some_and(|v| !v.is_empty()),
        }
    }

    /// Start and end as date + time-of-day (hours and minutes), once all four
    /// schedule fields are set.
    pub fn schedule(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let start = combine(self.start_date?, self.start_time?)?;
        let end = combine(self.end_date?, self.end_time?)?;
        Some((start, end))
    }

    /// Builds the create request, or `None` while the schedule is incomplete.
    pub fn to_request(&self) -> Option<CreateEventRequest> {
        let (start, end) = self.schedule()?;

        Some(CreateEventRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            start_date_time: to_iso(start),
            end_date_time: to_iso(end),
            timezone: self.timezone.clone(),
            venue: VenueRequest {
                venue_name: self.venue_name.clone(),
                address1: self.venue_address.clone(),
                city: self.venue_city.clone(),
                state: self.venue_state.clone(),
                country: self.venue_country.clone(),
                postal_zip: self.venue_postal_code.clone(),
            },
            primary_image_url: self.primary_image_url.clone(),
            cover_image_url: self.cover_image_url.clone(),
            is_public: self.is_public,
        })
    }
}

fn fmt_opt(value: Option<impl fmt::Display>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn combine(date: NaiveDate, time: NaiveTime) -> Option<NaiveDateTime> {
    let time = NaiveTime::from_hms_opt(time.hour(), time.minute(), 0)?;
    Some(date.and_time(time))
}

fn to_iso(dt: NaiveDateTime) -> String {
    dt.and_utc().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Whether the form creates a new event or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

/// File handed to an image upload control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadItem {
    pub name: String,
    /// URL the item is already available at, if any.
    pub url: Option<String>,
}

impl UploadItem {
    /// The item's URL, or `placeholder` when it has none or a blank one.
    fn url_or(&self, placeholder: &str) -> String {
        match self.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => placeholder.to_string(),
        }
    }
}

/// State behind the create/edit form.
pub struct FormViewModel {
    store: Arc<EventStore>,
    mode: FormMode,
    values: EventFormValues,
    schedule_errors: HashMap<FormField, FieldError>,
    touched: HashSet<FormField>,
}

impl FormViewModel {
    /// Opens an empty form in create mode.
    pub fn create(store: Arc<EventStore>) -> Self {
        Self {
            store,
            mode: FormMode::Create,
            values: EventFormValues::default(),
            schedule_errors: HashMap::new(),
            touched: HashSet::new(),
        }
    }

    /// Opens the form on an existing event.
    pub fn edit(store: Arc<EventStore>, id: &str) -> Result<Self> {
        let event = store
            .find(id)
            .ok_or_else(|| ViewError::NotFound(id.to_string()))?;
        debug!(event_id = %id, "editing event");

        let mut form = Self {
            store,
            mode: FormMode::Edit(id.to_string()),
            values: EventFormValues::from_event(&event),
            schedule_errors: HashMap::new(),
            touched: HashSet::new(),
        };
        form.validate_schedule();
        Ok(form)
    }

    /// Opens the form for a route: create for `Create`, edit for `Edit(id)`.
    pub fn for_route(store: Arc<EventStore>, route: &Route) -> Result<Self> {
        match route {
            Route::Create => Ok(Self::create(store)),
            Route::Edit(id) => Self::edit(store, id),
            Route::List | Route::Details(_) => Err(ViewError::MissingId),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn values(&self) -> &EventFormValues {
        &self.values
    }

    /// Heading of the screen.
    pub fn page_title(&self) -> &'static str {
        if self.is_edit_mode() {
            "Edit Event"
        } else {
            "Create Event"
        }
    }

    /// Sets a text field. Returns false if `field` is not a text field.
    pub fn set_text(&mut self, field: FormField, value: impl Into<String>) -> bool {
        match self.values.text_mut(field) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.values.start_date = date;
        self.validate_schedule();
    }

    pub fn set_start_time(&mut self, time: Option<NaiveTime>) {
        self.values.start_time = time;
        self.validate_schedule();
    }

    pub fn set_end_date(&mut self, date: Option<NaiveDate>) {
        self.values.end_date = date;
        self.validate_schedule();
    }

    pub fn set_end_time(&mut self, time: Option<NaiveTime>) {
        self.values.end_time = time;
        self.validate_schedule();
    }

    pub fn set_public(&mut self, is_public: bool) {
        self.values.is_public = is_public;
    }

    /// Marks a field as touched so its errors are displayed.
    pub fn touch(&mut self, field: FormField) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: FormField) -> bool {
        self.touched.contains(&field)
    }

    /// Every error on a field: its own validators, then the schedule rule.
    pub fn errors(&self, field: FormField) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if !self.values.is_set(field) {
            if field.rules().iter().any(|r| matches!(r, Rule::Required)) {
                errors.push(FieldError::Required);
            }
        } else if let Some(text) = self.values.text(field) {
            let actual = text.chars().count();
            for rule in field.rules() {
                match *rule {
                    Rule::MinLength(min) if actual < min => {
                        errors.push(FieldError::MinLength { min, actual })
                    }
                    Rule::MaxLength(max) if actual > max => {
                        errors.push(FieldError::MaxLength { max, actual })
                    }
                    _ => {}
                }
            }
        }

        if let Some(error) = self.schedule_errors.get(&field) {
            errors.push(*error);
        }
        errors
    }

    /// Errors to display: only for touched fields.
    pub fn visible_errors(&self, field: FormField) -> Vec<FieldError> {
        if self.is_touched(field) {
            self.errors(field)
        } else {
            Vec::new()
        }
    }

    pub fn is_field_valid(&self, field: FormField) -> bool {
        self.errors(field).is_empty()
    }

    pub fn is_valid(&self) -> bool {
        FormField::ALL.iter().all(|f| self.is_field_valid(*f))
    }

    /// Validates and saves through the store.
    ///
    /// An invalid form only marks every field touched. A saved form
    /// navigates back to the list.
    pub fn submit(&mut self) -> Outcome {
        let request = match self.values.to_request() {
            Some(request) if self.is_valid() => request,
            _ => {
                self.touched.extend(FormField::ALL);
                debug!("form submitted with validation errors");
                return Outcome::none();
            }
        };

        match &self.mode {
            FormMode::Create => {
                let event = self.store.create(request);
                info!(event_id = %event.id, "event created from form");
                Outcome::notify(Notice::success("Event created successfully"))
                    .then_navigate(Route::List)
            }
            FormMode::Edit(id) => match self.store.update(id, &request.into()) {
                Some(event) => {
                    info!(event_id = %event.id, "event updated from form");
                    Outcome::notify(Notice::success("Event updated successfully"))
                        .then_navigate(Route::List)
                }
                None => {
                    warn!(event_id = %id, "event vanished before update");
                    Outcome::notify(Notice::error("Failed to update event"))
                }
            },
        }
    }

    /// Leaves the form without saving.
    pub fn cancel(&self) -> Outcome {
        Outcome::go(Route::List)
    }

    /// Stub upload for the primary image. A missing or blank URL stores the
    /// placeholder. Always returns false so the native upload never runs.
    pub fn handle_primary_image_upload(&mut self, item: &UploadItem) -> bool {
        self.values.primary_image_url = item.url_or(PRIMARY_IMAGE_PLACEHOLDER);
        false
    }

    /// Stub upload for the cover image. Always returns false.
    pub fn handle_cover_image_upload(&mut self, item: &UploadItem) -> bool {
        self.values.cover_image_url = item.url_or(COVER_IMAGE_PLACEHOLDER);
        false
    }

    /// End must be strictly after start once all four fields are set.
    fn validate_schedule(&mut self) {
        self.schedule_errors.clear();

        if let Some((start, end)) = self.values.schedule() {
            if end <= start {
                self.schedule_errors
                    .insert(FormField::EndDate, FieldError::InvalidEndDate);
                self.schedule_errors
                    .insert(FormField::EndTime, FieldError::InvalidEndTime);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventdesk_models::{EventBuilder, EventFeed};
    use eventdesk_store::{StaticEventSource, StoreConfig};

    async fn make_store() -> Arc<EventStore> {
        let feed = EventFeed::new(vec![EventBuilder::new("e1", "org-123")
            .title("Existing Event")
            .description("An event that already exists")
            .schedule("2025-03-01T18:30:00.000Z", "2025-03-01T22:00:00.000Z")
            .visibility(None)
            .build()]);
        let source = Arc::new(StaticEventSource::new(feed));
        Arc::new(EventStore::connect(StoreConfig::default(), source).await)
    }

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn time(h: u32, m: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, 0)
    }

    fn fill_valid(form: &mut FormViewModel) {
        form.set_text(FormField::Title, "Summer Festival");
        form.set_text(FormField::Description, "Three stages of live music");
        form.set_start_date(date(2025, 6, 1));
        form.set_start_time(time(10, 0));
        form.set_end_date(date(2025, 6, 1));
        form.set_end_time(time(18, 0));
        form.set_text(FormField::VenueName, "Park");
        form.set_text(FormField::VenueAddress, "1 Park Lane");
        form.set_text(FormField::VenueCity, "Austin");
        form.set_text(FormField::VenueState, "TX");
        form.set_text(FormField::VenueCountry, "USA");
        form.set_text(FormField::VenuePostalCode, "73301");
        form.handle_primary_image_upload(&UploadItem::default());
        form.handle_cover_image_upload(&UploadItem::default());
    }

    #[tokio::test]
    async fn test_end_before_start_marks_both_fields() {
        let mut form = FormViewModel::create(make_store().await);
        form.set_start_date(date(2025, 6, 1));
        form.set_start_time(time(10, 0));
        form.set_end_date(date(2025, 6, 1));
        form.set_end_time(time(9, 0));

        assert!(form.errors(FormField::EndDate).contains(&FieldError::InvalidEndDate));
        assert!(form.errors(FormField::EndTime).contains(&FieldError::InvalidEndTime));
        assert!(form.is_field_valid(FormField::StartDate));

        form.set_end_time(time(11, 0));

        assert!(form.is_field_valid(FormField::EndDate));
        assert!(form.is_field_valid(FormField::EndTime));
    }

    #[tokio::test]
    async fn test_equal_start_and_end_is_invalid() {
        let mut form = FormViewModel::create(make_store().await);
        form.set_start_date(date(2025, 6, 1));
        form.set_start_time(time(10, 0));
        form.set_end_date(date(2025, 6, 1));
        form.set_end_time(NaiveTime::from_hms_opt(10, 0, 45));

        assert_eq!(form.errors(FormField::EndTime), vec![FieldError::InvalidEndTime]);
    }

    #[tokio::test]
    async fn test_schedule_error_independent_of_required() {
        let mut form = FormViewModel::create(make_store().await);
        form.set_start_date(date(2025, 6, 2));
        form.set_start_time(time(10, 0));
        form.set_end_date(date(2025, 6, 1));
        form.set_end_time(time(12, 0));
        assert_eq!(form.errors(FormField::EndDate), vec![FieldError::InvalidEndDate]);

        // Clearing a schedule field leaves only the required error.
        form.set_end_time(None);
        assert_eq!(form.errors(FormField::EndTime), vec![FieldError::Required]);
        assert!(form.is_field_valid(FormField::EndDate));
    }

    #[tokio::test]
    async fn test_length_validators() {
        let mut form = FormViewModel::create(make_store().await);

        assert_eq!(form.errors(FormField::Title), vec![FieldError::Required]);

        form.set_text(FormField::Title, "ab");
        assert_eq!(
            form.errors(FormField::Title),
            vec![FieldError::MinLength { min: 3, actual: 2 }]
        );

        form.set_text(FormField::VenuePostalCode, "1".repeat(21));
        assert_eq!(form.errors(FormField::VenuePostalCode)[0].code(), "maxlength");

        assert!(!form.set_text(FormField::StartDate, "2025-01-01"));
    }

    #[tokio::test]
    async fn test_defaults() {
        let form = FormViewModel::create(make_store().await);
        assert_eq!(form.values().timezone, "UTC");
        assert!(form.values().is_public);
        assert_eq!(form.page_title(), "Create Event");
        assert!(form.is_field_valid(FormField::Timezone));
        assert!(form.is_field_valid(FormField::IsPublic));
    }

    #[tokio::test]
    async fn test_invalid_submit_touches_everything() {
        let store = make_store().await;
        let mut form = FormViewModel::create(Arc::clone(&store));
        assert!(form.visible_errors(FormField::Title).is_empty());

        let outcome = form.submit();

        assert_eq!(outcome, Outcome::none());
        assert!(FormField::ALL.iter().all(|f| form.is_touched(*f)));
        assert_eq!(form.visible_errors(FormField::Title), vec![FieldError::Required]);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_creates_event() {
        let store = make_store().await;
        let mut form = FormViewModel::create(Arc::clone(&store));
        fill_valid(&mut form);
        assert!(form.is_valid());

        let outcome = form.submit();

        assert_eq!(outcome.notice, Some(Notice::success("Event created successfully")));
        assert_eq!(outcome.navigate, Some(Route::List));

        let created = store.snapshot().last().cloned().unwrap();
        assert_eq!(created.title, "Summer Festival");
        assert_eq!(created.start_date_time, "2025-06-01T10:00:00.000Z");
        assert_eq!(created.end_date_time, "2025-06-01T18:00:00.000Z");
        assert_eq!(created.venue.postal_zip, "73301");
        assert_eq!(created.primary_image_url, PRIMARY_IMAGE_PLACEHOLDER);
        assert_eq!(created.is_public, Some(true));
    }

    #[tokio::test]
    async fn test_edit_populates_and_updates() {
        let store = make_store().await;
        let mut form = FormViewModel::edit(Arc::clone(&store), "e1").unwrap();

        assert_eq!(form.page_title(), "Edit Event");
        assert_eq!(form.values().title, "Existing Event");
        assert_eq!(form.values().start_time, time(18, 30));
        assert_eq!(form.values().end_date, date(2025, 3, 1));
        // Absent visibility populates through the single default.
        assert_eq!(form.values().is_public, eventdesk_models::DEFAULT_IS_PUBLIC);

        form.set_text(FormField::Title, "Existing Event (moved)");
        form.set_end_time(time(23, 15));
        let outcome = form.submit();

        assert_eq!(outcome.notice, Some(Notice::success("Event updated successfully")));
        let updated = store.find("e1").unwrap();
        assert_eq!(updated.title, "Existing Event (moved)");
        assert_eq!(updated.end_date_time, "2025-03-01T23:15:00.000Z");
        assert!(updated.date_updated.is_some());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_update_after_delete_fails() {
        let store = make_store().await;
        let mut form = FormViewModel::edit(Arc::clone(&store), "e1").unwrap();
        store.delete("e1");

        let outcome = form.submit();

        assert!(outcome.is_error());
        assert_eq!(outcome.notice.unwrap().message, "Failed to update event");
        assert!(outcome.navigate.is_none());
    }

    #[tokio::test]
    async fn test_edit_unknown_event() {
        let result = FormViewModel::edit(make_store().await, "missing");
        let err = result.err().unwrap();
        assert!(matches!(err, ViewError::NotFound(_)));
        assert_eq!(err.outcome().navigate, Some(Route::List));
    }

    #[tokio::test]
    async fn test_for_route() {
        let store = make_store().await;
        assert!(!FormViewModel::for_route(Arc::clone(&store), &Route::Create)
            .unwrap()
            .is_edit_mode());
        assert!(FormViewModel::for_route(Arc::clone(&store), &Route::Edit("e1".into()))
            .unwrap()
            .is_edit_mode());
    }

    #[tokio::test]
    async fn test_upload_stub() {
        let mut form = FormViewModel::create(make_store().await);
        let item = UploadItem {
            name: "cover.png".into(),
            url: Some("https://cdn.test/cover.png".into()),
        };

        assert!(!form.handle_cover_image_upload(&item));
        assert!(!form.handle_primary_image_upload(&UploadItem::default()));

        assert_eq!(form.values().cover_image_url, "https://cdn.test/cover.png");
        assert_eq!(form.values().primary_image_url, PRIMARY_IMAGE_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_upload_blank_url_uses_placeholder() {
        let mut form = FormViewModel::create(make_store().await);
        let blank = UploadItem {
            name: "photo.png".into(),
            url: Some(String::new()),
        };
        let spaces = UploadItem {
            name: "photo.png".into(),
            url: Some("   ".into()),
        };

        assert!(!form.handle_primary_image_upload(&blank));
        assert!(!form.handle_cover_image_upload(&spaces));

        assert_eq!(form.values().primary_image_url, PRIMARY_IMAGE_PLACEHOLDER);
        assert_eq!(form.values().cover_image_url, COVER_IMAGE_PLACEHOLDER);
        assert!(form.errors(FormField::PrimaryImageUrl).is_empty());
        assert!(form.errors(FormField::CoverImageUrl).is_empty());
    }

    #[tokio::test]
    async fn test_cancel_goes_to_list() {
        let form = FormViewModel::create(make_store().await);
        assert_eq!(form.cancel(), Outcome::go(Route::List));
    }

    #[tokio::test]
    async fn test_display_values() {
        let form = FormViewModel::edit(make_store().await, "e1").unwrap();
        let values = form.values();

        assert_eq!(values.display_value(FormField::StartDate), "2025-03-01");
        assert_eq!(values.display_value(FormField::EndTime), "22:00");
        assert_eq!(values.display_value(FormField::VenueCity), "Springfield");
        assert_eq!(values.display_value(FormField::IsPublic), "no");
        assert_eq!(FormField::VenuePostalCode.label(), "Postal code");
    }

    #[test]
    fn test_timezone_options() {
        assert_eq!(TIMEZONE_OPTIONS.len(), 8);
        assert_eq!(TIMEZONE_OPTIONS[1], ("America/New_York", "Eastern Time"));
    }
}
