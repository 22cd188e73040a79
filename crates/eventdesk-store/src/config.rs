//! Store configuration.

/// Endpoint serving the mocked events document.
pub const DEFAULT_ENDPOINT: &str = "https://hessadnani.com/api/mock.json";

/// Tenant whose events are shown when none is configured.
pub const DEFAULT_TENANT_ID: &str = "org-123";

/// Configuration for the event store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// URL of the events document.
    pub endpoint: String,
    /// Active tenant; only its events are kept on load.
    pub tenant_id: String,
    /// Business name stamped on events created in this session.
    pub organizer_name: String,
    /// Contact email stamped on venues created in this session.
    pub venue_email: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            tenant_id: DEFAULT_TENANT_ID.to_string(),
            organizer_name: "Event Corp".to_string(),
            venue_email: "info@venue.com".to_string(),
        }
    }
}

impl StoreConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the active tenant.
    pub fn with_tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = tenant_id.into();
        self
    }

    /// Sets the organizer business name.
    pub fn with_organizer_name(mut self, name: impl Into<String>) -> Self {
        self.organizer_name = name.into();
        self
    }

    /// Sets the venue contact email.
    pub fn with_venue_email(mut self, email: impl Into<String>) -> Self {
        self.venue_email = email.into();
        self
    }
}
