//! Event sources: where the store reads its feed from.

use std::path::PathBuf;

use async_trait::async_trait;
use eventdesk_models::EventFeed;
use tokio::sync::RwLock;
use tracing::{debug, trace};
use url::Url;

use crate::error::SourceError;

/// A read-only provider of the events document.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetches the whole feed, across all tenants.
    async fn fetch(&self) -> std::result::Result<EventFeed, SourceError>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}

/// Reads the feed with a single HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpEventSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpEventSource {
    /// Creates a source for the given endpoint.
    pub fn new(endpoint: &str) -> std::result::Result<Self, SourceError> {
        Ok(Self::with_client(reqwest::Client::new(), Url::parse(endpoint)?))
    }

    /// Creates a source with a preconfigured client.
    pub fn with_client(client: reqwest::Client, url: Url) -> Self {
        Self { client, url }
    }

    /// Returns the endpoint URL.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl EventSource for HttpEventSource {
    async fn fetch(&self) -> std::result::Result<EventFeed, SourceError> {
        debug!(url = %self.url, "GET events feed");

        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: self.url.to_string(),
            });
        }

        let body = response.text().await?;
        trace!(bytes = body.len(), "feed body received");

        Ok(EventFeed::from_json(&body)?)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

#[derive(Debug, Clone)]
enum Origin {
    Inline(EventFeed),
    File(PathBuf),
}

/// Serves a feed held in memory or read from a local JSON file.
///
/// File-backed sources re-read the file on every fetch, so a refresh picks
/// up edits.
#[derive(Debug)]
pub struct StaticEventSource {
    origin: RwLock<Origin>,
}

impl StaticEventSource {
    /// Creates a source serving the given feed.
    pub fn new(feed: EventFeed) -> Self {
        Self {
            origin: RwLock::new(Origin::Inline(feed)),
        }
    }

    /// Creates a source reading the feed from a file.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: RwLock::new(Origin::File(path.into())),
        }
    }

    /// Replaces the feed served by subsequent fetches.
    pub async fn replace(&self, feed: EventFeed) {
        *self.origin.write().await = Origin::Inline(feed);
    }
}

#[async_trait]
impl EventSource for StaticEventSource {
    async fn fetch(&self) -> std::result::Result<EventFeed, SourceError> {
        let origin = self.origin.read().await.clone();
        match origin {
            Origin::Inline(feed) => Ok(feed),
            Origin::File(path) => {
                let text = tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|source| SourceError::Io {
                        path: path.clone(),
                        source,
                    })?;
                Ok(EventFeed::from_json(&text)?)
            }
        }
    }

    fn describe(&self) -> String {
        match self.origin.try_read().map(|o| o.clone()) {
            Ok(Origin::File(path)) => path.display().to_string(),
            Ok(Origin::Inline(_)) => "inline feed".to_string(),
            Err(_) => "static feed".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventdesk_models::EventBuilder;
    use std::io::Write;

    #[tokio::test]
    async fn test_inline_source_serves_feed() {
        let feed = EventFeed::new(vec![EventBuilder::new("e1", "org-123").build()]);
        let source = StaticEventSource::new(feed.clone());

        assert_eq!(source.fetch().await.unwrap(), feed);
        assert_eq!(source.describe(), "inline feed");
    }

    #[tokio::test]
    async fn test_replace_feed() {
        let source = StaticEventSource::new(EventFeed::default());
        let feed = EventFeed::new(vec![EventBuilder::new("e1", "org-123").build()]);

        source.replace(feed).await;

        assert_eq!(source.fetch().await.unwrap().events.len(), 1);
    }

    #[tokio::test]
    async fn test_file_source_reads_feed() {
        let feed = EventFeed::new(vec![EventBuilder::new("e1", "org-123").build()]);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&feed).unwrap()).unwrap();

        let source = StaticEventSource::from_path(file.path());
        let fetched = source.fetch().await.unwrap();

        assert_eq!(fetched.events[0].id, "e1");
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = StaticEventSource::from_path(dir.path().join("missing.json"));

        let result = source.fetch().await;
        assert!(matches!(result, Err(SourceError::Io { .. })));
    }

    #[tokio::test]
    async fn test_malformed_file_is_decode_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"events\": 42}}").unwrap();

        let source = StaticEventSource::from_path(file.path());
        assert!(matches!(source.fetch().await, Err(SourceError::Decode(_))));
    }

    #[test]
    fn test_http_source_rejects_bad_url() {
        let result = HttpEventSource::new("not a url");
        assert!(matches!(result, Err(SourceError::InvalidUrl(_))));
    }

    #[test]
    fn test_http_source_describe() {
        let source = HttpEventSource::new("https://example.com/mock.json").unwrap();
        assert_eq!(source.describe(), "https://example.com/mock.json");
        assert_eq!(source.url().host_str(), Some("example.com"));
    }
}
