//! HttpEventSource against a local HTTP server.

use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;
use eventdesk_store::{EventSource, EventStore, HttpEventSource, SourceError, StoreConfig};

const FEED: &str = include_str!("fixtures/feed.json");

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn app() -> Router {
    Router::new()
        .route(
            "/api/mock.json",
            get(|| async { ([(header::CONTENT_TYPE, "application/json")], FEED) }),
        )
        .route(
            "/api/down.json",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        )
        .route("/api/garbage.json", get(|| async { "<html>oops</html>" }))
}

#[tokio::test]
async fn test_fetches_feed_over_http() {
    let base = serve(app()).await;
    let source = HttpEventSource::new(&format!("{}/api/mock.json", base)).unwrap();

    let feed = source.fetch().await.unwrap();
    assert_eq!(feed.events.len(), 5);
}

#[tokio::test]
async fn test_non_success_status_is_error() {
    let base = serve(app()).await;
    let source = HttpEventSource::new(&format!("{}/api/down.json", base)).unwrap();

    match source.fetch().await {
        Err(SourceError::Status { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_store_loads_over_http() {
    let base = serve(app()).await;
    let config = StoreConfig::default().with_endpoint(format!("{}/api/mock.json", base));
    let source = HttpEventSource::new(&config.endpoint).unwrap();

    let store = EventStore::connect(config, Arc::new(source)).await;

    assert_eq!(store.len(), 3);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn test_store_degrades_to_empty_on_bad_body() {
    let base = serve(app()).await;
    let config = StoreConfig::default().with_endpoint(format!("{}/api/garbage.json", base));
    let source = HttpEventSource::new(&config.endpoint).unwrap();

    let store = EventStore::connect(config, Arc::new(source)).await;

    assert!(store.is_empty());
    assert!(!store.is_loading());
}
