/// HTTP tests for the search and health endpoints.
/// The router is driven with `oneshot`; the Spotify API is mocked.
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use chrono::{DateTime, TimeDelta, Utc};
use playlist_finder::{
    management::{Clock, SearchService, SystemClock},
    server,
    spotify::SpotifyClient,
};
use serde_json::{Value, json};
use tower::util::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct ManualClock(Mutex<DateTime<Utc>>);

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

async fn mount(server: &MockServer, route: &str, items: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": items,
            "next": null
        })))
        .mount(server)
        .await;
}

async fn create_test_app(server: &MockServer) -> (Router, Arc<SearchService>) {
    create_test_app_with_clock(server, Arc::new(SystemClock)).await
}

async fn create_test_app_with_clock(
    server: &MockServer,
    clock: Arc<dyn Clock>,
) -> (Router, Arc<SearchService>) {
    mount(
        server,
        "/me/playlists",
        json!([{ "id": "p1", "name": "P1" }, { "id": "p2", "name": "P2" }]),
    )
    .await;
    mount(
        server,
        "/me/tracks",
        json!([{ "track": { "name": "Alpha Remix" } }]),
    )
    .await;
    mount(
        server,
        "/playlists/p1/tracks",
        json!([{ "track": { "name": "Alpha" } }, { "track": { "name": "Beta" } }]),
    )
    .await;
    mount(
        server,
        "/playlists/p2/tracks",
        json!([{ "track": { "name": "Gamma" } }]),
    )
    .await;

    let service = Arc::new(SearchService::with_client(
        SpotifyClient::new(server.uri()),
        Duration::from_secs(3600),
        clock,
    ));
    (server::router(Arc::clone(&service)), service)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_search_returns_matching_playlist_names() {
    let upstream = MockServer::start().await;
    let (app, _) = create_test_app(&upstream).await;

    let (status, body) = get(app, "/api/spotify?token=abc&songName=ALPHA").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["P1", "Liked Songs"]));
}

#[tokio::test]
async fn test_search_decodes_query_parameters() {
    let upstream = MockServer::start().await;
    let (app, _) = create_test_app(&upstream).await;

    let (status, body) = get(app, "/api/spotify?token=abc&songName=alpha%20remix").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["Liked Songs"]));
}

#[tokio::test]
async fn test_whitespace_in_song_name_is_kept() {
    let upstream = MockServer::start().await;
    let (app, _) = create_test_app(&upstream).await;

    // "alpha " matches "Alpha Remix" but not the bare "Alpha" in P1
    let (status, body) = get(app.clone(), "/api/spotify?token=abc&songName=alpha%20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["Liked Songs"]));

    let (status, body) = get(app, "/api/spotify?token=abc&songName=%20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["Liked Songs"]));
}

#[tokio::test]
async fn test_search_with_no_match_returns_empty_array() {
    let upstream = MockServer::start().await;
    let (app, _) = create_test_app(&upstream).await;

    let (status, body) = get(app, "/api/spotify?token=abc&songName=delta").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_missing_parameters_are_rejected() {
    let upstream = MockServer::start().await;
    let (app, _) = create_test_app(&upstream).await;

    for uri in [
        "/api/spotify",
        "/api/spotify?token=abc",
        "/api/spotify?songName=alpha",
        "/api/spotify?token=&songName=alpha",
        "/api/spotify?token=abc&songName=",
    ] {
        let (status, body) = get(app.clone(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body, json!({ "error": "Invalid request parameters" }));
    }

    // validation happens before any upstream call
    assert!(upstream.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_upstream_failure_returns_generic_error() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .mount(&upstream)
        .await;

    let service = Arc::new(SearchService::with_client(
        SpotifyClient::new(upstream.uri()),
        Duration::from_secs(3600),
        Arc::new(SystemClock),
    ));
    let app = server::router(Arc::clone(&service));

    let (status, body) = get(app, "/api/spotify?token=expired&songName=alpha").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Error fetching playlists" }));
    assert!(service.cache().current().await.is_none());
}

#[tokio::test]
async fn test_second_request_is_served_from_cache() {
    let upstream = MockServer::start().await;
    let (app, _) = create_test_app(&upstream).await;

    let (_, first) = get(app.clone(), "/api/spotify?token=abc&songName=gamma").await;
    let (_, second) = get(app, "/api/spotify?token=abc&songName=gamma").await;

    assert_eq!(first, json!(["P2"]));
    assert_eq!(first, second);
    assert_eq!(upstream.received_requests().await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_health_reports_cache_state() {
    let upstream = MockServer::start().await;
    let (app, _) = create_test_app(&upstream).await;

    let (status, body) = get(app.clone(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["cache"]["state"], "empty");
    assert!(body["cache"]["built_at"].is_null());

    get(app.clone(), "/api/spotify?token=abc&songName=beta").await;

    let (_, body) = get(app, "/health").await;
    assert_eq!(body["cache"]["state"], "fresh");
    assert!(body["cache"]["built_at"].is_string());
}

#[tokio::test]
async fn test_health_uses_the_service_clock() {
    let upstream = MockServer::start().await;
    let built = Utc::now() - TimeDelta::days(1);
    let clock = Arc::new(ManualClock(Mutex::new(built)));
    let (app, _) = create_test_app_with_clock(&upstream, clock.clone()).await;

    get(app.clone(), "/api/spotify?token=abc&songName=beta").await;
    let (_, body) = get(app.clone(), "/health").await;
    assert_eq!(body["cache"]["state"], "fresh");
    assert_eq!(body["cache"]["built_at"], built.to_rfc3339());

    *clock.0.lock().unwrap() += TimeDelta::hours(2);
    let (_, body) = get(app, "/health").await;
    assert_eq!(body["cache"]["state"], "stale");
    assert_eq!(body["cache"]["built_at"], built.to_rfc3339());
}
