//! Shared helpers for driving the router directly with `tower::ServiceExt`.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use maestro_api::middleware::rate_limit::RateLimiter;
use maestro_api::state::{AppState, AuthConfig};
use maestro_core::{
    BookingStore, ClassCatalog, PlaceholderVerifier, ReservationEngine,
};
use maestro_store::{seed_demo_catalog, MemoryStore};
use serde_json::Value;
use tower::ServiceExt;

pub fn build_test_app() -> Router {
    // High enough that ordinary tests never trip the limiter
    build_test_app_with_rate_limit(10_000)
}

pub fn build_test_app_with_rate_limit(max_requests: u32) -> Router {
    let store = Arc::new(MemoryStore::new());
    seed_demo_catalog(&store).expect("seeding test catalog");

    let engine = Arc::new(ReservationEngine::new(
        store.clone() as Arc<dyn ClassCatalog>,
        store.clone() as Arc<dyn BookingStore>,
    ));

    let state = AppState {
        catalog: store as Arc<dyn ClassCatalog>,
        engine,
        identity: Arc::new(PlaceholderVerifier),
        auth: AuthConfig {
            secret: "test-secret".to_string(),
            expiration: 3600,
        },
        rate_limiter: Arc::new(RateLimiter::new(max_requests, Duration::from_secs(900))),
    };

    maestro_api::app(state)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn get_authed(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header("Authorization", "Bearer test-token")
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .header("Authorization", "Bearer test-token")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .header("Authorization", "Bearer test-token")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json_unauthed(app: Router, uri: &str, body: Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete_authed(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .header("Authorization", "Bearer test-token")
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
