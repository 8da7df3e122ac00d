mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{Router, extract::Request, routing::get};
use axum_test::TestServer;
use mockall::mock;
use url_redirector::handlers::redirect_handler;
use url_redirector::routes::app_router;
use url_redirector::store::{StoreError, StoreResult, UrlStore};

mock! {
    pub Store {}

    #[async_trait]
    impl UrlStore for Store {
        async fn get(&self, short_key: &str) -> StoreResult<Option<String>>;
        async fn health_check(&self) -> bool;
    }
}

fn redirect_router(state: url_redirector::AppState) -> Router {
    Router::new()
        .route("/{short_key}", get(redirect_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_redirect_success() {
    let (state, store) = common::create_test_state();
    store.insert("abc123", "https://example.com/page");

    let server = TestServer::new(redirect_router(state)).unwrap();

    let response = server.get("/abc123").await;

    assert_eq!(response.status_code(), 302);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/page");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _store) = common::create_test_state();

    let server = TestServer::new(redirect_router(state)).unwrap();

    let response = server.get("/zzzzzz").await;

    response.assert_status_not_found();
    response.assert_text("URL을 찾을 수 없습니다.");
}

#[tokio::test]
async fn test_redirect_is_idempotent() {
    let (state, store) = common::create_test_state();
    store.insert("stable", "https://example.com/target");

    let server = TestServer::new(redirect_router(state)).unwrap();

    for _ in 0..3 {
        let response = server.get("/stable").await;
        assert_eq!(response.status_code(), 302);
        assert_eq!(response.header("location"), "https://example.com/target");
    }

    for _ in 0..3 {
        let response = server.get("/missing").await;
        response.assert_status_not_found();
    }
}

#[tokio::test]
async fn test_redirect_uses_stored_value_verbatim() {
    // The stored value is not validated or normalized, whatever its scheme
    // or shape.
    let (state, store) = common::create_test_state();
    store.insert("weird", "ftp://files.example.com/a%20b?x=1&y=2");

    let server = TestServer::new(redirect_router(state)).unwrap();

    let response = server.get("/weird").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(
        response.header("location"),
        "ftp://files.example.com/a%20b?x=1&y=2"
    );
}

#[tokio::test]
async fn test_redirect_percent_decoded_key() {
    let (state, store) = common::create_test_state();
    store.insert("café", "https://example.com/latte");

    let server = TestServer::new(redirect_router(state)).unwrap();

    let response = server.get("/caf%C3%A9").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/latte");
}

#[tokio::test]
async fn test_redirect_store_failure_returns_500() {
    let mut store = MockStore::new();
    store
        .expect_get()
        .returning(|_| Err(StoreError::Operation("connection reset".to_string())));

    let state = common::create_test_state_with(Arc::new(store));
    let server = TestServer::new(redirect_router(state)).unwrap();

    let response = server.get("/abc123").await;

    assert_eq!(response.status_code(), 500);

    // Generic body only; the transport error is not leaked.
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
    assert!(
        !response.text().contains("connection reset"),
        "store error detail must not reach the client"
    );
}

#[tokio::test]
async fn test_router_normalizes_trailing_slash() {
    let (state, store) = common::create_test_state();
    store.insert("abc123", "https://example.com/page");

    let app = app_router(state);
    let server =
        TestServer::new(axum::ServiceExt::<Request>::into_make_service(app)).unwrap();

    let response = server.get("/abc123/").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/page");
}

#[tokio::test]
async fn test_health_route_takes_precedence_over_redirect() {
    // "health" cannot be used as a short key; the literal route wins.
    let (state, store) = common::create_test_state();
    store.insert("health", "https://example.com/should-not-redirect");

    let app = app_router(state);
    let server =
        TestServer::new(axum::ServiceExt::<Request>::into_make_service(app)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
}
