//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycles through the cached user service.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use read_through::{api::create_router, cache::SharedStore, AppState, CacheStore, Config};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app(store: SharedStore) -> Router {
    let state = AppState::from_config(&Config::default(), store).unwrap();
    create_router(state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// == User Endpoint Tests ==

#[tokio::test]
async fn test_user_by_id_success() {
    let app = create_test_app(SharedStore::new());

    let (status, json) = get(&app, "/users/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Ada");
    assert_eq!(json["team"], "core");
}

#[tokio::test]
async fn test_user_by_id_served_from_cache() {
    let store = SharedStore::new();
    let app = create_test_app(store.clone());

    let (_, first) = get(&app, "/users/3").await;
    let (_, second) = get(&app, "/users/3").await;
    assert_eq!(first, second);

    let (_, stats) = get(&app, "/stats").await;
    assert_eq!(stats["repository_lookups"].as_u64().unwrap(), 1);
    assert_eq!(stats["hits"].as_u64().unwrap(), 1);
    assert_eq!(stats["misses"].as_u64().unwrap(), 1);
    assert_eq!(stats["writes"].as_u64().unwrap(), 1);
    assert!(store.get("user:3").await.unwrap().is_some());
}

#[tokio::test]
async fn test_cached_entry_is_returned_verbatim() {
    let store = SharedStore::new();
    let app = create_test_app(store.clone());

    // a value placed by another writer is trusted as-is
    let planted = r#"{"id":9,"name":"Planted","team":"x","email":"p@example.com","created_at":"2024-03-08T21:08:14Z"}"#;
    store
        .set("user:9", planted.to_string(), 1, read_through::TimeUnit::Minutes)
        .await
        .unwrap();

    let (status, json) = get(&app, "/users/9").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Planted");
}

#[tokio::test]
async fn test_user_not_found_is_tombstoned() {
    let store = SharedStore::new();
    let app = create_test_app(store.clone());

    let (status, json) = get(&app, "/users/404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("user:404"));

    let (status, _) = get(&app, "/users/404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, stats) = get(&app, "/stats").await;
    assert_eq!(stats["repository_lookups"].as_u64().unwrap(), 1);
    assert_eq!(store.get("user:404").await.unwrap().as_deref(), Some(" "));
}

#[tokio::test]
async fn test_failed_lookup_is_not_found() {
    let app = create_test_app(SharedStore::new());

    // beyond MAX_USER_ID the repository errors; callers only see "not found"
    let (status, json) = get(&app, "/users/5000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!json["error"].as_str().unwrap().contains("out of range"));
}

#[tokio::test]
async fn test_corrupt_entry_is_server_error() {
    let store = SharedStore::new();
    let app = create_test_app(store.clone());
    store
        .set("user:2", "{broken".to_string(), 1, read_through::TimeUnit::Minutes)
        .await
        .unwrap();

    let (status, _) = get(&app, "/users/2").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    // the entry is left in place
    assert_eq!(store.get("user:2").await.unwrap().as_deref(), Some("{broken"));
}

#[tokio::test]
async fn test_user_search() {
    let store = SharedStore::new();
    let app = create_test_app(store.clone());

    let (status, json) = get(&app, "/users/search?team=ops&name=Barbara").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 4);
    assert!(store.get("ops:Barbara").await.unwrap().is_some());
}

#[tokio::test]
async fn test_user_search_missing_param() {
    let app = create_test_app(SharedStore::new());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/users/search?team=ops")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// == HEALTH Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app(SharedStore::new());

    let (status, json) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}
