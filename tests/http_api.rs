use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
};
use async_trait::async_trait;
use serde_json::{json, Value};
use tower::ServiceExt;

use rolodex::server::{build_router, AppState};
use rolodex::{JsonStore, MemoryStore, Roster, SeedSource, UserRecord};

struct StaticSeed(Vec<UserRecord>);

#[async_trait]
impl SeedSource for StaticSeed {
    async fn fetch(&self) -> anyhow::Result<Roster> {
        Ok(Roster::from_users(self.0.clone()))
    }
}

fn seed_users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: 1,
            name: "Leanne Graham".into(),
            username: "Bret".into(),
            email: "Sincere@april.biz".into(),
            ..UserRecord::default()
        },
        UserRecord {
            id: 2,
            name: "Ervin Howell".into(),
            username: "Antonette".into(),
            email: "Shanna@melissa.tv".into(),
            ..UserRecord::default()
        },
        UserRecord {
            id: 5,
            name: "Chelsey Dietrich".into(),
            username: "Kamren".into(),
            email: "Lucio_Hettinger@annie.ca".into(),
            phone: "(254)954-1289".into(),
            ..UserRecord::default()
        },
    ]
}

fn app() -> axum::Router {
    let store = MemoryStore::with_users(seed_users());
    build_router(AppState::new(store, StaticSeed(seed_users())))
}

async fn send_json(
    app: &axum::Router,
    method: Method,
    uri: &str,
    payload: Value,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request should build");

    let response = app.clone().oneshot(request).await.expect("response expected");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body should be readable");

    if body.is_empty() {
        return (status, Value::Null);
    }
    let json = serde_json::from_slice::<Value>(&body).expect("body should be valid JSON");
    (status, json)
}

async fn send_empty(app: &axum::Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");

    let response = app.clone().oneshot(request).await.expect("response expected");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body should be readable");

    if body.is_empty() {
        return (status, Value::Null);
    }
    let json = serde_json::from_slice::<Value>(&body).expect("body should be valid JSON");
    (status, json)
}

async fn collection_len(app: &axum::Router) -> usize {
    let (status, users) = send_empty(app, Method::GET, "/users").await;
    assert_eq!(status, StatusCode::OK);
    users.as_array().expect("collection should be an array").len()
}

#[tokio::test]
async fn create_then_fetch_returns_same_fields() {
    let app = app();

    let (status, created) = send_json(
        &app,
        Method::POST,
        "/ujuser",
        json!({
            "id": 11,
            "name": "Glenna Reichert",
            "username": "Delphine",
            "email": "Chaim_McDermott@dana.io"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 11);

    let (status, fetched) = send_empty(&app, Method::GET, "/users/11").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Glenna Reichert");
    assert_eq!(fetched["username"], "Delphine");
    assert_eq!(fetched["email"], "Chaim_McDermott@dana.io");
}

#[tokio::test]
async fn create_with_duplicate_id_is_rejected() {
    let app = app();
    let before = collection_len(&app).await;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/ujuser",
        json!({"id": 2, "name": "Ervin Again"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("already exists"));
    assert_eq!(collection_len(&app).await, before);

    let (_, untouched) = send_empty(&app, Method::GET, "/users/2").await;
    assert_eq!(untouched["name"], "Ervin Howell");
}

#[tokio::test]
async fn create_without_id_is_rejected() {
    let app = app();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/ujuser",
        json!({"name": "Nameless"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "user id is required");
}

#[tokio::test]
async fn update_then_fetch_returns_submitted_fields() {
    let app = app();

    let (status, updated) = send_json(
        &app,
        Method::PUT,
        "/users/5",
        json!({"id": 5, "name": "X", "username": "Y", "email": "Z"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "X");

    let (status, fetched) = send_empty(&app, Method::GET, "/users/5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "X");
    assert_eq!(fetched["username"], "Y");
    assert_eq!(fetched["email"], "Z");
    // Replacement semantics: omitted fields come back empty.
    assert_eq!(fetched["phone"], "");
}

#[tokio::test]
async fn update_forces_id_from_path() {
    let app = app();

    let (status, updated) = send_json(
        &app,
        Method::PUT,
        "/users/2",
        json!({"id": 99, "name": "Renamed"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], 2);

    let (status, _) = send_empty(&app, Method::GET, "/users/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, fetched) = send_empty(&app, Method::GET, "/users/2").await;
    assert_eq!(fetched["name"], "Renamed");
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let app = app();

    let (status, _) = send_json(
        &app,
        Method::PUT,
        "/users/42",
        json!({"id": 42, "name": "Nobody"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_nonexistent_id_leaves_collection_alone() {
    let app = app();
    let before = collection_len(&app).await;

    let (status, _) = send_empty(&app, Method::DELETE, "/delete/42").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(collection_len(&app).await, before);
}

#[tokio::test]
async fn delete_existing_id_shrinks_collection_by_one() {
    let app = app();
    let before = collection_len(&app).await;

    let (status, body) = send_empty(&app, Method::DELETE, "/delete/1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("deleted"));
    assert_eq!(collection_len(&app).await, before - 1);

    let (status, _) = send_empty(&app, Method::GET, "/users/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reset_restores_seed_collection() {
    let app = app();

    // Drift away from the seed first.
    let (status, _) = send_empty(&app, Method::DELETE, "/delete/1").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send_json(&app, Method::POST, "/ujuser", json!({"id": 30, "name": "Drift"})).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send_empty(&app, Method::POST, "/reset").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("seed"));

    let (status, users) = send_empty(&app, Method::GET, "/users").await;
    assert_eq!(status, StatusCode::OK);
    let restored: Vec<UserRecord> = serde_json::from_value(users).unwrap();
    assert_eq!(restored, seed_users());
}

#[tokio::test]
async fn index_renders_html_listing() {
    let app = app();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("text/html"));

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Leanne Graham"));
    assert!(html.contains("Ervin Howell"));
}

#[tokio::test]
async fn unreadable_store_surfaces_as_internal_error() {
    // A JsonStore pointed at a directory cannot be read as a file.
    let dir = tempfile::TempDir::new().unwrap();
    let store = JsonStore::new(dir.path());
    let app = build_router(AppState::new(store, StaticSeed(vec![])));

    let (status, body) = send_empty(&app, Method::GET, "/users").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal server error");
}
