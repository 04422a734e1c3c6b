//! Runs against a real MySQL when `TEST_DATABASE_URL` is set; otherwise every test returns early.
//! Tables are created in the target database and rows are left behind, so point it at a
//! scratch schema.

mod common;

use axum::http::{Method, StatusCode};
use axum::Router;
use common::send;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wedding_rsvp::config::{CorsSettings, DatabaseSettings};
use tokio::sync::Mutex;
use wedding_rsvp::{app_router, create_pool, ensure_tables, AppState, MySqlStore};

/// Guest tests assert on whole-table counts, so they take turns.
static GUEST_TABLE: Mutex<()> = Mutex::const_new(());

async fn live_router() -> Option<Router> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let settings = DatabaseSettings {
        url: Some(url),
        host: String::new(),
        port: 3306,
        user: String::new(),
        password: String::new(),
        name: String::new(),
        ssl: false,
        max_connections: 2,
        acquire_timeout: Duration::from_secs(10),
    };
    let store = MySqlStore::new(create_pool(&settings).unwrap());
    ensure_tables(&store).await.unwrap();
    Some(app_router(AppState::new(Arc::new(store)), &CorsSettings::default()))
}

#[tokio::test]
async fn guest_lifecycle() {
    let Some(app) = live_router().await else {
        return;
    };
    let _turn = GUEST_TABLE.lock().await;

    let (status, created) = send(
        app.clone(),
        Method::POST,
        "/guests",
        Some(json!({"name": " Integration Guest ", "phone": "0812"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["status"], "pending");
    let id = created["id"].as_u64().unwrap();

    let (status, fetched) = send(app.clone(), Method::GET, &format!("/guests/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Integration Guest");
    assert_eq!(fetched["phone"], "0812");
    assert_eq!(fetched["email"], json!(null));

    let (status, _) = send(
        app.clone(),
        Method::PATCH,
        &format!("/guests/{}", id),
        Some(json!({"status": "confirmed"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, fetched) = send(app.clone(), Method::GET, &format!("/guests/{}", id), None).await;
    assert_eq!(fetched["status"], "confirmed");
    assert_eq!(fetched["name"], "Integration Guest");
    assert_eq!(fetched["phone"], "0812");

    let (status, body) = send(
        app.clone(),
        Method::PATCH,
        &format!("/guests/{}", id),
        Some(json!({"status": "maybe"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());

    let (_, body) = send(app.clone(), Method::DELETE, &format!("/guests/{}", id), None).await;
    assert_eq!(body, json!({"deleted": 1}));
    let (_, body) = send(app.clone(), Method::DELETE, &format!("/guests/{}", id), None).await;
    assert_eq!(body, json!({"deleted": 0}));
    let (status, _) = send(app, Method::GET, &format!("/guests/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn guests_list_newest_first() {
    let Some(app) = live_router().await else {
        return;
    };
    let _turn = GUEST_TABLE.lock().await;

    let (_, before) = send(app.clone(), Method::GET, "/guests", None).await;
    let before = before.as_array().unwrap().len();

    let mut ids = Vec::new();
    for name in ["First", "Second", "Third"] {
        let body = Some(json!({"name": name}));
        let (_, created) = send(app.clone(), Method::POST, "/guests", body).await;
        ids.push(created["id"].as_u64().unwrap());
    }
    let removed = ids.remove(1);
    let (_, body) = send(app.clone(), Method::DELETE, &format!("/guests/{}", removed), None).await;
    assert_eq!(body, json!({"deleted": 1}));

    let (status, list) = send(app.clone(), Method::GET, "/guests", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), before + 2);
    let order: Vec<u64> = list
        .iter()
        .filter_map(|g| g["id"].as_u64())
        .filter(|id| ids.contains(id) || *id == removed)
        .collect();
    assert_eq!(order, vec![ids[1], ids[0]]);

    for id in ids {
        send(app.clone(), Method::DELETE, &format!("/guests/{}", id), None).await;
    }
}

#[tokio::test]
async fn comment_roundtrip() {
    let Some(app) = live_router().await else {
        return;
    };

    let (status, created) = send(
        app.clone(),
        Method::POST,
        "/comments",
        Some(json!({"name": "Rina", "message": "Selamat!", "isPresent": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_u64().unwrap();

    let (_, list) = send(app.clone(), Method::GET, "/comments", None).await;
    let stored = list
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["id"].as_u64() == Some(id))
        .cloned()
        .unwrap();
    for key in ["id", "name", "message", "is_present"] {
        assert_eq!(stored[key], created[key], "{} differs", key);
    }
    assert!(stored["created_at"].is_string());

    let (_, body) = send(app, Method::DELETE, &format!("/comments/{}", id), None).await;
    assert_eq!(body, json!({"deleted": 1}));
}
