//! Durable backend round-trip tests
//!
//! A restart is simulated by dropping the whole application state and
//! rebuilding it from the same store document.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::path::Path;
use tower::ServiceExt;

use roster_core::{router, AppState, ServerConfig, StorageConfig};

async fn durable_app(path: &Path) -> Router {
    let config = ServerConfig {
        port: ServerConfig::DEFAULT_PORT,
        storage: StorageConfig::Durable(path.to_path_buf()),
    };
    router(AppState::from_config(&config).await.unwrap())
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn records_survive_a_restart_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    let names = ["Ada", "Bea", "Cal", "Dee", "Eli"];

    let first_run: Vec<Value> = {
        let app = durable_app(&path).await;
        let mut created = Vec::new();
        for name in names {
            let (status, record) = send(
                &app,
                "POST",
                "/entity",
                Some(json!({"name": name, "otherField": 1})),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            created.push(record);
        }
        send(&app, "POST", "/hobby", Some(json!({"name": "chess"}))).await;
        created
    };

    let app = durable_app(&path).await;
    let (status, listed) = send(&app, "GET", "/entity", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap(), &first_run);

    let (_, hobbies) = send(&app, "GET", "/hobby", None).await;
    assert_eq!(hobbies.as_array().unwrap().len(), 1);
    assert_eq!(hobbies[0]["name"], "chess");
}

#[tokio::test]
async fn ids_keep_growing_after_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let max_id = {
        let app = durable_app(&path).await;
        let mut max_id = 0;
        for _ in 0..3 {
            let (_, record) = send(
                &app,
                "POST",
                "/entity",
                Some(json!({"name": "Ada", "otherField": 1})),
            )
            .await;
            max_id = max_id.max(record["id"].as_i64().unwrap());
        }
        max_id
    };

    let app = durable_app(&path).await;
    let (_, record) = send(
        &app,
        "POST",
        "/entity",
        Some(json!({"name": "Bea", "otherField": 2})),
    )
    .await;
    assert!(record["id"].as_i64().unwrap() > max_id);
}

#[tokio::test]
async fn mutations_are_on_disk_before_the_response() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let app = durable_app(&path).await;
    let (_, created) = send(
        &app,
        "POST",
        "/entity",
        Some(json!({"name": "Ada", "otherField": 1})),
    )
    .await;

    // read the document directly, no restart involved
    let on_disk: Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk["entities"][0], created);

    let id = created["id"].as_i64().unwrap();
    send(&app, "DELETE", &format!("/entity/{id}"), None).await;

    let on_disk: Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk["entities"], json!([]));
}

#[tokio::test]
async fn deletes_and_updates_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let kept_id = {
        let app = durable_app(&path).await;
        let (_, first) = send(
            &app,
            "POST",
            "/entity",
            Some(json!({"name": "Ada", "otherField": 1})),
        )
        .await;
        let (_, second) = send(
            &app,
            "POST",
            "/entity",
            Some(json!({"name": "Bea", "otherField": 2})),
        )
        .await;

        let first_id = first["id"].as_i64().unwrap();
        let second_id = second["id"].as_i64().unwrap();
        send(&app, "DELETE", &format!("/entity/{first_id}"), None).await;
        send(
            &app,
            "PUT",
            &format!("/entity/{second_id}"),
            Some(json!({"name": "Cle", "otherField": 9})),
        )
        .await;
        second_id
    };

    let app = durable_app(&path).await;
    let (_, listed) = send(&app, "GET", "/entity", None).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"].as_i64().unwrap(), kept_id);
    assert_eq!(listed[0]["name"], "Cle");
    assert_eq!(listed[0]["otherField"], 9);
}
