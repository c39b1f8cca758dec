// ABOUTME: Integration tests for the legacy section-config blob routes
// ABOUTME: Covers the default document, upsert semantics, and change broadcasts
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

mod common;

use http::StatusCode;
use serde_json::json;
use tokio::sync::mpsc;

#[tokio::test]
async fn test_get_without_stored_row_returns_default_document() {
    let resources = common::create_test_resources().await.unwrap();
    let router = common::test_router(&resources);

    let (status, body) =
        common::send_request(&router, "GET", "/api/section-config", None, None).await;
    assert_eq!(status, StatusCode::OK);
    // Default document is served with the sentinel id 0
    assert_eq!(body["id"], 0);
    assert!(body["config"]["hero"]["title"].is_string());
    assert!(body["config"]["about"]["title"].is_string());
}

#[tokio::test]
async fn test_upsert_then_get_returns_stored_document() {
    let resources = common::create_test_resources().await.unwrap();
    let router = common::test_router(&resources);
    let token = common::admin_token(&resources);

    let document = json!({"hero": {"title": "Custom Title"}});
    let (status, stored) = common::send_request(
        &router,
        "POST",
        "/api/section-config",
        Some(&token),
        Some(json!({"config": document})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(stored["id"].as_i64().unwrap() > 0);

    let (_, fetched) =
        common::send_request(&router, "GET", "/api/section-config", None, None).await;
    assert_eq!(fetched["config"]["hero"]["title"], "Custom Title");

    // A second write replaces the single row instead of adding one
    let (status, replaced) = common::send_request(
        &router,
        "POST",
        "/api/section-config",
        Some(&token),
        Some(json!({"config": {"hero": {"title": "Replaced"}}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(replaced["id"], stored["id"]);

    let (_, fetched) =
        common::send_request(&router, "GET", "/api/section-config", None, None).await;
    assert_eq!(fetched["config"]["hero"]["title"], "Replaced");
}

#[tokio::test]
async fn test_upsert_requires_admin_token() {
    let resources = common::create_test_resources().await.unwrap();
    let router = common::test_router(&resources);

    let (status, _) = common::send_request(
        &router,
        "POST",
        "/api/section-config",
        None,
        Some(json!({"config": {}})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_config_write_broadcasts_to_subscribers() {
    let resources = common::create_test_resources().await.unwrap();
    let router = common::test_router(&resources);
    let token = common::admin_token(&resources);

    let (tx, mut rx) = mpsc::unbounded_channel();
    resources.notifier.register(tx).await;

    let (status, _) = common::send_request(
        &router,
        "POST",
        "/api/section-config",
        Some(&token),
        Some(json!({"config": {"hero": {"title": "T"}}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let message = rx.recv().await.unwrap();
    let axum::extract::ws::Message::Text(text) = message else {
        panic!("expected text frame");
    };
    let event: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(event["type"], "section_config_updated");
    assert!(event["message"].as_str().unwrap().contains("created"));
    assert!(event["timestamp"].is_string());

    // A second write reports an update rather than a creation
    let (_, _) = common::send_request(
        &router,
        "POST",
        "/api/section-config",
        Some(&token),
        Some(json!({"config": {"hero": {"title": "U"}}})),
    )
    .await;
    let axum::extract::ws::Message::Text(text) = rx.recv().await.unwrap() else {
        panic!("expected text frame");
    };
    let event: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(event["message"].as_str().unwrap().contains("updated"));
}

#[tokio::test]
async fn test_notify_test_endpoint_broadcasts() {
    let resources = common::create_test_resources().await.unwrap();
    let router = common::test_router(&resources);
    let token = common::admin_token(&resources);

    let (tx, mut rx) = mpsc::unbounded_channel();
    resources.notifier.register(tx).await;

    let (status, body) =
        common::send_request(&router, "POST", "/api/notify/test", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Test message broadcasted");

    let axum::extract::ws::Message::Text(text) = rx.recv().await.unwrap() else {
        panic!("expected text frame");
    };
    let event: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(event["type"], "test");
}
