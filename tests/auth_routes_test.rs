// ABOUTME: Integration tests for admin login and bearer-token enforcement
// ABOUTME: Exercises the form-encoded login flow and token usage end to end
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

mod common;

use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

async fn login(
    router: &axum::Router,
    username: &str,
    password: &str,
) -> (StatusCode, serde_json::Value) {
    let body = serde_urlencoded::to_string([("username", username), ("password", password)])
        .unwrap();
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_login_with_correct_credentials_returns_bearer_token() {
    let resources = common::create_test_resources().await.unwrap();
    let router = common::test_router(&resources);

    // Default test config uses admin/admin
    let (status, body) = login(&router, "admin", "admin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "bearer");

    let token = body["access_token"].as_str().unwrap().to_owned();
    assert!(!token.is_empty());

    // The issued token authorizes a mutating route
    let (status, _) = common::send_request(
        &router,
        "POST",
        "/api/awards",
        Some(&token),
        Some(json!({"title": "Best PM", "organization": "Org", "year": "2023"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_login_with_wrong_credentials_is_401() {
    let resources = common::create_test_resources().await.unwrap();
    let router = common::test_router(&resources);

    let (status, body) = login(&router, "admin", "wrong-password").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "AUTH_INVALID");

    let (status, _) = login(&router, "intruder", "admin").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_public_reads_need_no_token() {
    let resources = common::create_test_resources().await.unwrap();
    let router = common::test_router(&resources);

    for path in [
        "/",
        "/health",
        "/api/about",
        "/api/experiences",
        "/api/stats",
        "/api/testimonials",
        "/api/projects",
        "/api/contact-info",
        "/api/awards",
        "/api/education",
        "/api/certifications",
        "/api/skills",
        "/api/section-titles",
        "/api/section-config",
    ] {
        let (status, _) = common::send_request(&router, "GET", path, None, None).await;
        assert_eq!(status, StatusCode::OK, "expected 200 for {path}");
    }
}
