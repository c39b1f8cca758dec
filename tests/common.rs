// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides database, resource, and request helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(dead_code)]

//! Shared test utilities for `folio_server` integration tests.

use anyhow::Result;
use axum::body::Body;
use axum::Router;
use folio_server::{
    auth::AuthManager,
    config::environment::ServerConfig,
    database::Database,
    server::{HttpServer, ServerResources},
    uploads::ImageStore,
};
use http::{Request, StatusCode};
use std::sync::{Arc, Once};
use tower::ServiceExt;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup (in-memory SQLite)
pub async fn create_test_database() -> Result<Arc<Database>> {
    init_test_logging();
    let database = Arc::new(Database::new("sqlite::memory:").await?);
    Ok(database)
}

/// Test configuration with an in-memory database and a throwaway upload dir
pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.upload.dir = std::env::temp_dir().join(format!("folio-test-uploads-{}", Uuid::new_v4()));
    // Small bounds keep resize tests fast
    config.upload.max_width = 64;
    config.upload.max_height = 64;
    config
}

/// Create fully wired `ServerResources` over an in-memory database
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    init_test_logging();

    let config = test_config();
    let database = Database::new("sqlite::memory:").await?;
    let auth_manager = AuthManager::from_config(&config.auth)?;
    let image_store = ImageStore::from_config(&config.upload)?;

    Ok(Arc::new(ServerResources::new(
        database,
        auth_manager,
        image_store,
        Arc::new(config),
    )))
}

/// Build the application router for the given resources
pub fn test_router(resources: &Arc<ServerResources>) -> Router {
    HttpServer::router(resources)
}

/// Issue a valid admin bearer token
pub fn admin_token(resources: &Arc<ServerResources>) -> String {
    resources.auth_manager.generate_token("admin").unwrap()
}

/// Send a request with an optional JSON body and bearer token; returns the
/// status and the parsed JSON response body (Null when empty or not JSON).
pub async fn send_request(
    router: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, value)
}

/// Serve the router on an ephemeral port, returning its base URL
pub async fn spawn_test_server(resources: &Arc<ServerResources>) -> String {
    let app = test_router(resources);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}
