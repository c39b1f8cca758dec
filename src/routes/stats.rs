// ABOUTME: Headline statistic route handlers
// ABOUTME: Public ordered listing plus admin CRUD
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Stat routes

use crate::errors::AppError;
use crate::models::{Stat, StatCreate, StatUpdate};
use crate::server::ServerResources;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use std::sync::Arc;

/// Stat routes implementation
pub struct StatRoutes;

impl StatRoutes {
    /// Create all stat routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/stats", get(Self::list).post(Self::create))
            .route("/api/stats/:id", put(Self::update).delete(Self::delete))
            .route("/api/admin/stats", get(Self::admin_list))
            .with_state(resources)
    }

    /// List active stats in display order
    async fn list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<Vec<Stat>>, AppError> {
        Ok(Json(resources.database.list_active_stats().await?))
    }

    /// Create a new stat
    async fn create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<StatCreate>,
    ) -> Result<Response, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        let stat = resources.database.create_stat(&request).await?;
        Ok((StatusCode::CREATED, Json(stat)).into_response())
    }

    /// Apply a partial update to a stat
    async fn update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        headers: HeaderMap,
        Json(request): Json<StatUpdate>,
    ) -> Result<Json<Stat>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        let stat = resources
            .database
            .update_stat(id, &request)
            .await?
            .ok_or_else(|| AppError::not_found("Stat"))?;
        Ok(Json(stat))
    }

    /// Delete a stat
    async fn delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        headers: HeaderMap,
    ) -> Result<Json<serde_json::Value>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        if resources.database.delete_stat(id).await? {
            Ok(Json(serde_json::json!({"message": "Stat deleted"})))
        } else {
            Err(AppError::not_found("Stat"))
        }
    }

    /// List all stats regardless of activation (admin)
    async fn admin_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Json<Vec<Stat>>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        Ok(Json(resources.database.list_all_stats().await?))
    }
}
