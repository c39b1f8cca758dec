// ABOUTME: Award route handlers
// ABOUTME: Public ordered listing plus admin CRUD
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Award routes

use crate::errors::AppError;
use crate::models::{Award, AwardCreate, AwardUpdate};
use crate::server::ServerResources;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use std::sync::Arc;

/// Award routes implementation
pub struct AwardRoutes;

impl AwardRoutes {
    /// Create all award routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/awards", get(Self::list).post(Self::create))
            .route("/api/awards/:id", put(Self::update).delete(Self::delete))
            .route("/api/admin/awards", get(Self::admin_list))
            .with_state(resources)
    }

    /// List active awards in display order
    async fn list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<Vec<Award>>, AppError> {
        Ok(Json(resources.database.list_active_awards().await?))
    }

    /// Create a new award
    async fn create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<AwardCreate>,
    ) -> Result<Response, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        let award = resources.database.create_award(&request).await?;
        Ok((StatusCode::CREATED, Json(award)).into_response())
    }

    /// Apply a partial update to an award
    async fn update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        headers: HeaderMap,
        Json(request): Json<AwardUpdate>,
    ) -> Result<Json<Award>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        let award = resources
            .database
            .update_award(id, &request)
            .await?
            .ok_or_else(|| AppError::not_found("Award"))?;
        Ok(Json(award))
    }

    /// Delete an award
    async fn delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        headers: HeaderMap,
    ) -> Result<Json<serde_json::Value>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        if resources.database.delete_award(id).await? {
            Ok(Json(serde_json::json!({"message": "Award deleted"})))
        } else {
            Err(AppError::not_found("Award"))
        }
    }

    /// List all awards regardless of activation (admin)
    async fn admin_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Json<Vec<Award>>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        Ok(Json(resources.database.list_all_awards().await?))
    }
}
