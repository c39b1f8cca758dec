// ABOUTME: Work-experience route handlers
// ABOUTME: Public ordered listing plus admin CRUD
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Experience routes

use crate::errors::AppError;
use crate::models::{Experience, ExperienceCreate, ExperienceUpdate};
use crate::server::ServerResources;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use std::sync::Arc;

/// Experience routes implementation
pub struct ExperienceRoutes;

impl ExperienceRoutes {
    /// Create all experience routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/experiences", get(Self::list).post(Self::create))
            .route(
                "/api/experiences/:id",
                put(Self::update).delete(Self::delete),
            )
            .route("/api/admin/experiences", get(Self::admin_list))
            .with_state(resources)
    }

    /// List active experiences in display order
    async fn list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<Vec<Experience>>, AppError> {
        Ok(Json(resources.database.list_active_experiences().await?))
    }

    /// Create a new experience entry
    async fn create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<ExperienceCreate>,
    ) -> Result<Response, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        let experience = resources.database.create_experience(&request).await?;
        Ok((StatusCode::CREATED, Json(experience)).into_response())
    }

    /// Apply a partial update to an experience entry
    async fn update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        headers: HeaderMap,
        Json(request): Json<ExperienceUpdate>,
    ) -> Result<Json<Experience>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        let experience = resources
            .database
            .update_experience(id, &request)
            .await?
            .ok_or_else(|| AppError::not_found("Experience"))?;
        Ok(Json(experience))
    }

    /// Delete an experience entry
    async fn delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        headers: HeaderMap,
    ) -> Result<Json<serde_json::Value>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        if resources.database.delete_experience(id).await? {
            Ok(Json(serde_json::json!({"message": "Experience deleted"})))
        } else {
            Err(AppError::not_found("Experience"))
        }
    }

    /// List all experiences regardless of activation (admin)
    async fn admin_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Json<Vec<Experience>>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        Ok(Json(resources.database.list_all_experiences().await?))
    }
}
