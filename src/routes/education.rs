// ABOUTME: Education route handlers
// ABOUTME: Public ordered listing plus admin CRUD
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Education routes

use crate::errors::AppError;
use crate::models::{Education, EducationCreate, EducationUpdate};
use crate::server::ServerResources;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use std::sync::Arc;

/// Education routes implementation
pub struct EducationRoutes;

impl EducationRoutes {
    /// Create all education routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/education", get(Self::list).post(Self::create))
            .route(
                "/api/education/:id",
                put(Self::update).delete(Self::delete),
            )
            .route("/api/admin/education", get(Self::admin_list))
            .with_state(resources)
    }

    /// List active education entries in display order
    async fn list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<Vec<Education>>, AppError> {
        Ok(Json(resources.database.list_active_education().await?))
    }

    /// Create a new education entry
    async fn create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<EducationCreate>,
    ) -> Result<Response, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        let education = resources.database.create_education(&request).await?;
        Ok((StatusCode::CREATED, Json(education)).into_response())
    }

    /// Apply a partial update to an education entry
    async fn update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        headers: HeaderMap,
        Json(request): Json<EducationUpdate>,
    ) -> Result<Json<Education>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        let education = resources
            .database
            .update_education(id, &request)
            .await?
            .ok_or_else(|| AppError::not_found("Education"))?;
        Ok(Json(education))
    }

    /// Delete an education entry
    async fn delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        headers: HeaderMap,
    ) -> Result<Json<serde_json::Value>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        if resources.database.delete_education(id).await? {
            Ok(Json(serde_json::json!({"message": "Education deleted"})))
        } else {
            Err(AppError::not_found("Education"))
        }
    }

    /// List all education entries regardless of activation (admin)
    async fn admin_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Json<Vec<Education>>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        Ok(Json(resources.database.list_all_education().await?))
    }
}
