// ABOUTME: Skill group route handlers
// ABOUTME: Public ordered listing plus admin CRUD
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Skill group routes

use crate::errors::AppError;
use crate::models::{SkillGroup, SkillGroupCreate, SkillGroupUpdate};
use crate::server::ServerResources;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use std::sync::Arc;

/// Skill group routes implementation
pub struct SkillRoutes;

impl SkillRoutes {
    /// Create all skill routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/skills", get(Self::list).post(Self::create))
            .route("/api/skills/:id", put(Self::update).delete(Self::delete))
            .route("/api/admin/skills", get(Self::admin_list))
            .with_state(resources)
    }

    /// List active skill groups in display order
    async fn list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<Vec<SkillGroup>>, AppError> {
        Ok(Json(resources.database.list_active_skill_groups().await?))
    }

    /// Create a new skill group
    async fn create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<SkillGroupCreate>,
    ) -> Result<Response, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        let group = resources.database.create_skill_group(&request).await?;
        Ok((StatusCode::CREATED, Json(group)).into_response())
    }

    /// Apply a partial update to a skill group
    async fn update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        headers: HeaderMap,
        Json(request): Json<SkillGroupUpdate>,
    ) -> Result<Json<SkillGroup>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        let group = resources
            .database
            .update_skill_group(id, &request)
            .await?
            .ok_or_else(|| AppError::not_found("Skill"))?;
        Ok(Json(group))
    }

    /// Delete a skill group
    async fn delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        headers: HeaderMap,
    ) -> Result<Json<serde_json::Value>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        if resources.database.delete_skill_group(id).await? {
            Ok(Json(serde_json::json!({"message": "Skill deleted"})))
        } else {
            Err(AppError::not_found("Skill"))
        }
    }

    /// List all skill groups regardless of activation (admin)
    async fn admin_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Json<Vec<SkillGroup>>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        Ok(Json(resources.database.list_all_skill_groups().await?))
    }
}
