// ABOUTME: Project route handlers with category filtering
// ABOUTME: Public ordered listing plus admin CRUD
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Project routes
//!
//! `GET /api/projects/{category}` shares its path with the mutating id
//! routes; the category handler takes the raw segment while update/delete
//! parse it as a numeric id (non-numeric ids reject with 400).

use crate::errors::AppError;
use crate::models::{Project, ProjectCreate, ProjectUpdate};
use crate::server::ServerResources;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Project routes implementation
pub struct ProjectRoutes;

impl ProjectRoutes {
    /// Create all project routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/projects", get(Self::list).post(Self::create))
            .route(
                "/api/projects/:category",
                get(Self::list_by_category)
                    .put(Self::update)
                    .delete(Self::delete),
            )
            .route("/api/admin/projects", get(Self::admin_list))
            .with_state(resources)
    }

    /// List all active projects in display order
    async fn list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<Vec<Project>>, AppError> {
        Ok(Json(resources.database.list_active_projects().await?))
    }

    /// List active projects in one category
    async fn list_by_category(
        State(resources): State<Arc<ServerResources>>,
        Path(category): Path<String>,
    ) -> Result<Json<Vec<Project>>, AppError> {
        Ok(Json(
            resources
                .database
                .list_projects_by_category(&category)
                .await?,
        ))
    }

    /// Create a new project
    async fn create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<ProjectCreate>,
    ) -> Result<Response, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        let project = resources.database.create_project(&request).await?;
        Ok((StatusCode::CREATED, Json(project)).into_response())
    }

    /// Apply a partial update to a project
    async fn update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        headers: HeaderMap,
        Json(request): Json<ProjectUpdate>,
    ) -> Result<Json<Project>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        let project = resources
            .database
            .update_project(id, &request)
            .await?
            .ok_or_else(|| AppError::not_found("Project"))?;
        Ok(Json(project))
    }

    /// Delete a project
    async fn delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        headers: HeaderMap,
    ) -> Result<Json<serde_json::Value>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        if resources.database.delete_project(id).await? {
            Ok(Json(serde_json::json!({"message": "Project deleted"})))
        } else {
            Err(AppError::not_found("Project"))
        }
    }

    /// List all projects regardless of activation (admin)
    async fn admin_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Json<Vec<Project>>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        Ok(Json(resources.database.list_all_projects().await?))
    }
}
