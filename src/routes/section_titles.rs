// ABOUTME: Section title route handlers for typed per-section configuration
// ABOUTME: Public listing and by-name lookup plus admin CRUD
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Section title routes
//!
//! Section titles are the typed replacement for the legacy section-config
//! blob; a row exists per section key (hero, about, stats, ...). The
//! by-name lookup shares its path with the mutating id routes, so the
//! lookup handler takes the raw segment while update/delete parse it as a
//! numeric id.

use crate::errors::AppError;
use crate::models::{SectionTitle, SectionTitleCreate, SectionTitleUpdate};
use crate::server::ServerResources;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Section title routes implementation
pub struct SectionTitleRoutes;

impl SectionTitleRoutes {
    /// Create all section title routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/section-titles",
                get(Self::list).post(Self::create),
            )
            .route(
                "/api/section-titles/:section_name",
                get(Self::get_by_name).put(Self::update).delete(Self::delete),
            )
            .route("/api/admin/section-titles", get(Self::admin_list))
            .with_state(resources)
    }

    /// List active section titles in display order
    async fn list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<Vec<SectionTitle>>, AppError> {
        Ok(Json(resources.database.list_active_section_titles().await?))
    }

    /// Get the active section title for one section key
    async fn get_by_name(
        State(resources): State<Arc<ServerResources>>,
        Path(section_name): Path<String>,
    ) -> Result<Json<SectionTitle>, AppError> {
        let section_title = resources
            .database
            .get_section_title_by_name(&section_name)
            .await?
            .ok_or_else(|| AppError::not_found("Section title"))?;
        Ok(Json(section_title))
    }

    /// Create a new section title
    async fn create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<SectionTitleCreate>,
    ) -> Result<Response, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        let section_title = resources.database.create_section_title(&request).await?;
        Ok((StatusCode::CREATED, Json(section_title)).into_response())
    }

    /// Apply a partial update to a section title
    async fn update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        headers: HeaderMap,
        Json(request): Json<SectionTitleUpdate>,
    ) -> Result<Json<SectionTitle>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        let section_title = resources
            .database
            .update_section_title(id, &request)
            .await?
            .ok_or_else(|| AppError::not_found("Section title"))?;
        Ok(Json(section_title))
    }

    /// Delete a section title
    async fn delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        headers: HeaderMap,
    ) -> Result<Json<serde_json::Value>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        if resources.database.delete_section_title(id).await? {
            Ok(Json(serde_json::json!({"message": "Section title deleted"})))
        } else {
            Err(AppError::not_found("Section title"))
        }
    }

    /// List all section titles regardless of activation (admin)
    async fn admin_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Json<Vec<SectionTitle>>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        Ok(Json(resources.database.list_all_section_titles().await?))
    }
}
