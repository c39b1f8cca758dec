// ABOUTME: Hero banner route handlers
// ABOUTME: Serves the active hero and enforces the single-active invariant on create
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Hero banner routes
//!
//! The hero is singleton-active: creating a new active hero deactivates the
//! previously active row, so at most one hero is displayed at a time.

use crate::errors::AppError;
use crate::models::{Hero, HeroCreate, HeroUpdate};
use crate::server::ServerResources;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use std::sync::Arc;

/// Hero banner routes implementation
pub struct HeroRoutes;

impl HeroRoutes {
    /// Create all hero routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/hero", get(Self::get_active).post(Self::create))
            .route("/api/hero/:id", put(Self::update).delete(Self::delete))
            .route("/api/admin/hero", get(Self::admin_list))
            .with_state(resources)
    }

    /// Get the active hero content
    async fn get_active(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<Hero>, AppError> {
        let hero = resources
            .database
            .get_active_hero()
            .await?
            .ok_or_else(|| AppError::not_found("Hero content"))?;
        Ok(Json(hero))
    }

    /// Create new hero content, deactivating the previously active row
    async fn create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<HeroCreate>,
    ) -> Result<Response, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        let hero = resources.database.create_hero(&request).await?;
        Ok((StatusCode::CREATED, Json(hero)).into_response())
    }

    /// Apply a partial update to hero content
    async fn update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        headers: HeaderMap,
        Json(request): Json<HeroUpdate>,
    ) -> Result<Json<Hero>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        let hero = resources
            .database
            .update_hero(id, &request)
            .await?
            .ok_or_else(|| AppError::not_found("Hero content"))?;
        Ok(Json(hero))
    }

    /// Delete hero content
    async fn delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        headers: HeaderMap,
    ) -> Result<Json<serde_json::Value>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        if resources.database.delete_hero(id).await? {
            Ok(Json(serde_json::json!({"message": "Hero content deleted"})))
        } else {
            Err(AppError::not_found("Hero content"))
        }
    }

    /// List every hero row, active or not (admin)
    async fn admin_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Json<Vec<Hero>>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        Ok(Json(resources.database.list_all_heroes().await?))
    }
}
