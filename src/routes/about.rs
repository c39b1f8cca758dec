// ABOUTME: About-blurb route handlers
// ABOUTME: Public ordered listing plus admin CRUD and bulk reordering
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! About-section routes

use crate::errors::AppError;
use crate::models::{About, AboutCreate, AboutUpdate, OrderUpdate};
use crate::server::ServerResources;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use std::sync::Arc;

/// About routes implementation
pub struct AboutRoutes;

impl AboutRoutes {
    /// Create all about routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/about", get(Self::list).post(Self::create))
            .route("/api/about/order", put(Self::reorder))
            .route("/api/about/:id", put(Self::update).delete(Self::delete))
            .route("/api/admin/about", get(Self::admin_list))
            .with_state(resources)
    }

    /// List active about blurbs in display order
    async fn list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<Vec<About>>, AppError> {
        Ok(Json(resources.database.list_active_about().await?))
    }

    /// Create a new about blurb
    async fn create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<AboutCreate>,
    ) -> Result<Response, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        let about = resources.database.create_about(&request).await?;
        Ok((StatusCode::CREATED, Json(about)).into_response())
    }

    /// Apply a partial update to an about blurb
    async fn update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        headers: HeaderMap,
        Json(request): Json<AboutUpdate>,
    ) -> Result<Json<About>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        let about = resources
            .database
            .update_about(id, &request)
            .await?
            .ok_or_else(|| AppError::not_found("About item"))?;
        Ok(Json(about))
    }

    /// Delete an about blurb
    async fn delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        headers: HeaderMap,
    ) -> Result<Json<serde_json::Value>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        if resources.database.delete_about(id).await? {
            Ok(Json(serde_json::json!({"message": "About item deleted"})))
        } else {
            Err(AppError::not_found("About item"))
        }
    }

    /// Bulk-update display order; unknown ids are skipped
    async fn reorder(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(updates): Json<Vec<OrderUpdate>>,
    ) -> Result<Json<Vec<About>>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        Ok(Json(resources.database.set_about_order(&updates).await?))
    }

    /// List all about blurbs regardless of activation (admin)
    async fn admin_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Json<Vec<About>>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        Ok(Json(resources.database.list_all_about().await?))
    }
}
