// ABOUTME: Certification route handlers
// ABOUTME: Public ordered listing plus admin CRUD
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Certification routes

use crate::errors::AppError;
use crate::models::{Certification, CertificationCreate, CertificationUpdate};
use crate::server::ServerResources;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use std::sync::Arc;

/// Certification routes implementation
pub struct CertificationRoutes;

impl CertificationRoutes {
    /// Create all certification routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/certifications", get(Self::list).post(Self::create))
            .route(
                "/api/certifications/:id",
                put(Self::update).delete(Self::delete),
            )
            .route("/api/admin/certifications", get(Self::admin_list))
            .with_state(resources)
    }

    /// List active certifications in display order
    async fn list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<Vec<Certification>>, AppError> {
        Ok(Json(
            resources.database.list_active_certifications().await?,
        ))
    }

    /// Create a new certification
    async fn create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<CertificationCreate>,
    ) -> Result<Response, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        let certification = resources.database.create_certification(&request).await?;
        Ok((StatusCode::CREATED, Json(certification)).into_response())
    }

    /// Apply a partial update to a certification
    async fn update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        headers: HeaderMap,
        Json(request): Json<CertificationUpdate>,
    ) -> Result<Json<Certification>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        let certification = resources
            .database
            .update_certification(id, &request)
            .await?
            .ok_or_else(|| AppError::not_found("Certification"))?;
        Ok(Json(certification))
    }

    /// Delete a certification
    async fn delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        headers: HeaderMap,
    ) -> Result<Json<serde_json::Value>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        if resources.database.delete_certification(id).await? {
            Ok(Json(serde_json::json!({"message": "Certification deleted"})))
        } else {
            Err(AppError::not_found("Certification"))
        }
    }

    /// List all certifications regardless of activation (admin)
    async fn admin_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Json<Vec<Certification>>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        Ok(Json(resources.database.list_all_certifications().await?))
    }
}
