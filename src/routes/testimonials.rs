// ABOUTME: Testimonial route handlers
// ABOUTME: Public ordered listing plus admin CRUD
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Testimonial routes

use crate::errors::AppError;
use crate::models::{Testimonial, TestimonialCreate, TestimonialUpdate};
use crate::server::ServerResources;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use std::sync::Arc;

/// Testimonial routes implementation
pub struct TestimonialRoutes;

impl TestimonialRoutes {
    /// Create all testimonial routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/testimonials", get(Self::list).post(Self::create))
            .route(
                "/api/testimonials/:id",
                put(Self::update).delete(Self::delete),
            )
            .route("/api/admin/testimonials", get(Self::admin_list))
            .with_state(resources)
    }

    /// List active testimonials in display order
    async fn list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<Vec<Testimonial>>, AppError> {
        Ok(Json(resources.database.list_active_testimonials().await?))
    }

    /// Create a new testimonial
    async fn create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<TestimonialCreate>,
    ) -> Result<Response, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        let testimonial = resources.database.create_testimonial(&request).await?;
        Ok((StatusCode::CREATED, Json(testimonial)).into_response())
    }

    /// Apply a partial update to a testimonial
    async fn update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        headers: HeaderMap,
        Json(request): Json<TestimonialUpdate>,
    ) -> Result<Json<Testimonial>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        let testimonial = resources
            .database
            .update_testimonial(id, &request)
            .await?
            .ok_or_else(|| AppError::not_found("Testimonial"))?;
        Ok(Json(testimonial))
    }

    /// Delete a testimonial
    async fn delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        headers: HeaderMap,
    ) -> Result<Json<serde_json::Value>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        if resources.database.delete_testimonial(id).await? {
            Ok(Json(serde_json::json!({"message": "Testimonial deleted"})))
        } else {
            Err(AppError::not_found("Testimonial"))
        }
    }

    /// List all testimonials regardless of activation (admin)
    async fn admin_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Json<Vec<Testimonial>>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        Ok(Json(resources.database.list_all_testimonials().await?))
    }
}
