// ABOUTME: Contact-form intake and contact-channel route handlers
// ABOUTME: Public form submission and channel listing, admin management
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Contact routes
//!
//! Two resource families live here: the public contact-form intake with its
//! admin-only listing, and the contact channels (email, phone, profile
//! links) shown in the footer.

use crate::errors::AppError;
use crate::models::{ContactForm, ContactInfo, ContactInfoCreate, ContactInfoUpdate, ContactMessage};
use crate::server::ServerResources;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use std::sync::Arc;

/// Contact routes implementation
pub struct ContactRoutes;

impl ContactRoutes {
    /// Create all contact routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/contact", post(Self::submit_form))
            .route("/api/admin/contacts", get(Self::admin_list_messages))
            .route("/api/contact-info", get(Self::list_info))
            .route(
                "/api/admin/contact-info",
                get(Self::admin_list_info).post(Self::create_info),
            )
            .route(
                "/api/admin/contact-info/:id",
                put(Self::update_info).delete(Self::delete_info),
            )
            .with_state(resources)
    }

    /// Store a public contact-form submission
    async fn submit_form(
        State(resources): State<Arc<ServerResources>>,
        Json(form): Json<ContactForm>,
    ) -> Result<Response, AppError> {
        let message = resources.database.create_contact_message(&form).await?;
        Ok((StatusCode::CREATED, Json(message)).into_response())
    }

    /// List contact-form submissions, newest first (admin)
    async fn admin_list_messages(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Json<Vec<ContactMessage>>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        Ok(Json(resources.database.list_contact_messages().await?))
    }

    /// List active contact channels in display order
    async fn list_info(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<Vec<ContactInfo>>, AppError> {
        Ok(Json(resources.database.list_active_contact_info().await?))
    }

    /// List all contact channels regardless of activation (admin)
    async fn admin_list_info(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Json<Vec<ContactInfo>>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        Ok(Json(resources.database.list_all_contact_info().await?))
    }

    /// Create a new contact channel
    async fn create_info(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<ContactInfoCreate>,
    ) -> Result<Response, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        let info = resources.database.create_contact_info(&request).await?;
        Ok((StatusCode::CREATED, Json(info)).into_response())
    }

    /// Apply a partial update to a contact channel
    async fn update_info(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        headers: HeaderMap,
        Json(request): Json<ContactInfoUpdate>,
    ) -> Result<Json<ContactInfo>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        let info = resources
            .database
            .update_contact_info(id, &request)
            .await?
            .ok_or_else(|| AppError::not_found("Contact info"))?;
        Ok(Json(info))
    }

    /// Delete a contact channel
    async fn delete_info(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        headers: HeaderMap,
    ) -> Result<Json<serde_json::Value>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        if resources.database.delete_contact_info(id).await? {
            Ok(Json(serde_json::json!({"message": "Contact info deleted"})))
        } else {
            Err(AppError::not_found("Contact info"))
        }
    }
}
