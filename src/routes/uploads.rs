// ABOUTME: Image upload route handlers over the validated image store
// ABOUTME: Multipart single/batch upload plus deletion and metadata lookup
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Image upload routes
//!
//! All upload operations require the admin bearer token. Stored files are
//! served statically under `/uploads` by the server assembly.

use crate::errors::AppError;
use crate::server::ServerResources;
use axum::{
    extract::{DefaultBodyLimit, Multipart, Query, State},
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

/// Query parameter naming a stored image by its public URL
#[derive(Debug, Deserialize)]
pub struct ImageUrlQuery {
    /// Public URL returned by a previous upload
    pub image_url: String,
}

/// Upload routes implementation
pub struct UploadRoutes;

impl UploadRoutes {
    /// Create all upload routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        // Multipart framing overhead on top of the image size cap
        let body_limit = resources.config.upload.max_file_size * 2;

        Router::new()
            .route(
                "/api/upload/image",
                post(Self::upload_single).delete(Self::delete_image),
            )
            .route("/api/upload/images", post(Self::upload_multiple))
            .route("/api/upload/image/info", get(Self::image_info))
            .layer(DefaultBodyLimit::max(body_limit))
            .with_state(resources)
    }

    /// Read the next file field out of a multipart stream
    async fn next_file(
        multipart: &mut Multipart,
    ) -> Result<Option<(String, Vec<u8>)>, AppError> {
        loop {
            let Some(field) = multipart
                .next_field()
                .await
                .map_err(|e| AppError::invalid_input(format!("Malformed multipart body: {e}")))?
            else {
                return Ok(None);
            };

            let Some(filename) = field.file_name().map(ToOwned::to_owned) else {
                continue;
            };

            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::invalid_input(format!("Failed to read upload: {e}")))?;

            return Ok(Some((filename, data.to_vec())));
        }
    }

    /// Upload a single image
    async fn upload_single(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        mut multipart: Multipart,
    ) -> Result<Json<serde_json::Value>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;

        let Some((filename, data)) = Self::next_file(&mut multipart).await? else {
            return Err(AppError::invalid_input("No file provided"));
        };

        let url = resources.image_store.store(&filename, &data)?;
        Ok(Json(serde_json::json!({"url": url, "filename": filename})))
    }

    /// Upload multiple images; individual failures are skipped
    async fn upload_multiple(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        mut multipart: Multipart,
    ) -> Result<Json<serde_json::Value>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;

        let mut urls = Vec::new();
        while let Some((filename, data)) = Self::next_file(&mut multipart).await? {
            match resources.image_store.store(&filename, &data) {
                Ok(url) => urls.push(url),
                Err(e) => warn!(filename = %filename, "Skipping failed upload: {e}"),
            }
        }

        Ok(Json(serde_json::json!({"count": urls.len(), "urls": urls})))
    }

    /// Delete an uploaded image
    async fn delete_image(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<ImageUrlQuery>,
    ) -> Result<Json<serde_json::Value>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;

        if resources.image_store.delete(&query.image_url) {
            Ok(Json(serde_json::json!({"message": "Image deleted successfully"})))
        } else {
            Err(AppError::not_found("Image"))
        }
    }

    /// Get metadata about an uploaded image
    async fn image_info(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<ImageUrlQuery>,
    ) -> Result<Json<crate::uploads::ImageInfo>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;

        resources
            .image_store
            .info(&query.image_url)
            .map(Json)
            .ok_or_else(|| AppError::not_found("Image"))
    }
}
