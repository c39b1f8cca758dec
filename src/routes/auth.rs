// ABOUTME: Admin login route issuing bearer tokens
// ABOUTME: Accepts OAuth2 password-flow form credentials and returns an access token
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Authentication routes

use crate::errors::AppError;
use crate::server::ServerResources;
use axum::{extract::State, routing::post, Form, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Login request payload (OAuth2 password-flow form shape)
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Admin username
    pub username: String,
    /// Admin password
    pub password: String,
}

/// Login response with bearer token
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests
    pub access_token: String,
    /// Always "bearer"
    pub token_type: String,
}

/// Authentication routes implementation
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/auth/login", post(Self::handle_login))
            .with_state(resources)
    }

    /// Handle admin login
    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        Form(request): Form<LoginRequest>,
    ) -> Result<Json<LoginResponse>, AppError> {
        let Some(auth) = resources
            .auth_manager
            .authenticate(&request.username, &request.password)
        else {
            warn!(username = %request.username, "Rejected admin login attempt");
            return Err(AppError::auth_invalid("Incorrect username or password"));
        };

        let access_token = resources
            .auth_manager
            .generate_token(&auth.username)
            .map_err(|e| AppError::internal(format!("Failed to issue token: {e}")))?;

        info!(username = %auth.username, "Admin login successful");
        Ok(Json(LoginResponse {
            access_token,
            token_type: "bearer".into(),
        }))
    }
}
