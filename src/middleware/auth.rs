// ABOUTME: Admin authentication middleware for request authorization
// ABOUTME: Parses Authorization headers and validates bearer tokens
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::auth::{AuthManager, AuthResult};
use crate::errors::{AppError, AppResult};
use std::sync::Arc;

/// Middleware guarding admin-only routes. Reads are public; every mutating
/// route and every `/api/admin/*` route goes through here.
#[derive(Clone)]
pub struct AdminAuthMiddleware {
    auth_manager: Arc<AuthManager>,
}

impl AdminAuthMiddleware {
    /// Create new admin auth middleware
    #[must_use]
    pub const fn new(auth_manager: Arc<AuthManager>) -> Self {
        Self { auth_manager }
    }

    /// Authenticate a request from its `Authorization` header value
    ///
    /// # Errors
    ///
    /// Returns an error if the header is missing, is not a bearer token, or
    /// the token fails validation.
    pub fn authenticate_request(&self, auth_header: Option<&str>) -> AppResult<AuthResult> {
        let Some(header) = auth_header else {
            tracing::debug!("Authentication failed: missing authorization header");
            return Err(AppError::auth_required());
        };

        let Some(token) = header.strip_prefix("Bearer ") else {
            tracing::debug!("Authentication failed: authorization header is not a bearer token");
            return Err(AppError::auth_invalid(
                "Invalid authorization header format - must be 'Bearer <token>'",
            ));
        };

        let claims = self
            .auth_manager
            .validate_token(token)
            .map_err(|e| AppError::auth_invalid(format!("Token validation failed: {e}")))?;

        Ok(AuthResult {
            username: claims.sub,
        })
    }

    /// Authenticate from a full header map (convenience for handlers)
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::authenticate_request`].
    pub fn authenticate_headers(&self, headers: &axum::http::HeaderMap) -> AppResult<AuthResult> {
        let auth_header = headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        self.authenticate_request(auth_header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::AuthConfig;

    fn test_middleware() -> (AdminAuthMiddleware, Arc<AuthManager>) {
        let auth = AuthConfig {
            jwt_secret: "test-secret".into(),
            token_expiry_minutes: 30,
            admin_username: "admin".into(),
            admin_password: "pw".into(),
        };
        let manager = Arc::new(AuthManager::from_config(&auth).unwrap());
        (AdminAuthMiddleware::new(manager.clone()), manager)
    }

    #[test]
    fn test_missing_header_rejected() {
        let (middleware, _) = test_middleware();
        let err = middleware.authenticate_request(None).unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::AuthRequired);
    }

    #[test]
    fn test_non_bearer_header_rejected() {
        let (middleware, _) = test_middleware();
        let err = middleware
            .authenticate_request(Some("Basic dXNlcjpwdw=="))
            .unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::AuthInvalid);
    }

    #[test]
    fn test_valid_bearer_token_accepted() {
        let (middleware, manager) = test_middleware();
        let token = manager.generate_token("admin").unwrap();
        let result = middleware
            .authenticate_request(Some(&format!("Bearer {token}")))
            .unwrap();
        assert_eq!(result.username, "admin");
    }
}
