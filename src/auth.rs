// ABOUTME: JWT-based admin authentication and token management
// ABOUTME: Handles admin login verification, token generation, and validation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Authentication and Session Management
//!
//! Single-admin authentication for the Folio server. The admin principal is
//! configured through the environment; the password is bcrypt-hashed once at
//! startup and verified on login. Successful logins receive an HS256 bearer
//! token whose claims carry the admin username and an expiry.

use crate::config::environment::AuthConfig;
use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// `JWT` claims for admin authentication
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Admin username
    pub sub: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// Authentication result with the validated principal
#[derive(Debug, Clone)]
pub struct AuthResult {
    /// Authenticated admin username
    pub username: String,
}

/// Authentication manager for the single admin principal
#[derive(Clone)]
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry_minutes: i64,
    admin_username: String,
    admin_password_hash: String,
}

impl AuthManager {
    /// Create a new authentication manager from configuration. Hashes the
    /// admin password once so the plain text is not kept around.
    ///
    /// # Errors
    ///
    /// Returns an error if password hashing fails.
    pub fn from_config(auth: &AuthConfig) -> Result<Self> {
        let admin_password_hash = bcrypt::hash(&auth.admin_password, bcrypt::DEFAULT_COST)
            .context("Failed to hash admin password")?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(auth.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(auth.jwt_secret.as_bytes()),
            token_expiry_minutes: auth.token_expiry_minutes,
            admin_username: auth.admin_username.clone(),
            admin_password_hash,
        })
    }

    /// Check admin credentials. Returns the authenticated principal or
    /// `None` on any mismatch (unknown username counts the same as a wrong
    /// password).
    #[must_use]
    pub fn authenticate(&self, username: &str, password: &str) -> Option<AuthResult> {
        if username != self.admin_username {
            return None;
        }

        match bcrypt::verify(password, &self.admin_password_hash) {
            Ok(true) => Some(AuthResult {
                username: self.admin_username.clone(),
            }),
            Ok(false) => None,
            Err(e) => {
                tracing::warn!("Password verification failed: {e}");
                None
            }
        }
    }

    /// Generate a bearer token for the authenticated admin
    ///
    /// # Errors
    ///
    /// Returns an error if JWT encoding fails.
    pub fn generate_token(&self, username: &str) -> Result<String> {
        let now = Utc::now();
        let expiry = now + Duration::minutes(self.token_expiry_minutes);

        let claims = Claims {
            sub: username.to_owned(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Validate a bearer token and return its claims
    ///
    /// # Errors
    ///
    /// Returns an error if the signature is invalid, the token is expired,
    /// or the subject is not the configured admin.
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .context("Token validation failed")?;

        if token_data.claims.sub != self.admin_username {
            anyhow::bail!("Token subject is not the configured admin");
        }

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_auth_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".into(),
            token_expiry_minutes: 30,
            admin_username: "admin".into(),
            admin_password: "hunter2".into(),
        }
    }

    #[test]
    fn test_authenticate_accepts_correct_credentials() {
        let manager = AuthManager::from_config(&test_auth_config()).unwrap();
        let result = manager.authenticate("admin", "hunter2");
        assert_eq!(result.map(|r| r.username).as_deref(), Some("admin"));
    }

    #[test]
    fn test_authenticate_rejects_wrong_password_and_username() {
        let manager = AuthManager::from_config(&test_auth_config()).unwrap();
        assert!(manager.authenticate("admin", "wrong").is_none());
        assert!(manager.authenticate("root", "hunter2").is_none());
    }

    #[test]
    fn test_token_roundtrip() {
        let manager = AuthManager::from_config(&test_auth_config()).unwrap();
        let token = manager.generate_token("admin").unwrap();
        let claims = manager.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let manager = AuthManager::from_config(&test_auth_config()).unwrap();

        let mut other = test_auth_config();
        other.jwt_secret = "different-secret".into();
        let other_manager = AuthManager::from_config(&other).unwrap();

        let token = other_manager.generate_token("admin").unwrap();
        assert!(manager.validate_token(&token).is_err());
    }
}
