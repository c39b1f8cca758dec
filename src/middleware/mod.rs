// ABOUTME: HTTP middleware module for request authentication and CORS
// ABOUTME: Organizes middleware components used across the route layer
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! HTTP middleware for the Folio server

/// Admin bearer-token authentication middleware
pub mod auth;
/// CORS configuration
pub mod cors;

pub use auth::AdminAuthMiddleware;
