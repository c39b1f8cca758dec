// ABOUTME: Main library entry point for the Folio portfolio content backend
// ABOUTME: Exposes the REST API, admin auth, uploads, and the change-notification feed
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # Folio Server
//!
//! Content-management backend for a personal portfolio site. A fixed set of
//! content entities (hero banner, about blurbs, experience, stats,
//! testimonials, projects, contact channels, awards, education,
//! certifications, skill groups, section titles) is served read-only to the
//! public front-end and writable to a single authenticated admin.
//!
//! ## Architecture
//!
//! - **Routes**: one axum router per content domain, thin handlers over the
//!   database layer
//! - **Database**: SQLite via sqlx with inline idempotent migrations
//! - **Auth**: bcrypt-checked admin credentials, HS256 bearer tokens
//! - **Notifications**: WebSocket fan-out of section-configuration changes
//! - **Uploads**: validated, resized image storage served as static files
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use folio_server::config::environment::ServerConfig;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ServerConfig::from_env()?;
//! println!("Folio server configured for port {}", config.http_port);
//! # Ok(())
//! # }
//! ```

/// Admin authentication: JWT issuing/validation and credential checks
pub mod auth;

/// Environment-based configuration management
pub mod config;

/// SQLite persistence layer for all content entities
pub mod database;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for admin auth and CORS
pub mod middleware;

/// Content entity records and request/response types
pub mod models;

/// Change-notification fan-out for connected WebSocket clients
pub mod notifications;

/// HTTP routes grouped by content domain
pub mod routes;

/// Server resources and HTTP server assembly
pub mod server;

/// Image upload validation, resizing, and storage
pub mod uploads;
