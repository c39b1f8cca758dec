// ABOUTME: Configuration module root for environment-driven server settings
// ABOUTME: Re-exports the typed ServerConfig loaded from process environment
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Configuration management for the Folio server.
//!
//! All configuration comes from environment variables (flat key-value
//! surface, no nested files). See [`environment::ServerConfig`].

/// Environment-based configuration management
pub mod environment;

pub use environment::ServerConfig;
