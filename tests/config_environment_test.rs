// ABOUTME: Tests for environment-variable configuration loading
// ABOUTME: Covers defaults, overrides, and startup validation failures
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use folio_server::config::environment::{Environment, LogLevel, ServerConfig};
use serial_test::serial;

const VARS: [&str; 8] = [
    "HTTP_PORT",
    "LOG_LEVEL",
    "ENVIRONMENT",
    "DATABASE_URL",
    "JWT_SECRET",
    "TOKEN_EXPIRY_MINUTES",
    "ADMIN_USERNAME",
    "CORS_ALLOWED_ORIGINS",
];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.auth.token_expiry_minutes, 30);
    assert_eq!(config.auth.admin_username, "admin");
    assert_eq!(config.cors.allowed_origins, "*");
    assert_eq!(config.upload.max_file_size, 5 * 1024 * 1024);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    std::env::set_var("HTTP_PORT", "9000");
    std::env::set_var("LOG_LEVEL", "debug");
    std::env::set_var("DATABASE_URL", "sqlite::memory:");
    std::env::set_var("TOKEN_EXPIRY_MINUTES", "120");
    std::env::set_var("ADMIN_USERNAME", "operator");
    std::env::set_var("CORS_ALLOWED_ORIGINS", "https://folio.example.com");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 9000);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert!(config.database.url.is_memory());
    assert_eq!(config.auth.token_expiry_minutes, 120);
    assert_eq!(config.auth.admin_username, "operator");
    assert_eq!(config.cors.allowed_origins, "https://folio.example.com");

    clear_env();
}

#[test]
#[serial]
fn test_invalid_port_is_a_startup_error() {
    clear_env();
    std::env::set_var("HTTP_PORT", "not-a-port");

    assert!(ServerConfig::from_env().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_production_requires_jwt_secret() {
    clear_env();
    std::env::set_var("ENVIRONMENT", "production");

    assert!(ServerConfig::from_env().is_err());

    std::env::set_var("JWT_SECRET", "a-real-secret");
    let config = ServerConfig::from_env().unwrap();
    assert!(config.environment.is_production());
    assert_eq!(config.auth.jwt_secret, "a-real-secret");

    clear_env();
}

#[test]
#[serial]
fn test_summary_does_not_leak_secrets() {
    clear_env();
    std::env::set_var("JWT_SECRET", "super-secret-value");
    std::env::set_var("ADMIN_USERNAME", "operator");

    let config = ServerConfig::from_env().unwrap();
    let summary = config.summary();
    assert!(!summary.contains("super-secret-value"));
    assert!(summary.contains("8080"));

    clear_env();
}
