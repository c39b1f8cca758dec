// ABOUTME: Route module organization for Folio server HTTP endpoints
// ABOUTME: Provides route definitions organized by content domain
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Route module for the Folio server
//!
//! Routes are organized by content domain. Each domain module contains only
//! route definitions and thin handler functions that delegate to the
//! database layer. Public reads never require authentication; every mutating
//! handler and every `/api/admin/*` listing authenticates the admin bearer
//! token first.

/// About-blurb routes
pub mod about;
/// Admin login route
pub mod auth;
/// Award routes
pub mod awards;
/// Certification routes
pub mod certifications;
/// Contact-form and contact-channel routes
pub mod contact;
/// Education routes
pub mod education;
/// Experience routes
pub mod experience;
/// Health check and service status routes
pub mod health;
/// Hero banner routes
pub mod hero;
/// Project routes
pub mod projects;
/// Legacy section-configuration blob routes
pub mod section_config;
/// Section title routes
pub mod section_titles;
/// Skill group routes
pub mod skills;
/// Stat routes
pub mod stats;
/// Testimonial routes
pub mod testimonials;
/// Image upload routes
pub mod uploads;
/// WebSocket notification feed routes
pub mod websocket;

pub use about::AboutRoutes;
pub use auth::AuthRoutes;
pub use awards::AwardRoutes;
pub use certifications::CertificationRoutes;
pub use contact::ContactRoutes;
pub use education::EducationRoutes;
pub use experience::ExperienceRoutes;
pub use health::HealthRoutes;
pub use hero::HeroRoutes;
pub use projects::ProjectRoutes;
pub use section_config::SectionConfigRoutes;
pub use section_titles::SectionTitleRoutes;
pub use skills::SkillRoutes;
pub use stats::StatRoutes;
pub use testimonials::TestimonialRoutes;
pub use uploads::UploadRoutes;
pub use websocket::WebSocketRoutes;
