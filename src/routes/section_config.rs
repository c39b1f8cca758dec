// ABOUTME: Legacy section-configuration blob routes with change broadcast
// ABOUTME: Serves a built-in default document until a row exists; writes notify subscribers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Legacy section-configuration routes
//!
//! The free-form JSON blob predates the typed `section_titles` rows and is
//! kept for the migration window. A GET with no stored row answers with the
//! built-in default document (id 0) so the front-end always renders. Every
//! successful write broadcasts a `section_config_updated` event to the
//! notification feed.

use crate::errors::AppError;
use crate::models::{SectionConfig, SectionConfigUpdate};
use crate::notifications::ChangeEvent;
use crate::server::ServerResources;
use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use std::sync::Arc;

/// Section configuration routes implementation
pub struct SectionConfigRoutes;

impl SectionConfigRoutes {
    /// Create all section configuration routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/section-config",
                get(Self::get_config).post(Self::upsert_config),
            )
            .route("/api/notify/test", post(Self::broadcast_test))
            .with_state(resources)
    }

    /// Get the stored configuration, or the default document when none exists
    async fn get_config(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<SectionConfig>, AppError> {
        if let Some(config) = resources.database.get_section_config().await? {
            return Ok(Json(config));
        }

        let now = Utc::now();
        Ok(Json(SectionConfig {
            id: 0,
            config: Self::default_document(),
            created_at: now,
            updated_at: now,
        }))
    }

    /// Create or replace the configuration blob and notify subscribers
    async fn upsert_config(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<SectionConfigUpdate>,
    ) -> Result<Json<SectionConfig>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;

        let existed = resources.database.get_section_config().await?.is_some();
        let config = resources
            .database
            .upsert_section_config(&request.config)
            .await?;

        let message = if existed {
            "Section configuration has been updated"
        } else {
            "Section configuration has been created"
        };
        resources
            .notifier
            .broadcast(&ChangeEvent::section_config_updated(message))
            .await;

        Ok(Json(config))
    }

    /// Fire a diagnostic broadcast to all connected clients
    async fn broadcast_test(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Json<serde_json::Value>, AppError> {
        resources.auth_middleware.authenticate_headers(&headers)?;
        resources
            .notifier
            .broadcast(&ChangeEvent::test("This is a test notification"))
            .await;
        Ok(Json(serde_json::json!({"message": "Test message broadcasted"})))
    }

    /// Built-in default configuration served before any row is stored
    fn default_document() -> serde_json::Value {
        serde_json::json!({
            "hero": {
                "title": "Hi, I'm the Portfolio Owner",
                "subtitle": "Product Builder",
                "description": "Crafting digital experiences that users love and businesses value",
                "badge": "Welcome",
                "badgeEmoji": "\u{2728}"
            },
            "about": {
                "title": "Get to Know Me",
                "description": "A glimpse into my world of innovation and creativity"
            },
            "stats": {
                "title": "My Journey",
                "mainTitle": "Achievements & Skills",
                "description": "A glimpse into my professional journey and expertise"
            },
            "projects": {
                "title": "My Creations",
                "mainTitle": "Projects",
                "description": "Check out some of my favorite projects"
            },
            "experience": {
                "title": "My Journey",
                "mainTitle": "Experience",
                "description": "A journey through my professional roles"
            },
            "testimonials": {
                "title": "What People Say",
                "mainTitle": "Testimonials",
                "description": "What colleagues and clients have to say"
            },
            "contact": {
                "title": "Get In Touch",
                "mainTitle": "Let's Connect",
                "description": "Ready to work together?"
            },
            "awards": {
                "title": "Awards",
                "description": "Awards and recognition"
            },
            "education": {
                "title": "Education",
                "description": "Educational background"
            },
            "certifications": {
                "title": "Certifications",
                "description": "Professional certifications"
            },
            "skills": {
                "title": "Skills",
                "description": "Technical skills"
            }
        })
    }
}
