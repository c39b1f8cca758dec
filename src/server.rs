// ABOUTME: Server resource container and HTTP server assembly
// ABOUTME: Wires database, auth, notifier, and uploads into the merged axum router
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Server Resources and Assembly
//!
//! [`ServerResources`] is the dependency container shared by every route
//! handler: database, auth manager, auth middleware, change notifier, image
//! store, and configuration, each behind an `Arc`. Route modules receive the
//! container instead of recreating resources per request, and the notifier
//! registry lives here rather than in any global state.

use crate::auth::AuthManager;
use crate::config::environment::ServerConfig;
use crate::database::Database;
use crate::middleware::cors::setup_cors;
use crate::middleware::AdminAuthMiddleware;
use crate::notifications::ChangeNotifier;
use crate::routes::{
    AboutRoutes, AuthRoutes, AwardRoutes, CertificationRoutes, ContactRoutes, EducationRoutes,
    ExperienceRoutes, HealthRoutes, HeroRoutes, ProjectRoutes, SectionConfigRoutes,
    SectionTitleRoutes, SkillRoutes, StatRoutes, TestimonialRoutes, UploadRoutes, WebSocketRoutes,
};
use crate::uploads::ImageStore;
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Content storage
    pub database: Arc<Database>,
    /// Token issuing and validation
    pub auth_manager: Arc<AuthManager>,
    /// Bearer-token guard for admin routes
    pub auth_middleware: Arc<AdminAuthMiddleware>,
    /// Change-notification registry
    pub notifier: Arc<ChangeNotifier>,
    /// Validated image storage
    pub image_store: Arc<ImageStore>,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create new server resources with proper Arc sharing
    #[must_use]
    pub fn new(
        database: Database,
        auth_manager: AuthManager,
        image_store: ImageStore,
        config: Arc<ServerConfig>,
    ) -> Self {
        let auth_manager = Arc::new(auth_manager);
        let auth_middleware = Arc::new(AdminAuthMiddleware::new(auth_manager.clone()));

        Self {
            database: Arc::new(database),
            auth_manager,
            auth_middleware,
            notifier: Arc::new(ChangeNotifier::new()),
            image_store: Arc::new(image_store),
            config,
        }
    }
}

/// HTTP server over the shared resources
pub struct HttpServer {
    resources: Arc<ServerResources>,
}

impl HttpServer {
    /// Create a new server from shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Assemble the full application router (also used directly by tests)
    #[must_use]
    pub fn router(resources: &Arc<ServerResources>) -> Router {
        let cors = setup_cors(&resources.config);
        let static_uploads = ServeDir::new(resources.image_store.dir());

        Router::new()
            .merge(HealthRoutes::routes())
            .merge(AuthRoutes::routes(resources.clone()))
            .merge(HeroRoutes::routes(resources.clone()))
            .merge(AboutRoutes::routes(resources.clone()))
            .merge(ExperienceRoutes::routes(resources.clone()))
            .merge(StatRoutes::routes(resources.clone()))
            .merge(TestimonialRoutes::routes(resources.clone()))
            .merge(ProjectRoutes::routes(resources.clone()))
            .merge(ContactRoutes::routes(resources.clone()))
            .merge(AwardRoutes::routes(resources.clone()))
            .merge(EducationRoutes::routes(resources.clone()))
            .merge(CertificationRoutes::routes(resources.clone()))
            .merge(SkillRoutes::routes(resources.clone()))
            .merge(SectionTitleRoutes::routes(resources.clone()))
            .merge(SectionConfigRoutes::routes(resources.clone()))
            .merge(UploadRoutes::routes(resources.clone()))
            .merge(WebSocketRoutes::routes(resources.notifier.clone()))
            .nest_service("/uploads", static_uploads)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the listener fails or the process is stopped
    ///
    /// # Errors
    ///
    /// Returns an error if binding the port fails; this is the only fatal
    /// startup path besides opening the database.
    pub async fn run(self, port: u16) -> Result<()> {
        let app = Self::router(&self.resources);

        let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
            .await
            .with_context(|| format!("Failed to bind port {port}"))?;

        info!("HTTP server listening on port {port}");
        axum::serve(listener, app).await.context("Server error")?;

        Ok(())
    }
}
