// ABOUTME: Main server binary for the Folio portfolio content backend
// ABOUTME: Loads configuration, initializes resources, and serves the HTTP API
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Folio Server Binary
//!
//! Starts the portfolio content API with admin authentication, SQLite
//! storage, image uploads, and the change-notification feed.

use anyhow::Result;
use clap::Parser;
use folio_server::{
    auth::AuthManager,
    config::environment::ServerConfig,
    database::Database,
    logging,
    server::{HttpServer, ServerResources},
    uploads::ImageStore,
};
use std::sync::Arc;
use tracing::{error, info};

/// Command-line arguments for the server binary
#[derive(Parser)]
#[command(name = "folio-server")]
#[command(about = "Folio - content management backend for a personal portfolio site")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting Folio server");
    info!("{}", config.summary());

    // Make sure the parent directory of a file-backed database exists
    if let folio_server::config::environment::DatabaseUrl::SQLite { path } = &config.database.url {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    let database = Database::new(&config.database.url.to_connection_string()).await?;
    info!("Database initialized: {}", config.database.url);

    let auth_manager = AuthManager::from_config(&config.auth)?;
    info!("Authentication manager initialized");

    let image_store = ImageStore::from_config(&config.upload)?;
    info!("Upload directory ready: {}", config.upload.dir.display());

    let http_port = config.http_port;
    let resources = Arc::new(ServerResources::new(
        database,
        auth_manager,
        image_store,
        Arc::new(config),
    ));

    display_available_endpoints(http_port);

    let server = HttpServer::new(resources);
    if let Err(e) = server.run(http_port).await {
        error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}

/// Display the API surface with its port
fn display_available_endpoints(port: u16) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());

    info!("=== Available API Endpoints ===");
    info!("Authentication:");
    info!("   Admin Login:        POST http://{host}:{port}/api/auth/login");
    info!("Content (public reads, admin writes):");
    info!("   Hero:               /api/hero");
    info!("   About:              /api/about");
    info!("   Experiences:        /api/experiences");
    info!("   Stats:              /api/stats");
    info!("   Testimonials:       /api/testimonials");
    info!("   Projects:           /api/projects");
    info!("   Contact Channels:   /api/contact-info");
    info!("   Awards:             /api/awards");
    info!("   Education:          /api/education");
    info!("   Certifications:     /api/certifications");
    info!("   Skills:             /api/skills");
    info!("   Section Titles:     /api/section-titles");
    info!("   Section Config:     /api/section-config");
    info!("Contact Form:");
    info!("   Submit:             POST http://{host}:{port}/api/contact");
    info!("   Admin Listing:      GET  http://{host}:{port}/api/admin/contacts");
    info!("Uploads:");
    info!("   Upload Image:       POST http://{host}:{port}/api/upload/image");
    info!("   Static Files:       GET  http://{host}:{port}/uploads/{{file}}");
    info!("Real-time Notifications:");
    info!("   WebSocket Feed:     ws://{host}:{port}/ws");
    info!("=== End of Endpoint List ===");
}
