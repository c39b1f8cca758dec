// ABOUTME: WebSocket route handlers for the change-notification feed
// ABOUTME: Upgrades connections and delegates to the ChangeNotifier registry
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! WebSocket routes
//!
//! A single endpoint upgrades the connection and hands it to the
//! [`crate::notifications::ChangeNotifier`]. The feed carries no
//! authentication and no topic filtering; every connected client receives
//! every event.

use crate::notifications::ChangeNotifier;
use axum::{
    extract::{
        ws::{WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
    routing::get,
    Router,
};
use std::sync::Arc;
use tracing::{debug, info};

/// WebSocket routes implementation
pub struct WebSocketRoutes;

impl WebSocketRoutes {
    /// Create all WebSocket routes with the injected notifier
    pub fn routes(notifier: Arc<ChangeNotifier>) -> Router {
        Router::new()
            .route("/ws", get(Self::handle_websocket))
            .with_state(notifier)
    }

    /// Handle WebSocket upgrade and connection
    async fn handle_websocket(
        ws: WebSocketUpgrade,
        State(notifier): State<Arc<ChangeNotifier>>,
    ) -> impl IntoResponse {
        info!("New WebSocket connection request");

        ws.on_upgrade(move |socket: WebSocket| async move {
            debug!("WebSocket upgraded, delegating to notifier");
            notifier.handle_connection(socket).await;
        })
    }
}
