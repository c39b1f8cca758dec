// ABOUTME: Change-notification fan-out for connected WebSocket clients
// ABOUTME: Owns the connection registry and best-effort broadcast of change events
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Change Notifications
//!
//! One-to-many push of configuration-change events to every connected
//! WebSocket client. The registry is an explicit object owned by the server
//! resources (never global state), guarded by a single `RwLock`.
//!
//! Delivery is fire-and-forget: no acknowledgement, no retry, no ordering
//! guarantee across connections, no queueing or replay. A client that is
//! offline when an event fires simply misses it. A failed write counts as an
//! implicit disconnect for that client and never aborts delivery to the
//! rest.
//!
//! Broadcast snapshots the registry before iterating (copy-then-iterate),
//! so pruning dead connections cannot corrupt the traversal.

use chrono::{DateTime, Utc};
use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::{debug, trace, warn};
use uuid::Uuid;

// WebSocket message type alias for Axum
type Message = axum::extract::ws::Message;

/// Event envelope pushed to every subscriber
#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChangeEvent {
    /// Shared section configuration was created or updated
    SectionConfigUpdated {
        /// Human-readable description of the change
        message: String,
        /// Event time
        timestamp: DateTime<Utc>,
    },
    /// Diagnostic broadcast fired from the test endpoint
    Test {
        /// Human-readable description
        message: String,
        /// Event time
        timestamp: DateTime<Utc>,
    },
}

impl ChangeEvent {
    /// Section-configuration change event stamped with the current time
    pub fn section_config_updated(message: impl Into<String>) -> Self {
        Self::SectionConfigUpdated {
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    /// Diagnostic event stamped with the current time
    pub fn test(message: impl Into<String>) -> Self {
        Self::Test {
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Registry of live WebSocket connections with best-effort broadcast
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    clients: Arc<RwLock<HashMap<Uuid, mpsc::UnboundedSender<Message>>>>,
}

impl ChangeNotifier {
    /// Create an empty notifier
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a connection's outbound channel; returns its registry id
    pub async fn register(&self, tx: mpsc::UnboundedSender<Message>) -> Uuid {
        let connection_id = Uuid::new_v4();
        self.clients.write().await.insert(connection_id, tx);
        debug!(connection_id = %connection_id, "Notification client registered");
        connection_id
    }

    /// Remove a connection from the registry (no-op when already gone)
    pub async fn unregister(&self, connection_id: Uuid) {
        if self.clients.write().await.remove(&connection_id).is_some() {
            debug!(connection_id = %connection_id, "Notification client unregistered");
        }
    }

    /// Number of currently registered connections
    pub async fn client_count(&self) -> usize {
        self.clients.read().await.len()
    }

    /// Broadcast an event to every registered connection, best-effort.
    ///
    /// The registry is snapshotted under the read lock and iterated outside
    /// it; senders whose channel is gone are pruned afterwards under the
    /// write lock. A zero-subscriber broadcast is a no-op.
    pub async fn broadcast(&self, event: &ChangeEvent) {
        let payload = match serde_json::to_string(event) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize change event: {e}");
                return;
            }
        };

        let snapshot: Vec<(Uuid, mpsc::UnboundedSender<Message>)> = {
            let clients = self.clients.read().await;
            clients
                .iter()
                .map(|(id, tx)| (*id, tx.clone()))
                .collect()
        };

        if snapshot.is_empty() {
            trace!("Change event broadcast with no connected clients");
            return;
        }

        let mut disconnected = Vec::new();
        for (connection_id, tx) in &snapshot {
            if tx.send(Message::Text(payload.clone())).is_err() {
                // Receiver dropped: implicit disconnect
                disconnected.push(*connection_id);
            }
        }

        if !disconnected.is_empty() {
            let mut clients = self.clients.write().await;
            for connection_id in &disconnected {
                clients.remove(connection_id);
            }
            debug!(
                pruned = disconnected.len(),
                remaining = clients.len(),
                "Pruned disconnected notification clients during broadcast"
            );
        }
    }

    /// Handle one upgraded WebSocket connection: register it, echo inbound
    /// text frames, and unregister on close or read failure.
    pub async fn handle_connection(&self, ws: axum::extract::ws::WebSocket) {
        let (mut ws_tx, mut ws_rx) = ws.split();
        let (tx, mut rx) = mpsc::unbounded_channel();

        let connection_id = self.register(tx.clone()).await;

        // Forward queued messages to the socket
        let ws_send_task = tokio::spawn(async move {
            while let Some(message) = rx.recv().await {
                if ws_tx.send(message).await.is_err() {
                    break;
                }
            }
        });

        while let Some(msg) = ws_rx.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    // Keep-alive echo for clients that probe the feed
                    if tx.send(Message::Text(format!("Message received: {text}"))).is_err() {
                        break;
                    }
                }
                Ok(Message::Close(_)) | Err(_) => break,
                _ => {}
            }
        }

        self.unregister(connection_id).await;
        ws_send_task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_broadcast_with_zero_clients_is_noop() {
        let notifier = ChangeNotifier::new();
        notifier
            .broadcast(&ChangeEvent::section_config_updated("nobody listening"))
            .await;
        assert_eq!(notifier.client_count().await, 0);
    }

    #[tokio::test]
    async fn test_broadcast_reaches_all_registered_clients() {
        let notifier = ChangeNotifier::new();

        let (tx_a, mut rx_a) = mpsc::unbounded_channel();
        let (tx_b, mut rx_b) = mpsc::unbounded_channel();
        notifier.register(tx_a).await;
        notifier.register(tx_b).await;

        notifier.broadcast(&ChangeEvent::test("hello")).await;

        for rx in [&mut rx_a, &mut rx_b] {
            let message = rx.recv().await.unwrap();
            let Message::Text(text) = message else {
                panic!("expected text frame");
            };
            assert!(text.contains("\"type\":\"test\""));
            assert!(text.contains("hello"));
        }
    }

    #[tokio::test]
    async fn test_silent_disconnect_does_not_abort_delivery() {
        let notifier = ChangeNotifier::new();

        let (tx_dead, rx_dead) = mpsc::unbounded_channel();
        let (tx_live, mut rx_live) = mpsc::unbounded_channel();
        notifier.register(tx_dead).await;
        notifier.register(tx_live).await;

        // Client went away without unregistering
        drop(rx_dead);

        notifier
            .broadcast(&ChangeEvent::section_config_updated("still delivered"))
            .await;

        let message = rx_live.recv().await.unwrap();
        let Message::Text(text) = message else {
            panic!("expected text frame");
        };
        assert!(text.contains("still delivered"));

        // Dead registration was pruned during the broadcast
        assert_eq!(notifier.client_count().await, 1);
    }

    #[tokio::test]
    async fn test_unregister_is_idempotent() {
        let notifier = ChangeNotifier::new();
        let (tx, _rx) = mpsc::unbounded_channel();
        let id = notifier.register(tx).await;

        notifier.unregister(id).await;
        notifier.unregister(id).await;
        assert_eq!(notifier.client_count().await, 0);
    }
}
