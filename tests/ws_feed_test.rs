// ABOUTME: End-to-end tests for the WebSocket notification feed
// ABOUTME: Drives a real listener with tungstenite clients and HTTP mutations
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

mod common;

use futures_util::{SinkExt, StreamExt};
use serde_json::json;
use std::time::Duration;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

async fn connect_ws(
    base_url: &str,
) -> tokio_tungstenite::WebSocketStream<
    tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
> {
    let ws_url = format!("{}/ws", base_url.replacen("http", "ws", 1));
    let (mut socket, _) = connect_async(ws_url.as_str()).await.unwrap();

    // The echo reply proves the server finished registering this client,
    // so a broadcast fired after this point must reach it
    socket.send(Message::Text("hello".into())).await.unwrap();
    let reply = tokio::time::timeout(Duration::from_secs(5), socket.next())
        .await
        .unwrap()
        .unwrap()
        .unwrap();
    assert_eq!(
        reply.into_text().unwrap(),
        "Message received: hello"
    );

    socket
}

async fn next_text(
    socket: &mut tokio_tungstenite::WebSocketStream<
        tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
    >,
) -> String {
    loop {
        let message = tokio::time::timeout(Duration::from_secs(5), socket.next())
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        if let Message::Text(text) = message {
            return text;
        }
    }
}

#[tokio::test]
async fn test_section_config_write_reaches_connected_clients() {
    let resources = common::create_test_resources().await.unwrap();
    let base_url = common::spawn_test_server(&resources).await;
    let token = common::admin_token(&resources);

    let mut socket_a = connect_ws(&base_url).await;
    let mut socket_b = connect_ws(&base_url).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{base_url}/api/section-config"))
        .bearer_auth(&token)
        .json(&json!({"config": {"hero": {"title": "Broadcast me"}}}))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    for socket in [&mut socket_a, &mut socket_b] {
        let text = next_text(socket).await;
        let event: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(event["type"], "section_config_updated");
        assert!(event["timestamp"].is_string());
    }
}

#[tokio::test]
async fn test_closed_client_does_not_block_delivery_to_others() {
    let resources = common::create_test_resources().await.unwrap();
    let base_url = common::spawn_test_server(&resources).await;
    let token = common::admin_token(&resources);

    let socket_gone = connect_ws(&base_url).await;
    let mut socket_live = connect_ws(&base_url).await;

    // Drop the connection without a polite close frame
    drop(socket_gone);
    tokio::time::sleep(Duration::from_millis(100)).await;

    let client = reqwest::Client::new();
    client
        .post(format!("{base_url}/api/notify/test"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    let text = next_text(&mut socket_live).await;
    let event: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(event["type"], "test");
}

#[tokio::test]
async fn test_disconnect_unregisters_client() {
    let resources = common::create_test_resources().await.unwrap();
    let base_url = common::spawn_test_server(&resources).await;

    let mut socket = connect_ws(&base_url).await;
    assert_eq!(resources.notifier.client_count().await, 1);

    socket.close(None).await.unwrap();

    // The server prunes the registration once the read loop observes the close
    let mut remaining = resources.notifier.client_count().await;
    for _ in 0..50 {
        if remaining == 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
        remaining = resources.notifier.client_count().await;
    }
    assert_eq!(remaining, 0);
}
