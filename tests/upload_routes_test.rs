// ABOUTME: End-to-end tests for the image upload routes and static serving
// ABOUTME: Drives multipart uploads with reqwest against a real listener
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

mod common;

use image::{DynamicImage, ImageFormat};
use reqwest::multipart::{Form, Part};

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = DynamicImage::new_rgb8(width, height);
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

fn image_form(filename: &str, bytes: Vec<u8>) -> Form {
    Form::new().part("file", Part::bytes(bytes).file_name(filename.to_owned()))
}

#[tokio::test]
async fn test_upload_resize_info_and_delete_roundtrip() {
    let resources = common::create_test_resources().await.unwrap();
    let base_url = common::spawn_test_server(&resources).await;
    let token = common::admin_token(&resources);
    let client = reqwest::Client::new();

    // Larger than the 64x64 test bounds, so the stored copy is downscaled
    let response = client
        .post(format!("{base_url}/api/upload/image"))
        .bearer_auth(&token)
        .multipart(image_form("big.png", png_bytes(256, 128)))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    let url = body["url"].as_str().unwrap().to_owned();
    assert!(url.starts_with("/uploads/"));
    assert_eq!(body["filename"], "big.png");

    // Stored file is served statically
    let served = client
        .get(format!("{base_url}{url}"))
        .send()
        .await
        .unwrap();
    assert_eq!(served.status(), reqwest::StatusCode::OK);
    assert!(!served.bytes().await.unwrap().is_empty());

    // Metadata reflects the downscaled dimensions
    let info: serde_json::Value = client
        .get(format!("{base_url}/api/upload/image/info"))
        .bearer_auth(&token)
        .query(&[("image_url", url.as_str())])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(info["width"].as_u64().unwrap() <= 64);
    assert!(info["height"].as_u64().unwrap() <= 64);

    // Delete, then the file is gone from both API and static serving
    let deleted = client
        .delete(format!("{base_url}/api/upload/image"))
        .bearer_auth(&token)
        .query(&[("image_url", url.as_str())])
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), reqwest::StatusCode::OK);

    let missing = client
        .delete(format!("{base_url}/api/upload/image"))
        .bearer_auth(&token)
        .query(&[("image_url", url.as_str())])
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upload_requires_admin_token() {
    let resources = common::create_test_resources().await.unwrap();
    let base_url = common::spawn_test_server(&resources).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base_url}/api/upload/image"))
        .multipart(image_form("img.png", png_bytes(8, 8)))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_upload_rejects_disallowed_extension() {
    let resources = common::create_test_resources().await.unwrap();
    let base_url = common::spawn_test_server(&resources).await;
    let token = common::admin_token(&resources);
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base_url}/api/upload/image"))
        .bearer_auth(&token)
        .multipart(image_form("script.svg", b"<svg/>".to_vec()))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_batch_upload_skips_failures() {
    let resources = common::create_test_resources().await.unwrap();
    let base_url = common::spawn_test_server(&resources).await;
    let token = common::admin_token(&resources);
    let client = reqwest::Client::new();

    let form = Form::new()
        .part("files", Part::bytes(png_bytes(8, 8)).file_name("ok.png"))
        .part("files", Part::bytes(b"junk".to_vec()).file_name("broken.png"))
        .part("files", Part::bytes(png_bytes(4, 4)).file_name("also-ok.png"));

    let body: serde_json::Value = client
        .post(format!("{base_url}/api/upload/images"))
        .bearer_auth(&token)
        .multipart(form)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["count"], 2);
    assert_eq!(body["urls"].as_array().unwrap().len(), 2);
}
