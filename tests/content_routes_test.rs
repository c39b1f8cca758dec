// ABOUTME: Integration tests for the content CRUD routes
// ABOUTME: Covers create/read roundtrips, the hero invariant, deletes, and ordering
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

mod common;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_then_read_returns_same_payload() {
    let resources = common::create_test_resources().await.unwrap();
    let router = common::test_router(&resources);
    let token = common::admin_token(&resources);

    let (status, created) = common::send_request(
        &router,
        "POST",
        "/api/about",
        Some(&token),
        Some(json!({
            "title": "Who I Am",
            "subtitle": "Builder",
            "description": "I build things.",
            "order_index": 2
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["title"], "Who I Am");
    assert_eq!(created["subtitle"], "Builder");
    assert_eq!(created["order_index"], 2);
    assert_eq!(created["is_active"], true);

    let (status, listed) = common::send_request(&router, "GET", "/api/about", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let items = listed.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Who I Am");
    assert_eq!(items[0]["description"], "I build things.");
}

#[tokio::test]
async fn test_mutating_routes_require_bearer_token() {
    let resources = common::create_test_resources().await.unwrap();
    let router = common::test_router(&resources);

    let body = json!({"title": "T", "description": "D"});
    let (status, _) =
        common::send_request(&router, "POST", "/api/about", None, Some(body.clone())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = common::send_request(
        &router,
        "POST",
        "/api/about",
        Some("not-a-real-token"),
        Some(body),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) =
        common::send_request(&router, "GET", "/api/admin/about", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_creating_active_hero_deactivates_previous() {
    let resources = common::create_test_resources().await.unwrap();
    let router = common::test_router(&resources);
    let token = common::admin_token(&resources);

    let hero = |title: &str| {
        json!({
            "title": title,
            "subtitle": "Sub",
            "description": "Desc",
            "badge": "Badge",
            "badge_emoji": "B",
            "cta_text": "Go"
        })
    };

    let (status, _) =
        common::send_request(&router, "POST", "/api/hero", Some(&token), Some(hero("First")))
            .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) =
        common::send_request(&router, "POST", "/api/hero", Some(&token), Some(hero("Second")))
            .await;
    assert_eq!(status, StatusCode::CREATED);

    // Public read returns the most recent active hero
    let (status, active) = common::send_request(&router, "GET", "/api/hero", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(active["title"], "Second");

    // Exactly one hero row stays active
    let (status, all) =
        common::send_request(&router, "GET", "/api/admin/hero", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let active_count = all
        .as_array()
        .unwrap()
        .iter()
        .filter(|h| h["is_active"] == true)
        .count();
    assert_eq!(active_count, 1);
}

#[tokio::test]
async fn test_hero_read_with_no_active_row_is_404() {
    let resources = common::create_test_resources().await.unwrap();
    let router = common::test_router(&resources);

    let (status, body) = common::send_request(&router, "GET", "/api/hero", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_delete_makes_subsequent_reads_404() {
    let resources = common::create_test_resources().await.unwrap();
    let router = common::test_router(&resources);
    let token = common::admin_token(&resources);

    let (status, created) = common::send_request(
        &router,
        "POST",
        "/api/stats",
        Some(&token),
        Some(json!({"label": "Projects", "value": "50", "suffix": "+"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, _) = common::send_request(
        &router,
        "DELETE",
        &format!("/api/stats/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Further mutations of the deleted row are 404
    let (status, _) = common::send_request(
        &router,
        "PUT",
        &format!("/api/stats/{id}"),
        Some(&token),
        Some(json!({"label": "Updated"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = common::send_request(
        &router,
        "DELETE",
        &format!("/api/stats/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_partial_update_changes_only_provided_fields() {
    let resources = common::create_test_resources().await.unwrap();
    let router = common::test_router(&resources);
    let token = common::admin_token(&resources);

    let (_, created) = common::send_request(
        &router,
        "POST",
        "/api/experiences",
        Some(&token),
        Some(json!({
            "company": "Northwind",
            "position": "PM",
            "duration": "2020 - 2022",
            "description": "Led things.",
            "technologies": "SQL"
        })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = common::send_request(
        &router,
        "PUT",
        &format!("/api/experiences/{id}"),
        Some(&token),
        Some(json!({"position": "Senior PM"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["position"], "Senior PM");
    // Untouched fields stay intact
    assert_eq!(updated["company"], "Northwind");
    assert_eq!(updated["technologies"], "SQL");
}

#[tokio::test]
async fn test_order_updates_are_reflected_in_list_order() {
    let resources = common::create_test_resources().await.unwrap();
    let router = common::test_router(&resources);
    let token = common::admin_token(&resources);

    let mut ids = Vec::new();
    for (title, order_index) in [("first", 0), ("second", 1), ("third", 2)] {
        let (_, created) = common::send_request(
            &router,
            "POST",
            "/api/about",
            Some(&token),
            Some(json!({"title": title, "description": "d", "order_index": order_index})),
        )
        .await;
        ids.push(created["id"].as_i64().unwrap());
    }

    // Reverse the display order
    let (status, reordered) = common::send_request(
        &router,
        "PUT",
        "/api/about/order",
        Some(&token),
        Some(json!([
            {"id": ids[0], "order_index": 2},
            {"id": ids[1], "order_index": 1},
            {"id": ids[2], "order_index": 0}
        ])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = reordered
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["third", "second", "first"]);

    let (_, listed) = common::send_request(&router, "GET", "/api/about", None, None).await;
    let titles: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["third", "second", "first"]);
}

#[tokio::test]
async fn test_deactivated_rows_hidden_from_public_visible_to_admin() {
    let resources = common::create_test_resources().await.unwrap();
    let router = common::test_router(&resources);
    let token = common::admin_token(&resources);

    let (_, created) = common::send_request(
        &router,
        "POST",
        "/api/testimonials",
        Some(&token),
        Some(json!({"name": "Sarah", "message": "Great work"})),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (_, _) = common::send_request(
        &router,
        "PUT",
        &format!("/api/testimonials/{id}"),
        Some(&token),
        Some(json!({"is_active": false})),
    )
    .await;

    let (_, public) =
        common::send_request(&router, "GET", "/api/testimonials", None, None).await;
    assert!(public.as_array().unwrap().is_empty());

    let (_, admin) =
        common::send_request(&router, "GET", "/api/admin/testimonials", Some(&token), None).await;
    assert_eq!(admin.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_projects_category_filter() {
    let resources = common::create_test_resources().await.unwrap();
    let router = common::test_router(&resources);
    let token = common::admin_token(&resources);

    for (title, category) in [("Shop", "web"), ("Bot", "ai"), ("Dash", "web")] {
        let (status, _) = common::send_request(
            &router,
            "POST",
            "/api/projects",
            Some(&token),
            Some(json!({"title": title, "description": "d", "category": category})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, web) =
        common::send_request(&router, "GET", "/api/projects/web", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(web.as_array().unwrap().len(), 2);

    let (_, all) = common::send_request(&router, "GET", "/api/projects", None, None).await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let (_, none) =
        common::send_request(&router, "GET", "/api/projects/mobile", None, None).await;
    assert!(none.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_section_title_lookup_by_name() {
    let resources = common::create_test_resources().await.unwrap();
    let router = common::test_router(&resources);
    let token = common::admin_token(&resources);

    let (status, _) = common::send_request(
        &router,
        "POST",
        "/api/section-titles",
        Some(&token),
        Some(json!({"section_name": "about", "title": "Get to Know Me"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, found) =
        common::send_request(&router, "GET", "/api/section-titles/about", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["title"], "Get to Know Me");

    let (status, _) =
        common::send_request(&router, "GET", "/api/section-titles/missing", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_contact_form_intake_and_admin_listing() {
    let resources = common::create_test_resources().await.unwrap();
    let router = common::test_router(&resources);
    let token = common::admin_token(&resources);

    let (status, stored) = common::send_request(
        &router,
        "POST",
        "/api/contact",
        None,
        Some(json!({"name": "Visitor", "email": "v@example.com", "message": "Hello!"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(stored["name"], "Visitor");

    let (status, _) =
        common::send_request(&router, "GET", "/api/admin/contacts", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, listed) =
        common::send_request(&router, "GET", "/api/admin/contacts", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["email"], "v@example.com");
}

#[tokio::test]
async fn test_contact_info_uses_type_on_the_wire() {
    let resources = common::create_test_resources().await.unwrap();
    let router = common::test_router(&resources);
    let token = common::admin_token(&resources);

    let (status, created) = common::send_request(
        &router,
        "POST",
        "/api/admin/contact-info",
        Some(&token),
        Some(json!({"type": "email", "value": "a@b.c", "label": "Email"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["type"], "email");

    let (_, listed) = common::send_request(&router, "GET", "/api/contact-info", None, None).await;
    assert_eq!(listed[0]["type"], "email");
}
