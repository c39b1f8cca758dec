// ABOUTME: Integration tests for the SQLite persistence layer
// ABOUTME: Exercises CRUD, ordering ties, the hero invariant, and the config blob
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

mod common;

use folio_server::models::{
    AboutCreate, AboutUpdate, HeroCreate, OrderUpdate, SkillGroupCreate, StatCreate,
};
use serde_json::json;

fn about(title: &str, order_index: i64) -> AboutCreate {
    AboutCreate {
        title: title.into(),
        subtitle: None,
        description: "body".into(),
        image_url: None,
        additional_data: None,
        is_active: true,
        order_index,
    }
}

fn hero(title: &str, is_active: bool) -> HeroCreate {
    HeroCreate {
        title: title.into(),
        subtitle: "sub".into(),
        description: "desc".into(),
        badge: "badge".into(),
        badge_emoji: "b".into(),
        cta_text: "go".into(),
        cta_style: "bordered".into(),
        is_active,
    }
}

#[tokio::test]
async fn test_migrate_is_idempotent() {
    let database = common::create_test_database().await.unwrap();
    // Second run must not fail on existing tables
    database.migrate().await.unwrap();
}

#[tokio::test]
async fn test_order_ties_break_on_insertion_order() {
    let database = common::create_test_database().await.unwrap();

    database.create_about(&about("first", 5)).await.unwrap();
    database.create_about(&about("second", 5)).await.unwrap();
    database.create_about(&about("third", 1)).await.unwrap();

    let titles: Vec<String> = database
        .list_active_about()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.title)
        .collect();
    assert_eq!(titles, ["third", "first", "second"]);
}

#[tokio::test]
async fn test_hero_single_active_invariant() {
    let database = common::create_test_database().await.unwrap();

    database.create_hero(&hero("first", true)).await.unwrap();
    database.create_hero(&hero("second", true)).await.unwrap();
    // An inactive insert leaves the current active row alone
    database.create_hero(&hero("draft", false)).await.unwrap();

    let active = database.get_active_hero().await.unwrap().unwrap();
    assert_eq!(active.title, "second");

    let all = database.list_all_heroes().await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all.iter().filter(|h| h.is_active).count(), 1);
}

#[tokio::test]
async fn test_partial_update_preserves_unset_fields() {
    let database = common::create_test_database().await.unwrap();

    let created = database
        .create_about(&AboutCreate {
            subtitle: Some("keep me".into()),
            additional_data: Some(json!({"layout": "wide"})),
            ..about("original", 0)
        })
        .await
        .unwrap();

    let updated = database
        .update_about(
            created.id,
            &AboutUpdate {
                title: Some("renamed".into()),
                ..AboutUpdate::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "renamed");
    assert_eq!(updated.subtitle.as_deref(), Some("keep me"));
    assert_eq!(updated.additional_data, Some(json!({"layout": "wide"})));
    assert!(updated.updated_at >= created.updated_at);

    // Unknown id yields None, not an error
    let missing = database
        .update_about(created.id + 999, &AboutUpdate::default())
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_bulk_reorder_skips_unknown_ids() {
    let database = common::create_test_database().await.unwrap();

    let a = database.create_about(&about("a", 0)).await.unwrap();
    let b = database.create_about(&about("b", 1)).await.unwrap();

    let reordered = database
        .set_about_order(&[
            OrderUpdate {
                id: a.id,
                order_index: 9,
            },
            OrderUpdate {
                id: b.id + 100,
                order_index: 0,
            },
        ])
        .await
        .unwrap();

    let titles: Vec<String> = reordered.into_iter().map(|x| x.title).collect();
    assert_eq!(titles, ["b", "a"]);
}

#[tokio::test]
async fn test_hard_delete_and_soft_deactivation_are_independent() {
    let database = common::create_test_database().await.unwrap();

    let visible = database
        .create_stat(&StatCreate {
            label: "visible".into(),
            value: "1".into(),
            suffix: String::new(),
            icon: None,
            is_active: true,
            order_index: 0,
        })
        .await
        .unwrap();
    let hidden = database
        .create_stat(&StatCreate {
            label: "hidden".into(),
            value: "2".into(),
            suffix: String::new(),
            icon: None,
            is_active: false,
            order_index: 1,
        })
        .await
        .unwrap();

    // Deactivated row still exists; deleted row is gone entirely
    assert!(database.delete_stat(visible.id).await.unwrap());
    assert!(database.get_stat(visible.id).await.unwrap().is_none());
    assert!(database.get_stat(hidden.id).await.unwrap().is_some());
    assert!(database.list_active_stats().await.unwrap().is_empty());
    assert_eq!(database.list_all_stats().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_section_config_upsert_keeps_single_row() {
    let database = common::create_test_database().await.unwrap();

    assert!(database.get_section_config().await.unwrap().is_none());

    let first = database
        .upsert_section_config(&json!({"hero": {"title": "one"}}))
        .await
        .unwrap();
    let second = database
        .upsert_section_config(&json!({"hero": {"title": "two"}}))
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.config["hero"]["title"], "two");
}

#[tokio::test]
async fn test_skill_group_crud_roundtrip() {
    let database = common::create_test_database().await.unwrap();

    let created = database
        .create_skill_group(&SkillGroupCreate {
            category: "Technical".into(),
            skills: "Rust, SQL".into(),
            is_active: true,
            order_index: 0,
        })
        .await
        .unwrap();

    let fetched = database
        .get_skill_group(created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.category, "Technical");
    assert_eq!(fetched.skills, "Rust, SQL");

    assert!(database.delete_skill_group(created.id).await.unwrap());
    assert!(database
        .get_skill_group(created.id)
        .await
        .unwrap()
        .is_none());
}
