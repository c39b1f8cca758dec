// ABOUTME: One-off migration from the legacy section-config blob to section-title rows
// ABOUTME: Copies each section entry into a typed row, skipping sections that already have one
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Legacy section-config migration.
//!
//! The original data model stored every section heading in one mutable JSON
//! blob. The typed `section_titles` rows replace it; during the migration
//! window the rows take precedence wherever they exist. This binary copies
//! each blob entry into its own row, skipping sections that already have
//! one, and leaves the blob in place for clients that still read it.
//!
//! Usage:
//! ```bash
//! cargo run --bin migrate-section-config -- --database-url sqlite:./data/folio.db
//! ```

use anyhow::Result;
use clap::Parser;
use folio_server::database::Database;
use folio_server::models::SectionTitleCreate;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "migrate-section-config",
    about = "Migrate the legacy section-config blob into section-title rows"
)]
struct MigrateArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Report what would be migrated without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let args = MigrateArgs::parse();
    let database_url = args
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite:./data/folio.db".into());

    let database = Database::new(&database_url).await?;

    let Some(section_config) = database.get_section_config().await? else {
        info!("No legacy section config stored; nothing to migrate");
        return Ok(());
    };

    let Some(sections) = section_config.config.as_object() else {
        warn!("Legacy section config is not a JSON object; nothing to migrate");
        return Ok(());
    };

    let mut migrated = 0_usize;
    let mut skipped = 0_usize;

    for (order_index, (section_name, entry)) in sections.iter().enumerate() {
        if database
            .get_section_title_by_name(section_name)
            .await?
            .is_some()
        {
            // Typed rows take precedence; never overwrite one
            skipped += 1;
            continue;
        }

        let text = |key: &str| {
            entry
                .get(key)
                .and_then(|v| v.as_str())
                .map(str::to_owned)
        };

        let Some(title) = text("title") else {
            warn!(section = %section_name, "Legacy entry has no title; skipping");
            skipped += 1;
            continue;
        };

        let create = SectionTitleCreate {
            section_name: section_name.clone(),
            title,
            subtitle: text("subtitle"),
            description: text("description"),
            main_title: text("mainTitle"),
            emoji: text("emoji").or_else(|| text("badgeEmoji")),
            is_active: true,
            order_index: order_index as i64,
        };

        if args.dry_run {
            info!(section = %section_name, "Would migrate legacy entry");
        } else {
            database.create_section_title(&create).await?;
            info!(section = %section_name, "Migrated legacy entry");
        }
        migrated += 1;
    }

    info!(
        migrated,
        skipped,
        dry_run = args.dry_run,
        "Section config migration finished"
    );
    Ok(())
}
