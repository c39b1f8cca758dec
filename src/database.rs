// ABOUTME: SQLite persistence layer for all portfolio content entities
// ABOUTME: Handles schema migration, CRUD queries, and row-to-model mapping
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Database Management
//!
//! SQLite-backed storage for the Folio content backend. Schema setup runs as
//! idempotent `CREATE TABLE IF NOT EXISTS` statements on startup. Every
//! content table shares the same conventions: integer autoincrement primary
//! key, RFC 3339 text timestamps, boolean activation flag, and an explicit
//! integer `order_index` with no uniqueness constraint (ties break on
//! insertion order via the secondary `id` sort key).
//!
//! Partial updates are read-modify-write: the row is loaded, the explicit
//! update struct is applied field-by-field, and the full payload is written
//! back with a bumped `updated_at`. Consistency is delegated to SQLite's own
//! per-statement transaction handling; there are no multi-step transactions.

use crate::models::{
    About, AboutCreate, AboutUpdate, Award, AwardCreate, AwardUpdate, Certification,
    CertificationCreate, CertificationUpdate, ContactForm, ContactInfo, ContactInfoCreate,
    ContactInfoUpdate, ContactMessage, Education, EducationCreate, EducationUpdate, Experience,
    ExperienceCreate, ExperienceUpdate, Hero, HeroCreate, HeroUpdate, OrderUpdate, Project,
    ProjectCreate, ProjectUpdate, SectionConfig, SectionTitle, SectionTitleCreate,
    SectionTitleUpdate, SkillGroup, SkillGroupCreate, SkillGroupUpdate, Stat, StatCreate,
    StatUpdate, Testimonial, TestimonialCreate, TestimonialUpdate,
};
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite, SqlitePool};

/// Database manager for portfolio content storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

/// Parse an RFC 3339 column value into a UTC timestamp
fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc))
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or a
    /// migration statement fails.
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:")
            && !database_url.contains(":memory:")
        {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        // An in-memory SQLite database exists per connection; a second pooled
        // connection would see an empty schema, so those pools stay at one
        let pool = if connection_options.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .connect(&connection_options)
                .await?
        } else {
            SqlitePool::connect(&connection_options).await?
        };

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement fails.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS hero (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                subtitle TEXT NOT NULL,
                description TEXT NOT NULL,
                badge TEXT NOT NULL,
                badge_emoji TEXT NOT NULL,
                cta_text TEXT NOT NULL,
                cta_style TEXT NOT NULL DEFAULT 'bordered',
                is_active BOOLEAN NOT NULL DEFAULT 1,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS about (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                subtitle TEXT,
                description TEXT NOT NULL,
                image_url TEXT,
                additional_data TEXT,
                is_active BOOLEAN NOT NULL DEFAULT 1,
                order_index INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS experiences (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                company TEXT NOT NULL,
                position TEXT NOT NULL,
                duration TEXT NOT NULL,
                description TEXT NOT NULL,
                technologies TEXT,
                achievements TEXT,
                is_active BOOLEAN NOT NULL DEFAULT 1,
                order_index INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS stats (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                label TEXT NOT NULL,
                value TEXT NOT NULL,
                suffix TEXT NOT NULL DEFAULT '',
                icon TEXT,
                is_active BOOLEAN NOT NULL DEFAULT 1,
                order_index INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS testimonials (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                position TEXT,
                company TEXT,
                relation TEXT,
                message TEXT NOT NULL,
                is_active BOOLEAN NOT NULL DEFAULT 1,
                order_index INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS projects (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                short_description TEXT,
                image_url TEXT,
                live_url TEXT,
                github_url TEXT,
                technologies TEXT,
                category TEXT NOT NULL DEFAULT 'all',
                is_featured BOOLEAN NOT NULL DEFAULT 0,
                is_active BOOLEAN NOT NULL DEFAULT 1,
                order_index INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS contact_info (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL,
                value TEXT NOT NULL,
                label TEXT NOT NULL,
                is_active BOOLEAN NOT NULL DEFAULT 1,
                order_index INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS awards (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                organization TEXT NOT NULL,
                year TEXT NOT NULL,
                icon TEXT NOT NULL,
                is_active BOOLEAN NOT NULL DEFAULT 1,
                order_index INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS education (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                degree TEXT NOT NULL,
                institution TEXT NOT NULL,
                year TEXT NOT NULL,
                icon TEXT NOT NULL,
                is_active BOOLEAN NOT NULL DEFAULT 1,
                order_index INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS certifications (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                issuer TEXT NOT NULL,
                year TEXT NOT NULL,
                icon TEXT NOT NULL,
                certificate_link TEXT,
                certificate_id TEXT,
                is_active BOOLEAN NOT NULL DEFAULT 1,
                order_index INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS skills (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                category TEXT NOT NULL,
                skills TEXT NOT NULL,
                is_active BOOLEAN NOT NULL DEFAULT 1,
                order_index INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS section_titles (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                section_name TEXT NOT NULL,
                title TEXT NOT NULL,
                subtitle TEXT,
                description TEXT,
                main_title TEXT,
                emoji TEXT,
                is_active BOOLEAN NOT NULL DEFAULT 1,
                order_index INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_section_titles_name ON section_titles(section_name)",
        )
        .execute(&self.pool)
        .await?;

        // Legacy free-form configuration blob, kept during the migration
        // window; section_titles rows take precedence when present
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS section_config (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                config TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS contacts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                message TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_contacts_email ON contacts(email)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    // ================================
    // Hero banner
    // ================================

    fn row_to_hero(row: &SqliteRow) -> Result<Hero> {
        Ok(Hero {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            subtitle: row.try_get("subtitle")?,
            description: row.try_get("description")?,
            badge: row.try_get("badge")?,
            badge_emoji: row.try_get("badge_emoji")?,
            cta_text: row.try_get("cta_text")?,
            cta_style: row.try_get("cta_style")?,
            is_active: row.try_get("is_active")?,
            created_at: parse_timestamp(row.try_get("created_at")?)?,
            updated_at: parse_timestamp(row.try_get("updated_at")?)?,
        })
    }

    /// Get the currently active hero banner
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_active_hero(&self) -> Result<Option<Hero>> {
        let row = sqlx::query("SELECT * FROM hero WHERE is_active = 1 LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_hero).transpose()
    }

    /// Get a hero banner by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_hero(&self, id: i64) -> Result<Option<Hero>> {
        let row = sqlx::query("SELECT * FROM hero WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_hero).transpose()
    }

    /// List every hero row regardless of activation
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_all_heroes(&self) -> Result<Vec<Hero>> {
        let rows = sqlx::query("SELECT * FROM hero ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_hero).collect()
    }

    /// Create a new hero banner. When the new row is active, the previously
    /// active row is deactivated first so at most one hero stays active.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub async fn create_hero(&self, create: &HeroCreate) -> Result<Hero> {
        if create.is_active {
            sqlx::query("UPDATE hero SET is_active = 0, updated_at = ?1 WHERE is_active = 1")
                .bind(now_rfc3339())
                .execute(&self.pool)
                .await?;
        }

        let now = now_rfc3339();
        let result = sqlx::query(
            r#"
            INSERT INTO hero (title, subtitle, description, badge, badge_emoji, cta_text, cta_style, is_active, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(&create.title)
        .bind(&create.subtitle)
        .bind(&create.description)
        .bind(&create.badge)
        .bind(&create.badge_emoji)
        .bind(&create.cta_text)
        .bind(&create.cta_style)
        .bind(create.is_active)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_hero(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Hero row vanished after insert"))
    }

    /// Apply a partial update to a hero banner
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub async fn update_hero(&self, id: i64, update: &HeroUpdate) -> Result<Option<Hero>> {
        let Some(mut hero) = self.get_hero(id).await? else {
            return Ok(None);
        };

        if let Some(title) = &update.title {
            hero.title = title.clone();
        }
        if let Some(subtitle) = &update.subtitle {
            hero.subtitle = subtitle.clone();
        }
        if let Some(description) = &update.description {
            hero.description = description.clone();
        }
        if let Some(badge) = &update.badge {
            hero.badge = badge.clone();
        }
        if let Some(badge_emoji) = &update.badge_emoji {
            hero.badge_emoji = badge_emoji.clone();
        }
        if let Some(cta_text) = &update.cta_text {
            hero.cta_text = cta_text.clone();
        }
        if let Some(cta_style) = &update.cta_style {
            hero.cta_style = cta_style.clone();
        }
        if let Some(is_active) = update.is_active {
            hero.is_active = is_active;
        }
        hero.updated_at = Utc::now();

        sqlx::query(
            r#"
            UPDATE hero
            SET title = ?1, subtitle = ?2, description = ?3, badge = ?4, badge_emoji = ?5,
                cta_text = ?6, cta_style = ?7, is_active = ?8, updated_at = ?9
            WHERE id = ?10
            "#,
        )
        .bind(&hero.title)
        .bind(&hero.subtitle)
        .bind(&hero.description)
        .bind(&hero.badge)
        .bind(&hero.badge_emoji)
        .bind(&hero.cta_text)
        .bind(&hero.cta_style)
        .bind(hero.is_active)
        .bind(hero.updated_at.to_rfc3339())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Some(hero))
    }

    /// Delete a hero banner; returns false when the id was absent
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn delete_hero(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM hero WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ================================
    // About blurbs
    // ================================

    fn row_to_about(row: &SqliteRow) -> Result<About> {
        let additional_data: Option<String> = row.try_get("additional_data")?;
        Ok(About {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            subtitle: row.try_get("subtitle")?,
            description: row.try_get("description")?,
            image_url: row.try_get("image_url")?,
            additional_data: additional_data
                .as_deref()
                .map(serde_json::from_str)
                .transpose()?,
            is_active: row.try_get("is_active")?,
            order_index: row.try_get("order_index")?,
            created_at: parse_timestamp(row.try_get("created_at")?)?,
            updated_at: parse_timestamp(row.try_get("updated_at")?)?,
        })
    }

    /// List active about blurbs in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_active_about(&self) -> Result<Vec<About>> {
        let rows =
            sqlx::query("SELECT * FROM about WHERE is_active = 1 ORDER BY order_index, id")
                .fetch_all(&self.pool)
                .await?;

        rows.iter().map(Self::row_to_about).collect()
    }

    /// List all about blurbs in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_all_about(&self) -> Result<Vec<About>> {
        let rows = sqlx::query("SELECT * FROM about ORDER BY order_index, id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_about).collect()
    }

    /// Get an about blurb by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_about(&self, id: i64) -> Result<Option<About>> {
        let row = sqlx::query("SELECT * FROM about WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_about).transpose()
    }

    /// Create an about blurb
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn create_about(&self, create: &AboutCreate) -> Result<About> {
        let now = now_rfc3339();
        let additional_data = create
            .additional_data
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        let result = sqlx::query(
            r#"
            INSERT INTO about (title, subtitle, description, image_url, additional_data, is_active, order_index, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(&create.title)
        .bind(&create.subtitle)
        .bind(&create.description)
        .bind(&create.image_url)
        .bind(additional_data)
        .bind(create.is_active)
        .bind(create.order_index)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_about(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("About row vanished after insert"))
    }

    /// Apply a partial update to an about blurb
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub async fn update_about(&self, id: i64, update: &AboutUpdate) -> Result<Option<About>> {
        let Some(mut about) = self.get_about(id).await? else {
            return Ok(None);
        };

        if let Some(title) = &update.title {
            about.title = title.clone();
        }
        if let Some(subtitle) = &update.subtitle {
            about.subtitle = Some(subtitle.clone());
        }
        if let Some(description) = &update.description {
            about.description = description.clone();
        }
        if let Some(image_url) = &update.image_url {
            about.image_url = Some(image_url.clone());
        }
        if let Some(additional_data) = &update.additional_data {
            about.additional_data = Some(additional_data.clone());
        }
        if let Some(is_active) = update.is_active {
            about.is_active = is_active;
        }
        if let Some(order_index) = update.order_index {
            about.order_index = order_index;
        }
        about.updated_at = Utc::now();

        let additional_data = about
            .additional_data
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        sqlx::query(
            r#"
            UPDATE about
            SET title = ?1, subtitle = ?2, description = ?3, image_url = ?4, additional_data = ?5,
                is_active = ?6, order_index = ?7, updated_at = ?8
            WHERE id = ?9
            "#,
        )
        .bind(&about.title)
        .bind(&about.subtitle)
        .bind(&about.description)
        .bind(&about.image_url)
        .bind(additional_data)
        .bind(about.is_active)
        .bind(about.order_index)
        .bind(about.updated_at.to_rfc3339())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Some(about))
    }

    /// Delete an about blurb; returns false when the id was absent
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn delete_about(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM about WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Bulk-apply display-order changes to about blurbs. Unknown ids are
    /// skipped. Returns the full re-sorted list.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub async fn set_about_order(&self, updates: &[OrderUpdate]) -> Result<Vec<About>> {
        for update in updates {
            sqlx::query("UPDATE about SET order_index = ?1, updated_at = ?2 WHERE id = ?3")
                .bind(update.order_index)
                .bind(now_rfc3339())
                .bind(update.id)
                .execute(&self.pool)
                .await?;
        }

        self.list_all_about().await
    }

    // ================================
    // Experience entries
    // ================================

    fn row_to_experience(row: &SqliteRow) -> Result<Experience> {
        Ok(Experience {
            id: row.try_get("id")?,
            company: row.try_get("company")?,
            position: row.try_get("position")?,
            duration: row.try_get("duration")?,
            description: row.try_get("description")?,
            technologies: row.try_get("technologies")?,
            achievements: row.try_get("achievements")?,
            is_active: row.try_get("is_active")?,
            order_index: row.try_get("order_index")?,
            created_at: parse_timestamp(row.try_get("created_at")?)?,
            updated_at: parse_timestamp(row.try_get("updated_at")?)?,
        })
    }

    /// List active experience entries in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_active_experiences(&self) -> Result<Vec<Experience>> {
        let rows =
            sqlx::query("SELECT * FROM experiences WHERE is_active = 1 ORDER BY order_index, id")
                .fetch_all(&self.pool)
                .await?;

        rows.iter().map(Self::row_to_experience).collect()
    }

    /// List all experience entries in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_all_experiences(&self) -> Result<Vec<Experience>> {
        let rows = sqlx::query("SELECT * FROM experiences ORDER BY order_index, id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_experience).collect()
    }

    /// Get an experience entry by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_experience(&self, id: i64) -> Result<Option<Experience>> {
        let row = sqlx::query("SELECT * FROM experiences WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_experience).transpose()
    }

    /// Create an experience entry
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn create_experience(&self, create: &ExperienceCreate) -> Result<Experience> {
        let now = now_rfc3339();
        let result = sqlx::query(
            r#"
            INSERT INTO experiences (company, position, duration, description, technologies, achievements, is_active, order_index, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(&create.company)
        .bind(&create.position)
        .bind(&create.duration)
        .bind(&create.description)
        .bind(&create.technologies)
        .bind(&create.achievements)
        .bind(create.is_active)
        .bind(create.order_index)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_experience(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Experience row vanished after insert"))
    }

    /// Apply a partial update to an experience entry
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub async fn update_experience(
        &self,
        id: i64,
        update: &ExperienceUpdate,
    ) -> Result<Option<Experience>> {
        let Some(mut experience) = self.get_experience(id).await? else {
            return Ok(None);
        };

        if let Some(company) = &update.company {
            experience.company = company.clone();
        }
        if let Some(position) = &update.position {
            experience.position = position.clone();
        }
        if let Some(duration) = &update.duration {
            experience.duration = duration.clone();
        }
        if let Some(description) = &update.description {
            experience.description = description.clone();
        }
        if let Some(technologies) = &update.technologies {
            experience.technologies = Some(technologies.clone());
        }
        if let Some(achievements) = &update.achievements {
            experience.achievements = Some(achievements.clone());
        }
        if let Some(is_active) = update.is_active {
            experience.is_active = is_active;
        }
        if let Some(order_index) = update.order_index {
            experience.order_index = order_index;
        }
        experience.updated_at = Utc::now();

        sqlx::query(
            r#"
            UPDATE experiences
            SET company = ?1, position = ?2, duration = ?3, description = ?4, technologies = ?5,
                achievements = ?6, is_active = ?7, order_index = ?8, updated_at = ?9
            WHERE id = ?10
            "#,
        )
        .bind(&experience.company)
        .bind(&experience.position)
        .bind(&experience.duration)
        .bind(&experience.description)
        .bind(&experience.technologies)
        .bind(&experience.achievements)
        .bind(experience.is_active)
        .bind(experience.order_index)
        .bind(experience.updated_at.to_rfc3339())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Some(experience))
    }

    /// Delete an experience entry; returns false when the id was absent
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn delete_experience(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM experiences WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ================================
    // Stats
    // ================================

    fn row_to_stat(row: &SqliteRow) -> Result<Stat> {
        Ok(Stat {
            id: row.try_get("id")?,
            label: row.try_get("label")?,
            value: row.try_get("value")?,
            suffix: row.try_get("suffix")?,
            icon: row.try_get("icon")?,
            is_active: row.try_get("is_active")?,
            order_index: row.try_get("order_index")?,
            created_at: parse_timestamp(row.try_get("created_at")?)?,
            updated_at: parse_timestamp(row.try_get("updated_at")?)?,
        })
    }

    /// List active stats in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_active_stats(&self) -> Result<Vec<Stat>> {
        let rows =
            sqlx::query("SELECT * FROM stats WHERE is_active = 1 ORDER BY order_index, id")
                .fetch_all(&self.pool)
                .await?;

        rows.iter().map(Self::row_to_stat).collect()
    }

    /// List all stats in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_all_stats(&self) -> Result<Vec<Stat>> {
        let rows = sqlx::query("SELECT * FROM stats ORDER BY order_index, id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_stat).collect()
    }

    /// Get a stat by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_stat(&self, id: i64) -> Result<Option<Stat>> {
        let row = sqlx::query("SELECT * FROM stats WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_stat).transpose()
    }

    /// Create a stat
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn create_stat(&self, create: &StatCreate) -> Result<Stat> {
        let now = now_rfc3339();
        let result = sqlx::query(
            r#"
            INSERT INTO stats (label, value, suffix, icon, is_active, order_index, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&create.label)
        .bind(&create.value)
        .bind(&create.suffix)
        .bind(&create.icon)
        .bind(create.is_active)
        .bind(create.order_index)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_stat(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Stat row vanished after insert"))
    }

    /// Apply a partial update to a stat
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub async fn update_stat(&self, id: i64, update: &StatUpdate) -> Result<Option<Stat>> {
        let Some(mut stat) = self.get_stat(id).await? else {
            return Ok(None);
        };

        if let Some(label) = &update.label {
            stat.label = label.clone();
        }
        if let Some(value) = &update.value {
            stat.value = value.clone();
        }
        if let Some(suffix) = &update.suffix {
            stat.suffix = suffix.clone();
        }
        if let Some(icon) = &update.icon {
            stat.icon = Some(icon.clone());
        }
        if let Some(is_active) = update.is_active {
            stat.is_active = is_active;
        }
        if let Some(order_index) = update.order_index {
            stat.order_index = order_index;
        }
        stat.updated_at = Utc::now();

        sqlx::query(
            r#"
            UPDATE stats
            SET label = ?1, value = ?2, suffix = ?3, icon = ?4, is_active = ?5, order_index = ?6, updated_at = ?7
            WHERE id = ?8
            "#,
        )
        .bind(&stat.label)
        .bind(&stat.value)
        .bind(&stat.suffix)
        .bind(&stat.icon)
        .bind(stat.is_active)
        .bind(stat.order_index)
        .bind(stat.updated_at.to_rfc3339())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Some(stat))
    }

    /// Delete a stat; returns false when the id was absent
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn delete_stat(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM stats WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ================================
    // Testimonials
    // ================================

    fn row_to_testimonial(row: &SqliteRow) -> Result<Testimonial> {
        Ok(Testimonial {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            position: row.try_get("position")?,
            company: row.try_get("company")?,
            relation: row.try_get("relation")?,
            message: row.try_get("message")?,
            is_active: row.try_get("is_active")?,
            order_index: row.try_get("order_index")?,
            created_at: parse_timestamp(row.try_get("created_at")?)?,
            updated_at: parse_timestamp(row.try_get("updated_at")?)?,
        })
    }

    /// List active testimonials in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_active_testimonials(&self) -> Result<Vec<Testimonial>> {
        let rows =
            sqlx::query("SELECT * FROM testimonials WHERE is_active = 1 ORDER BY order_index, id")
                .fetch_all(&self.pool)
                .await?;

        rows.iter().map(Self::row_to_testimonial).collect()
    }

    /// List all testimonials in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_all_testimonials(&self) -> Result<Vec<Testimonial>> {
        let rows = sqlx::query("SELECT * FROM testimonials ORDER BY order_index, id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_testimonial).collect()
    }

    /// Get a testimonial by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_testimonial(&self, id: i64) -> Result<Option<Testimonial>> {
        let row = sqlx::query("SELECT * FROM testimonials WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_testimonial).transpose()
    }

    /// Create a testimonial
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn create_testimonial(&self, create: &TestimonialCreate) -> Result<Testimonial> {
        let now = now_rfc3339();
        let result = sqlx::query(
            r#"
            INSERT INTO testimonials (name, position, company, relation, message, is_active, order_index, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(&create.name)
        .bind(&create.position)
        .bind(&create.company)
        .bind(&create.relation)
        .bind(&create.message)
        .bind(create.is_active)
        .bind(create.order_index)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_testimonial(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Testimonial row vanished after insert"))
    }

    /// Apply a partial update to a testimonial
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub async fn update_testimonial(
        &self,
        id: i64,
        update: &TestimonialUpdate,
    ) -> Result<Option<Testimonial>> {
        let Some(mut testimonial) = self.get_testimonial(id).await? else {
            return Ok(None);
        };

        if let Some(name) = &update.name {
            testimonial.name = name.clone();
        }
        if let Some(position) = &update.position {
            testimonial.position = Some(position.clone());
        }
        if let Some(company) = &update.company {
            testimonial.company = Some(company.clone());
        }
        if let Some(relation) = &update.relation {
            testimonial.relation = Some(relation.clone());
        }
        if let Some(message) = &update.message {
            testimonial.message = message.clone();
        }
        if let Some(is_active) = update.is_active {
            testimonial.is_active = is_active;
        }
        if let Some(order_index) = update.order_index {
            testimonial.order_index = order_index;
        }
        testimonial.updated_at = Utc::now();

        sqlx::query(
            r#"
            UPDATE testimonials
            SET name = ?1, position = ?2, company = ?3, relation = ?4, message = ?5,
                is_active = ?6, order_index = ?7, updated_at = ?8
            WHERE id = ?9
            "#,
        )
        .bind(&testimonial.name)
        .bind(&testimonial.position)
        .bind(&testimonial.company)
        .bind(&testimonial.relation)
        .bind(&testimonial.message)
        .bind(testimonial.is_active)
        .bind(testimonial.order_index)
        .bind(testimonial.updated_at.to_rfc3339())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Some(testimonial))
    }

    /// Delete a testimonial; returns false when the id was absent
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn delete_testimonial(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ================================
    // Projects
    // ================================

    fn row_to_project(row: &SqliteRow) -> Result<Project> {
        Ok(Project {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            short_description: row.try_get("short_description")?,
            image_url: row.try_get("image_url")?,
            live_url: row.try_get("live_url")?,
            github_url: row.try_get("github_url")?,
            technologies: row.try_get("technologies")?,
            category: row.try_get("category")?,
            is_featured: row.try_get("is_featured")?,
            is_active: row.try_get("is_active")?,
            order_index: row.try_get("order_index")?,
            created_at: parse_timestamp(row.try_get("created_at")?)?,
            updated_at: parse_timestamp(row.try_get("updated_at")?)?,
        })
    }

    /// List active projects in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_active_projects(&self) -> Result<Vec<Project>> {
        let rows =
            sqlx::query("SELECT * FROM projects WHERE is_active = 1 ORDER BY order_index, id")
                .fetch_all(&self.pool)
                .await?;

        rows.iter().map(Self::row_to_project).collect()
    }

    /// List active projects in one category
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_projects_by_category(&self, category: &str) -> Result<Vec<Project>> {
        let rows = sqlx::query(
            "SELECT * FROM projects WHERE category = ?1 AND is_active = 1 ORDER BY order_index, id",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_project).collect()
    }

    /// List all projects in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_all_projects(&self) -> Result<Vec<Project>> {
        let rows = sqlx::query("SELECT * FROM projects ORDER BY order_index, id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_project).collect()
    }

    /// Get a project by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_project(&self, id: i64) -> Result<Option<Project>> {
        let row = sqlx::query("SELECT * FROM projects WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_project).transpose()
    }

    /// Create a project
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn create_project(&self, create: &ProjectCreate) -> Result<Project> {
        let now = now_rfc3339();
        let result = sqlx::query(
            r#"
            INSERT INTO projects (title, description, short_description, image_url, live_url, github_url, technologies, category, is_featured, is_active, order_index, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
            "#,
        )
        .bind(&create.title)
        .bind(&create.description)
        .bind(&create.short_description)
        .bind(&create.image_url)
        .bind(&create.live_url)
        .bind(&create.github_url)
        .bind(&create.technologies)
        .bind(&create.category)
        .bind(create.is_featured)
        .bind(create.is_active)
        .bind(create.order_index)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_project(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Project row vanished after insert"))
    }

    /// Apply a partial update to a project
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub async fn update_project(
        &self,
        id: i64,
        update: &ProjectUpdate,
    ) -> Result<Option<Project>> {
        let Some(mut project) = self.get_project(id).await? else {
            return Ok(None);
        };

        if let Some(title) = &update.title {
            project.title = title.clone();
        }
        if let Some(description) = &update.description {
            project.description = description.clone();
        }
        if let Some(short_description) = &update.short_description {
            project.short_description = Some(short_description.clone());
        }
        if let Some(image_url) = &update.image_url {
            project.image_url = Some(image_url.clone());
        }
        if let Some(live_url) = &update.live_url {
            project.live_url = Some(live_url.clone());
        }
        if let Some(github_url) = &update.github_url {
            project.github_url = Some(github_url.clone());
        }
        if let Some(technologies) = &update.technologies {
            project.technologies = Some(technologies.clone());
        }
        if let Some(category) = &update.category {
            project.category = category.clone();
        }
        if let Some(is_featured) = update.is_featured {
            project.is_featured = is_featured;
        }
        if let Some(is_active) = update.is_active {
            project.is_active = is_active;
        }
        if let Some(order_index) = update.order_index {
            project.order_index = order_index;
        }
        project.updated_at = Utc::now();

        sqlx::query(
            r#"
            UPDATE projects
            SET title = ?1, description = ?2, short_description = ?3, image_url = ?4, live_url = ?5,
                github_url = ?6, technologies = ?7, category = ?8, is_featured = ?9, is_active = ?10,
                order_index = ?11, updated_at = ?12
            WHERE id = ?13
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.short_description)
        .bind(&project.image_url)
        .bind(&project.live_url)
        .bind(&project.github_url)
        .bind(&project.technologies)
        .bind(&project.category)
        .bind(project.is_featured)
        .bind(project.is_active)
        .bind(project.order_index)
        .bind(project.updated_at.to_rfc3339())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Some(project))
    }

    /// Delete a project; returns false when the id was absent
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn delete_project(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ================================
    // Contact channels
    // ================================

    fn row_to_contact_info(row: &SqliteRow) -> Result<ContactInfo> {
        Ok(ContactInfo {
            id: row.try_get("id")?,
            kind: row.try_get("type")?,
            value: row.try_get("value")?,
            label: row.try_get("label")?,
            is_active: row.try_get("is_active")?,
            order_index: row.try_get("order_index")?,
            created_at: parse_timestamp(row.try_get("created_at")?)?,
            updated_at: parse_timestamp(row.try_get("updated_at")?)?,
        })
    }

    /// List active contact channels in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_active_contact_info(&self) -> Result<Vec<ContactInfo>> {
        let rows =
            sqlx::query("SELECT * FROM contact_info WHERE is_active = 1 ORDER BY order_index, id")
                .fetch_all(&self.pool)
                .await?;

        rows.iter().map(Self::row_to_contact_info).collect()
    }

    /// List all contact channels in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_all_contact_info(&self) -> Result<Vec<ContactInfo>> {
        let rows = sqlx::query("SELECT * FROM contact_info ORDER BY order_index, id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_contact_info).collect()
    }

    /// Get a contact channel by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_contact_info(&self, id: i64) -> Result<Option<ContactInfo>> {
        let row = sqlx::query("SELECT * FROM contact_info WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_contact_info).transpose()
    }

    /// Create a contact channel
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn create_contact_info(&self, create: &ContactInfoCreate) -> Result<ContactInfo> {
        let now = now_rfc3339();
        let result = sqlx::query(
            r#"
            INSERT INTO contact_info (type, value, label, is_active, order_index, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&create.kind)
        .bind(&create.value)
        .bind(&create.label)
        .bind(create.is_active)
        .bind(create.order_index)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_contact_info(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Contact info row vanished after insert"))
    }

    /// Apply a partial update to a contact channel
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub async fn update_contact_info(
        &self,
        id: i64,
        update: &ContactInfoUpdate,
    ) -> Result<Option<ContactInfo>> {
        let Some(mut info) = self.get_contact_info(id).await? else {
            return Ok(None);
        };

        if let Some(kind) = &update.kind {
            info.kind = kind.clone();
        }
        if let Some(value) = &update.value {
            info.value = value.clone();
        }
        if let Some(label) = &update.label {
            info.label = label.clone();
        }
        if let Some(is_active) = update.is_active {
            info.is_active = is_active;
        }
        if let Some(order_index) = update.order_index {
            info.order_index = order_index;
        }
        info.updated_at = Utc::now();

        sqlx::query(
            r#"
            UPDATE contact_info
            SET type = ?1, value = ?2, label = ?3, is_active = ?4, order_index = ?5, updated_at = ?6
            WHERE id = ?7
            "#,
        )
        .bind(&info.kind)
        .bind(&info.value)
        .bind(&info.label)
        .bind(info.is_active)
        .bind(info.order_index)
        .bind(info.updated_at.to_rfc3339())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Some(info))
    }

    /// Delete a contact channel; returns false when the id was absent
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn delete_contact_info(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM contact_info WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ================================
    // Awards
    // ================================

    fn row_to_award(row: &SqliteRow) -> Result<Award> {
        Ok(Award {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            organization: row.try_get("organization")?,
            year: row.try_get("year")?,
            icon: row.try_get("icon")?,
            is_active: row.try_get("is_active")?,
            order_index: row.try_get("order_index")?,
            created_at: parse_timestamp(row.try_get("created_at")?)?,
            updated_at: parse_timestamp(row.try_get("updated_at")?)?,
        })
    }

    /// List active awards in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_active_awards(&self) -> Result<Vec<Award>> {
        let rows =
            sqlx::query("SELECT * FROM awards WHERE is_active = 1 ORDER BY order_index, id")
                .fetch_all(&self.pool)
                .await?;

        rows.iter().map(Self::row_to_award).collect()
    }

    /// List all awards in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_all_awards(&self) -> Result<Vec<Award>> {
        let rows = sqlx::query("SELECT * FROM awards ORDER BY order_index, id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_award).collect()
    }

    /// Get an award by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_award(&self, id: i64) -> Result<Option<Award>> {
        let row = sqlx::query("SELECT * FROM awards WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_award).transpose()
    }

    /// Create an award
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn create_award(&self, create: &AwardCreate) -> Result<Award> {
        let now = now_rfc3339();
        let result = sqlx::query(
            r#"
            INSERT INTO awards (title, organization, year, icon, is_active, order_index, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&create.title)
        .bind(&create.organization)
        .bind(&create.year)
        .bind(&create.icon)
        .bind(create.is_active)
        .bind(create.order_index)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_award(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Award row vanished after insert"))
    }

    /// Apply a partial update to an award
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub async fn update_award(&self, id: i64, update: &AwardUpdate) -> Result<Option<Award>> {
        let Some(mut award) = self.get_award(id).await? else {
            return Ok(None);
        };

        if let Some(title) = &update.title {
            award.title = title.clone();
        }
        if let Some(organization) = &update.organization {
            award.organization = organization.clone();
        }
        if let Some(year) = &update.year {
            award.year = year.clone();
        }
        if let Some(icon) = &update.icon {
            award.icon = icon.clone();
        }
        if let Some(is_active) = update.is_active {
            award.is_active = is_active;
        }
        if let Some(order_index) = update.order_index {
            award.order_index = order_index;
        }
        award.updated_at = Utc::now();

        sqlx::query(
            r#"
            UPDATE awards
            SET title = ?1, organization = ?2, year = ?3, icon = ?4, is_active = ?5, order_index = ?6, updated_at = ?7
            WHERE id = ?8
            "#,
        )
        .bind(&award.title)
        .bind(&award.organization)
        .bind(&award.year)
        .bind(&award.icon)
        .bind(award.is_active)
        .bind(award.order_index)
        .bind(award.updated_at.to_rfc3339())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Some(award))
    }

    /// Delete an award; returns false when the id was absent
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn delete_award(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM awards WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ================================
    // Education
    // ================================

    fn row_to_education(row: &SqliteRow) -> Result<Education> {
        Ok(Education {
            id: row.try_get("id")?,
            degree: row.try_get("degree")?,
            institution: row.try_get("institution")?,
            year: row.try_get("year")?,
            icon: row.try_get("icon")?,
            is_active: row.try_get("is_active")?,
            order_index: row.try_get("order_index")?,
            created_at: parse_timestamp(row.try_get("created_at")?)?,
            updated_at: parse_timestamp(row.try_get("updated_at")?)?,
        })
    }

    /// List active education entries in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_active_education(&self) -> Result<Vec<Education>> {
        let rows =
            sqlx::query("SELECT * FROM education WHERE is_active = 1 ORDER BY order_index, id")
                .fetch_all(&self.pool)
                .await?;

        rows.iter().map(Self::row_to_education).collect()
    }

    /// List all education entries in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_all_education(&self) -> Result<Vec<Education>> {
        let rows = sqlx::query("SELECT * FROM education ORDER BY order_index, id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_education).collect()
    }

    /// Get an education entry by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_education(&self, id: i64) -> Result<Option<Education>> {
        let row = sqlx::query("SELECT * FROM education WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_education).transpose()
    }

    /// Create an education entry
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn create_education(&self, create: &EducationCreate) -> Result<Education> {
        let now = now_rfc3339();
        let result = sqlx::query(
            r#"
            INSERT INTO education (degree, institution, year, icon, is_active, order_index, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&create.degree)
        .bind(&create.institution)
        .bind(&create.year)
        .bind(&create.icon)
        .bind(create.is_active)
        .bind(create.order_index)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_education(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Education row vanished after insert"))
    }

    /// Apply a partial update to an education entry
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub async fn update_education(
        &self,
        id: i64,
        update: &EducationUpdate,
    ) -> Result<Option<Education>> {
        let Some(mut education) = self.get_education(id).await? else {
            return Ok(None);
        };

        if let Some(degree) = &update.degree {
            education.degree = degree.clone();
        }
        if let Some(institution) = &update.institution {
            education.institution = institution.clone();
        }
        if let Some(year) = &update.year {
            education.year = year.clone();
        }
        if let Some(icon) = &update.icon {
            education.icon = icon.clone();
        }
        if let Some(is_active) = update.is_active {
            education.is_active = is_active;
        }
        if let Some(order_index) = update.order_index {
            education.order_index = order_index;
        }
        education.updated_at = Utc::now();

        sqlx::query(
            r#"
            UPDATE education
            SET degree = ?1, institution = ?2, year = ?3, icon = ?4, is_active = ?5, order_index = ?6, updated_at = ?7
            WHERE id = ?8
            "#,
        )
        .bind(&education.degree)
        .bind(&education.institution)
        .bind(&education.year)
        .bind(&education.icon)
        .bind(education.is_active)
        .bind(education.order_index)
        .bind(education.updated_at.to_rfc3339())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Some(education))
    }

    /// Delete an education entry; returns false when the id was absent
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn delete_education(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM education WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ================================
    // Certifications
    // ================================

    fn row_to_certification(row: &SqliteRow) -> Result<Certification> {
        Ok(Certification {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            issuer: row.try_get("issuer")?,
            year: row.try_get("year")?,
            icon: row.try_get("icon")?,
            certificate_link: row.try_get("certificate_link")?,
            certificate_id: row.try_get("certificate_id")?,
            is_active: row.try_get("is_active")?,
            order_index: row.try_get("order_index")?,
            created_at: parse_timestamp(row.try_get("created_at")?)?,
            updated_at: parse_timestamp(row.try_get("updated_at")?)?,
        })
    }

    /// List active certifications in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_active_certifications(&self) -> Result<Vec<Certification>> {
        let rows = sqlx::query(
            "SELECT * FROM certifications WHERE is_active = 1 ORDER BY order_index, id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_certification).collect()
    }

    /// List all certifications in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_all_certifications(&self) -> Result<Vec<Certification>> {
        let rows = sqlx::query("SELECT * FROM certifications ORDER BY order_index, id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_certification).collect()
    }

    /// Get a certification by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_certification(&self, id: i64) -> Result<Option<Certification>> {
        let row = sqlx::query("SELECT * FROM certifications WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_certification).transpose()
    }

    /// Create a certification
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn create_certification(
        &self,
        create: &CertificationCreate,
    ) -> Result<Certification> {
        let now = now_rfc3339();
        let result = sqlx::query(
            r#"
            INSERT INTO certifications (name, issuer, year, icon, certificate_link, certificate_id, is_active, order_index, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(&create.name)
        .bind(&create.issuer)
        .bind(&create.year)
        .bind(&create.icon)
        .bind(&create.certificate_link)
        .bind(&create.certificate_id)
        .bind(create.is_active)
        .bind(create.order_index)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_certification(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Certification row vanished after insert"))
    }

    /// Apply a partial update to a certification
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub async fn update_certification(
        &self,
        id: i64,
        update: &CertificationUpdate,
    ) -> Result<Option<Certification>> {
        let Some(mut certification) = self.get_certification(id).await? else {
            return Ok(None);
        };

        if let Some(name) = &update.name {
            certification.name = name.clone();
        }
        if let Some(issuer) = &update.issuer {
            certification.issuer = issuer.clone();
        }
        if let Some(year) = &update.year {
            certification.year = year.clone();
        }
        if let Some(icon) = &update.icon {
            certification.icon = icon.clone();
        }
        if let Some(certificate_link) = &update.certificate_link {
            certification.certificate_link = Some(certificate_link.clone());
        }
        if let Some(certificate_id) = &update.certificate_id {
            certification.certificate_id = Some(certificate_id.clone());
        }
        if let Some(is_active) = update.is_active {
            certification.is_active = is_active;
        }
        if let Some(order_index) = update.order_index {
            certification.order_index = order_index;
        }
        certification.updated_at = Utc::now();

        sqlx::query(
            r#"
            UPDATE certifications
            SET name = ?1, issuer = ?2, year = ?3, icon = ?4, certificate_link = ?5,
                certificate_id = ?6, is_active = ?7, order_index = ?8, updated_at = ?9
            WHERE id = ?10
            "#,
        )
        .bind(&certification.name)
        .bind(&certification.issuer)
        .bind(&certification.year)
        .bind(&certification.icon)
        .bind(&certification.certificate_link)
        .bind(&certification.certificate_id)
        .bind(certification.is_active)
        .bind(certification.order_index)
        .bind(certification.updated_at.to_rfc3339())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Some(certification))
    }

    /// Delete a certification; returns false when the id was absent
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn delete_certification(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM certifications WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ================================
    // Skill groups
    // ================================

    fn row_to_skill_group(row: &SqliteRow) -> Result<SkillGroup> {
        Ok(SkillGroup {
            id: row.try_get("id")?,
            category: row.try_get("category")?,
            skills: row.try_get("skills")?,
            is_active: row.try_get("is_active")?,
            order_index: row.try_get("order_index")?,
            created_at: parse_timestamp(row.try_get("created_at")?)?,
            updated_at: parse_timestamp(row.try_get("updated_at")?)?,
        })
    }

    /// List active skill groups in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_active_skill_groups(&self) -> Result<Vec<SkillGroup>> {
        let rows =
            sqlx::query("SELECT * FROM skills WHERE is_active = 1 ORDER BY order_index, id")
                .fetch_all(&self.pool)
                .await?;

        rows.iter().map(Self::row_to_skill_group).collect()
    }

    /// List all skill groups in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_all_skill_groups(&self) -> Result<Vec<SkillGroup>> {
        let rows = sqlx::query("SELECT * FROM skills ORDER BY order_index, id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_skill_group).collect()
    }

    /// Get a skill group by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_skill_group(&self, id: i64) -> Result<Option<SkillGroup>> {
        let row = sqlx::query("SELECT * FROM skills WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_skill_group).transpose()
    }

    /// Create a skill group
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn create_skill_group(&self, create: &SkillGroupCreate) -> Result<SkillGroup> {
        let now = now_rfc3339();
        let result = sqlx::query(
            r#"
            INSERT INTO skills (category, skills, is_active, order_index, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&create.category)
        .bind(&create.skills)
        .bind(create.is_active)
        .bind(create.order_index)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_skill_group(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Skill group row vanished after insert"))
    }

    /// Apply a partial update to a skill group
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub async fn update_skill_group(
        &self,
        id: i64,
        update: &SkillGroupUpdate,
    ) -> Result<Option<SkillGroup>> {
        let Some(mut group) = self.get_skill_group(id).await? else {
            return Ok(None);
        };

        if let Some(category) = &update.category {
            group.category = category.clone();
        }
        if let Some(skills) = &update.skills {
            group.skills = skills.clone();
        }
        if let Some(is_active) = update.is_active {
            group.is_active = is_active;
        }
        if let Some(order_index) = update.order_index {
            group.order_index = order_index;
        }
        group.updated_at = Utc::now();

        sqlx::query(
            r#"
            UPDATE skills
            SET category = ?1, skills = ?2, is_active = ?3, order_index = ?4, updated_at = ?5
            WHERE id = ?6
            "#,
        )
        .bind(&group.category)
        .bind(&group.skills)
        .bind(group.is_active)
        .bind(group.order_index)
        .bind(group.updated_at.to_rfc3339())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Some(group))
    }

    /// Delete a skill group; returns false when the id was absent
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn delete_skill_group(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM skills WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ================================
    // Section titles
    // ================================

    fn row_to_section_title(row: &SqliteRow) -> Result<SectionTitle> {
        Ok(SectionTitle {
            id: row.try_get("id")?,
            section_name: row.try_get("section_name")?,
            title: row.try_get("title")?,
            subtitle: row.try_get("subtitle")?,
            description: row.try_get("description")?,
            main_title: row.try_get("main_title")?,
            emoji: row.try_get("emoji")?,
            is_active: row.try_get("is_active")?,
            order_index: row.try_get("order_index")?,
            created_at: parse_timestamp(row.try_get("created_at")?)?,
            updated_at: parse_timestamp(row.try_get("updated_at")?)?,
        })
    }

    /// List active section titles in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_active_section_titles(&self) -> Result<Vec<SectionTitle>> {
        let rows = sqlx::query(
            "SELECT * FROM section_titles WHERE is_active = 1 ORDER BY order_index, id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_section_title).collect()
    }

    /// List all section titles in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_all_section_titles(&self) -> Result<Vec<SectionTitle>> {
        let rows = sqlx::query("SELECT * FROM section_titles ORDER BY order_index, id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_section_title).collect()
    }

    /// Get the active section title for one section key
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_section_title_by_name(
        &self,
        section_name: &str,
    ) -> Result<Option<SectionTitle>> {
        let row = sqlx::query(
            "SELECT * FROM section_titles WHERE section_name = ?1 AND is_active = 1 LIMIT 1",
        )
        .bind(section_name)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_section_title).transpose()
    }

    /// Get a section title by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_section_title(&self, id: i64) -> Result<Option<SectionTitle>> {
        let row = sqlx::query("SELECT * FROM section_titles WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_section_title).transpose()
    }

    /// Create a section title
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn create_section_title(
        &self,
        create: &SectionTitleCreate,
    ) -> Result<SectionTitle> {
        let now = now_rfc3339();
        let result = sqlx::query(
            r#"
            INSERT INTO section_titles (section_name, title, subtitle, description, main_title, emoji, is_active, order_index, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(&create.section_name)
        .bind(&create.title)
        .bind(&create.subtitle)
        .bind(&create.description)
        .bind(&create.main_title)
        .bind(&create.emoji)
        .bind(create.is_active)
        .bind(create.order_index)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_section_title(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Section title row vanished after insert"))
    }

    /// Apply a partial update to a section title
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub async fn update_section_title(
        &self,
        id: i64,
        update: &SectionTitleUpdate,
    ) -> Result<Option<SectionTitle>> {
        let Some(mut section_title) = self.get_section_title(id).await? else {
            return Ok(None);
        };

        if let Some(title) = &update.title {
            section_title.title = title.clone();
        }
        if let Some(subtitle) = &update.subtitle {
            section_title.subtitle = Some(subtitle.clone());
        }
        if let Some(description) = &update.description {
            section_title.description = Some(description.clone());
        }
        if let Some(main_title) = &update.main_title {
            section_title.main_title = Some(main_title.clone());
        }
        if let Some(emoji) = &update.emoji {
            section_title.emoji = Some(emoji.clone());
        }
        if let Some(is_active) = update.is_active {
            section_title.is_active = is_active;
        }
        if let Some(order_index) = update.order_index {
            section_title.order_index = order_index;
        }
        section_title.updated_at = Utc::now();

        sqlx::query(
            r#"
            UPDATE section_titles
            SET title = ?1, subtitle = ?2, description = ?3, main_title = ?4, emoji = ?5,
                is_active = ?6, order_index = ?7, updated_at = ?8
            WHERE id = ?9
            "#,
        )
        .bind(&section_title.title)
        .bind(&section_title.subtitle)
        .bind(&section_title.description)
        .bind(&section_title.main_title)
        .bind(&section_title.emoji)
        .bind(section_title.is_active)
        .bind(section_title.order_index)
        .bind(section_title.updated_at.to_rfc3339())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Some(section_title))
    }

    /// Delete a section title; returns false when the id was absent
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn delete_section_title(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM section_titles WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ================================
    // Legacy section configuration blob
    // ================================

    fn row_to_section_config(row: &SqliteRow) -> Result<SectionConfig> {
        let config: String = row.try_get("config")?;
        Ok(SectionConfig {
            id: row.try_get("id")?,
            config: serde_json::from_str(&config)?,
            created_at: parse_timestamp(row.try_get("created_at")?)?,
            updated_at: parse_timestamp(row.try_get("updated_at")?)?,
        })
    }

    /// Get the stored legacy configuration blob, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_section_config(&self) -> Result<Option<SectionConfig>> {
        let row = sqlx::query("SELECT * FROM section_config LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_section_config).transpose()
    }

    /// Create or replace the legacy configuration blob (single row)
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub async fn upsert_section_config(
        &self,
        config: &serde_json::Value,
    ) -> Result<SectionConfig> {
        let serialized = serde_json::to_string(config)?;
        let now = now_rfc3339();

        if let Some(existing) = self.get_section_config().await? {
            sqlx::query("UPDATE section_config SET config = ?1, updated_at = ?2 WHERE id = ?3")
                .bind(&serialized)
                .bind(&now)
                .bind(existing.id)
                .execute(&self.pool)
                .await?;
        } else {
            sqlx::query(
                "INSERT INTO section_config (config, created_at, updated_at) VALUES (?1, ?2, ?3)",
            )
            .bind(&serialized)
            .bind(&now)
            .bind(&now)
            .execute(&self.pool)
            .await?;
        }

        self.get_section_config()
            .await?
            .ok_or_else(|| anyhow::anyhow!("Section config row vanished after upsert"))
    }

    // ================================
    // Contact-form submissions
    // ================================

    fn row_to_contact_message(row: &SqliteRow) -> Result<ContactMessage> {
        Ok(ContactMessage {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            message: row.try_get("message")?,
            created_at: parse_timestamp(row.try_get("created_at")?)?,
        })
    }

    /// Store a contact-form submission
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn create_contact_message(&self, form: &ContactForm) -> Result<ContactMessage> {
        let now = now_rfc3339();
        let result = sqlx::query(
            "INSERT INTO contacts (name, email, message, created_at) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&form.name)
        .bind(&form.email)
        .bind(&form.message)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        let row = sqlx::query("SELECT * FROM contacts WHERE id = ?1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Self::row_to_contact_message(&row)
    }

    /// List contact-form submissions, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>> {
        let rows = sqlx::query("SELECT * FROM contacts ORDER BY created_at DESC, id DESC")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_contact_message).collect()
    }
}
