// ABOUTME: Core data models for portfolio content entities
// ABOUTME: Defines records, create requests, and explicit partial-update structures
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Data Models
//!
//! Core data structures for the Folio content backend. Every content entity
//! shares the same shape: a display payload, an activation flag, an explicit
//! display-order index, and creation/update timestamps. Entity kinds differ
//! only in which payload fields they carry.
//!
//! Each mutable entity has three types:
//!
//! - the record itself (what the database stores and the API returns),
//! - `XxxCreate` — required payload plus defaults,
//! - `XxxUpdate` — every field optional, applied field-by-field. An absent
//!   field leaves the stored value unchanged; there is no dynamic attribute
//!   patching anywhere.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const fn default_true() -> bool {
    true
}

fn default_cta_style() -> String {
    "bordered".into()
}

fn default_category() -> String {
    "all".into()
}

/// Bulk display-order change for one record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    /// Record id
    pub id: i64,
    /// New display-order index
    pub order_index: i64,
}

// ================================
// Hero banner
// ================================

/// Hero banner record; at most one row is active at a time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    /// Record id
    pub id: i64,
    /// Main headline
    pub title: String,
    /// Secondary headline
    pub subtitle: String,
    /// Longer introduction text
    pub description: String,
    /// Badge text shown above the title
    pub badge: String,
    /// Emoji rendered next to the badge
    pub badge_emoji: String,
    /// Call-to-action button label
    pub cta_text: String,
    /// Call-to-action style: "bordered" or "filled"
    pub cta_style: String,
    /// Whether this row is the displayed hero
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create request for a hero banner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroCreate {
    /// Main headline
    pub title: String,
    /// Secondary headline
    pub subtitle: String,
    /// Longer introduction text
    pub description: String,
    /// Badge text
    pub badge: String,
    /// Badge emoji
    pub badge_emoji: String,
    /// Call-to-action label
    pub cta_text: String,
    /// Call-to-action style
    #[serde(default = "default_cta_style")]
    pub cta_style: String,
    /// Activate immediately (deactivates the previous active row)
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Partial update for a hero banner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeroUpdate {
    /// New headline
    pub title: Option<String>,
    /// New secondary headline
    pub subtitle: Option<String>,
    /// New introduction text
    pub description: Option<String>,
    /// New badge text
    pub badge: Option<String>,
    /// New badge emoji
    pub badge_emoji: Option<String>,
    /// New call-to-action label
    pub cta_text: Option<String>,
    /// New call-to-action style
    pub cta_style: Option<String>,
    /// New activation flag
    pub is_active: Option<bool>,
}

// ================================
// About blurbs
// ================================

/// About-section blurb
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    /// Record id
    pub id: i64,
    /// Blurb title
    pub title: String,
    /// Optional sub-title
    pub subtitle: Option<String>,
    /// Body text
    pub description: String,
    /// Optional illustration URL
    pub image_url: Option<String>,
    /// Free-form extra payload for the front-end
    pub additional_data: Option<Value>,
    /// Display flag
    pub is_active: bool,
    /// Display order among active blurbs
    pub order_index: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create request for an about blurb
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutCreate {
    /// Blurb title
    pub title: String,
    /// Optional sub-title
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Body text
    pub description: String,
    /// Optional illustration URL
    #[serde(default)]
    pub image_url: Option<String>,
    /// Free-form extra payload
    #[serde(default)]
    pub additional_data: Option<Value>,
    /// Display flag
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Display order
    #[serde(default)]
    pub order_index: i64,
}

/// Partial update for an about blurb
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AboutUpdate {
    /// New title
    pub title: Option<String>,
    /// New sub-title
    pub subtitle: Option<String>,
    /// New body text
    pub description: Option<String>,
    /// New illustration URL
    pub image_url: Option<String>,
    /// New extra payload
    pub additional_data: Option<Value>,
    /// New display flag
    pub is_active: Option<bool>,
    /// New display order
    pub order_index: Option<i64>,
}

// ================================
// Experience entries
// ================================

/// Work-experience entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    /// Record id
    pub id: i64,
    /// Employer name
    pub company: String,
    /// Role title
    pub position: String,
    /// Human-readable period, e.g. "2020 - 2022"
    pub duration: String,
    /// Role description
    pub description: String,
    /// Comma-separated technology list
    pub technologies: Option<String>,
    /// Comma-separated achievements list
    pub achievements: Option<String>,
    /// Display flag
    pub is_active: bool,
    /// Display order
    pub order_index: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create request for an experience entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceCreate {
    /// Employer name
    pub company: String,
    /// Role title
    pub position: String,
    /// Human-readable period
    pub duration: String,
    /// Role description
    pub description: String,
    /// Comma-separated technology list
    #[serde(default)]
    pub technologies: Option<String>,
    /// Comma-separated achievements list
    #[serde(default)]
    pub achievements: Option<String>,
    /// Display flag
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Display order
    #[serde(default)]
    pub order_index: i64,
}

/// Partial update for an experience entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceUpdate {
    /// New employer name
    pub company: Option<String>,
    /// New role title
    pub position: Option<String>,
    /// New period text
    pub duration: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New technology list
    pub technologies: Option<String>,
    /// New achievements list
    pub achievements: Option<String>,
    /// New display flag
    pub is_active: Option<bool>,
    /// New display order
    pub order_index: Option<i64>,
}

// ================================
// Stats
// ================================

/// Headline statistic (e.g. "Projects Completed: 50+")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    /// Record id
    pub id: i64,
    /// Statistic label
    pub label: String,
    /// Displayed value
    pub value: String,
    /// Value suffix, e.g. "+", "%", "K"
    pub suffix: String,
    /// Icon class or emoji
    pub icon: Option<String>,
    /// Display flag
    pub is_active: bool,
    /// Display order
    pub order_index: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create request for a statistic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatCreate {
    /// Statistic label
    pub label: String,
    /// Displayed value
    pub value: String,
    /// Value suffix
    #[serde(default)]
    pub suffix: String,
    /// Icon class or emoji
    #[serde(default)]
    pub icon: Option<String>,
    /// Display flag
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Display order
    #[serde(default)]
    pub order_index: i64,
}

/// Partial update for a statistic
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatUpdate {
    /// New label
    pub label: Option<String>,
    /// New value
    pub value: Option<String>,
    /// New suffix
    pub suffix: Option<String>,
    /// New icon
    pub icon: Option<String>,
    /// New display flag
    pub is_active: Option<bool>,
    /// New display order
    pub order_index: Option<i64>,
}

// ================================
// Testimonials
// ================================

/// Testimonial from a colleague or client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    /// Record id
    pub id: i64,
    /// Author name
    pub name: String,
    /// Author role
    pub position: Option<String>,
    /// Author company
    pub company: Option<String>,
    /// Relation to the portfolio owner, e.g. "Former Manager"
    pub relation: Option<String>,
    /// Testimonial body
    pub message: String,
    /// Display flag
    pub is_active: bool,
    /// Display order
    pub order_index: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create request for a testimonial
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialCreate {
    /// Author name
    pub name: String,
    /// Author role
    #[serde(default)]
    pub position: Option<String>,
    /// Author company
    #[serde(default)]
    pub company: Option<String>,
    /// Relation to the portfolio owner
    #[serde(default)]
    pub relation: Option<String>,
    /// Testimonial body
    pub message: String,
    /// Display flag
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Display order
    #[serde(default)]
    pub order_index: i64,
}

/// Partial update for a testimonial
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestimonialUpdate {
    /// New author name
    pub name: Option<String>,
    /// New author role
    pub position: Option<String>,
    /// New author company
    pub company: Option<String>,
    /// New relation
    pub relation: Option<String>,
    /// New body
    pub message: Option<String>,
    /// New display flag
    pub is_active: Option<bool>,
    /// New display order
    pub order_index: Option<i64>,
}

// ================================
// Projects
// ================================

/// Portfolio project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Record id
    pub id: i64,
    /// Project title
    pub title: String,
    /// Full description
    pub description: String,
    /// One-line description for cards
    pub short_description: Option<String>,
    /// Cover image URL (or emoji placeholder)
    pub image_url: Option<String>,
    /// Live deployment URL
    pub live_url: Option<String>,
    /// Source repository URL
    pub github_url: Option<String>,
    /// Comma-separated technology list
    pub technologies: Option<String>,
    /// Filter category, e.g. "web", "ai", "data"
    pub category: String,
    /// Highlighted on the front page
    pub is_featured: bool,
    /// Display flag
    pub is_active: bool,
    /// Display order
    pub order_index: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create request for a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreate {
    /// Project title
    pub title: String,
    /// Full description
    pub description: String,
    /// One-line description
    #[serde(default)]
    pub short_description: Option<String>,
    /// Cover image URL
    #[serde(default)]
    pub image_url: Option<String>,
    /// Live deployment URL
    #[serde(default)]
    pub live_url: Option<String>,
    /// Source repository URL
    #[serde(default)]
    pub github_url: Option<String>,
    /// Comma-separated technology list
    #[serde(default)]
    pub technologies: Option<String>,
    /// Filter category
    #[serde(default = "default_category")]
    pub category: String,
    /// Highlighted on the front page
    #[serde(default)]
    pub is_featured: bool,
    /// Display flag
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Display order
    #[serde(default)]
    pub order_index: i64,
}

/// Partial update for a project
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectUpdate {
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New one-line description
    pub short_description: Option<String>,
    /// New cover image URL
    pub image_url: Option<String>,
    /// New live URL
    pub live_url: Option<String>,
    /// New repository URL
    pub github_url: Option<String>,
    /// New technology list
    pub technologies: Option<String>,
    /// New category
    pub category: Option<String>,
    /// New featured flag
    pub is_featured: Option<bool>,
    /// New display flag
    pub is_active: Option<bool>,
    /// New display order
    pub order_index: Option<i64>,
}

// ================================
// Contact channels
// ================================

/// Public contact channel (email, phone, profile link, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Record id
    pub id: i64,
    /// Channel kind: email, phone, linkedin, github, website, other
    #[serde(rename = "type")]
    pub kind: String,
    /// Channel value (address, number, URL)
    pub value: String,
    /// Display label
    pub label: String,
    /// Display flag
    pub is_active: bool,
    /// Display order
    pub order_index: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create request for a contact channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfoCreate {
    /// Channel kind
    #[serde(rename = "type")]
    pub kind: String,
    /// Channel value
    pub value: String,
    /// Display label
    pub label: String,
    /// Display flag
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Display order
    #[serde(default)]
    pub order_index: i64,
}

/// Partial update for a contact channel
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfoUpdate {
    /// New channel kind
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// New value
    pub value: Option<String>,
    /// New label
    pub label: Option<String>,
    /// New display flag
    pub is_active: Option<bool>,
    /// New display order
    pub order_index: Option<i64>,
}

// ================================
// Awards / education / certifications
// ================================

/// Award or recognition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Award {
    /// Record id
    pub id: i64,
    /// Award title
    pub title: String,
    /// Awarding organization
    pub organization: String,
    /// Award year (free-form text)
    pub year: String,
    /// Icon emoji
    pub icon: String,
    /// Display flag
    pub is_active: bool,
    /// Display order
    pub order_index: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create request for an award
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwardCreate {
    /// Award title
    pub title: String,
    /// Awarding organization
    pub organization: String,
    /// Award year
    pub year: String,
    /// Icon emoji
    #[serde(default = "Award::default_icon")]
    pub icon: String,
    /// Display flag
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Display order
    #[serde(default)]
    pub order_index: i64,
}

impl Award {
    fn default_icon() -> String {
        "\u{1f3c6}".into() // trophy
    }
}

/// Partial update for an award
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AwardUpdate {
    /// New title
    pub title: Option<String>,
    /// New organization
    pub organization: Option<String>,
    /// New year
    pub year: Option<String>,
    /// New icon
    pub icon: Option<String>,
    /// New display flag
    pub is_active: Option<bool>,
    /// New display order
    pub order_index: Option<i64>,
}

/// Education entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    /// Record id
    pub id: i64,
    /// Degree or program name
    pub degree: String,
    /// Institution name
    pub institution: String,
    /// Completion year (free-form text)
    pub year: String,
    /// Icon emoji
    pub icon: String,
    /// Display flag
    pub is_active: bool,
    /// Display order
    pub order_index: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create request for an education entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationCreate {
    /// Degree or program name
    pub degree: String,
    /// Institution name
    pub institution: String,
    /// Completion year
    pub year: String,
    /// Icon emoji
    #[serde(default = "Education::default_icon")]
    pub icon: String,
    /// Display flag
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Display order
    #[serde(default)]
    pub order_index: i64,
}

impl Education {
    fn default_icon() -> String {
        "\u{1f393}".into() // graduation cap
    }
}

/// Partial update for an education entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationUpdate {
    /// New degree name
    pub degree: Option<String>,
    /// New institution
    pub institution: Option<String>,
    /// New year
    pub year: Option<String>,
    /// New icon
    pub icon: Option<String>,
    /// New display flag
    pub is_active: Option<bool>,
    /// New display order
    pub order_index: Option<i64>,
}

/// Professional certification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    /// Record id
    pub id: i64,
    /// Certification name
    pub name: String,
    /// Issuing body
    pub issuer: String,
    /// Issue year (free-form text)
    pub year: String,
    /// Icon emoji
    pub icon: String,
    /// Verification URL
    pub certificate_link: Option<String>,
    /// Certificate id/number
    pub certificate_id: Option<String>,
    /// Display flag
    pub is_active: bool,
    /// Display order
    pub order_index: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create request for a certification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificationCreate {
    /// Certification name
    pub name: String,
    /// Issuing body
    pub issuer: String,
    /// Issue year
    pub year: String,
    /// Icon emoji
    #[serde(default = "Certification::default_icon")]
    pub icon: String,
    /// Verification URL
    #[serde(default)]
    pub certificate_link: Option<String>,
    /// Certificate id/number
    #[serde(default)]
    pub certificate_id: Option<String>,
    /// Display flag
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Display order
    #[serde(default)]
    pub order_index: i64,
}

impl Certification {
    fn default_icon() -> String {
        "\u{1f4dc}".into() // scroll
    }
}

/// Partial update for a certification
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificationUpdate {
    /// New name
    pub name: Option<String>,
    /// New issuer
    pub issuer: Option<String>,
    /// New year
    pub year: Option<String>,
    /// New icon
    pub icon: Option<String>,
    /// New verification URL
    pub certificate_link: Option<String>,
    /// New certificate id
    pub certificate_id: Option<String>,
    /// New display flag
    pub is_active: Option<bool>,
    /// New display order
    pub order_index: Option<i64>,
}

// ================================
// Skill groups
// ================================

/// Named skill group with a comma-separated skill list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    /// Record id
    pub id: i64,
    /// Group label, e.g. "Technical Skills"
    pub category: String,
    /// Comma-separated skill list
    pub skills: String,
    /// Display flag
    pub is_active: bool,
    /// Display order
    pub order_index: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create request for a skill group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroupCreate {
    /// Group label
    pub category: String,
    /// Comma-separated skill list
    pub skills: String,
    /// Display flag
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Display order
    #[serde(default)]
    pub order_index: i64,
}

/// Partial update for a skill group
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillGroupUpdate {
    /// New group label
    pub category: Option<String>,
    /// New skill list
    pub skills: Option<String>,
    /// New display flag
    pub is_active: Option<bool>,
    /// New display order
    pub order_index: Option<i64>,
}

// ================================
// Section titles (typed per-section configuration)
// ================================

/// Per-section heading configuration; supersedes the legacy JSON blob
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionTitle {
    /// Record id
    pub id: i64,
    /// Section key: hero, about, stats, projects, ...
    pub section_name: String,
    /// Section eyebrow title
    pub title: String,
    /// Optional sub-title
    pub subtitle: Option<String>,
    /// Optional section description
    pub description: Option<String>,
    /// Optional large heading
    pub main_title: Option<String>,
    /// Optional emoji
    pub emoji: Option<String>,
    /// Display flag
    pub is_active: bool,
    /// Display order
    pub order_index: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create request for a section title
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionTitleCreate {
    /// Section key
    pub section_name: String,
    /// Section eyebrow title
    pub title: String,
    /// Optional sub-title
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Optional large heading
    #[serde(default)]
    pub main_title: Option<String>,
    /// Optional emoji
    #[serde(default)]
    pub emoji: Option<String>,
    /// Display flag
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Display order
    #[serde(default)]
    pub order_index: i64,
}

/// Partial update for a section title
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionTitleUpdate {
    /// New eyebrow title
    pub title: Option<String>,
    /// New sub-title
    pub subtitle: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New large heading
    pub main_title: Option<String>,
    /// New emoji
    pub emoji: Option<String>,
    /// New display flag
    pub is_active: Option<bool>,
    /// New display order
    pub order_index: Option<i64>,
}

// ================================
// Legacy section configuration blob
// ================================

/// Legacy single-row JSON configuration blob; typed `SectionTitle` rows take
/// precedence when present
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionConfig {
    /// Record id (0 when serving the built-in default document)
    pub id: i64,
    /// Free-form configuration document
    pub config: Value,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create-or-replace request for the legacy configuration blob
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionConfigUpdate {
    /// Full replacement configuration document
    pub config: Value,
}

// ================================
// Contact-form submissions
// ================================

/// Stored contact-form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Record id
    pub id: i64,
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Message body
    pub message: String,
    /// Submission timestamp
    pub created_at: DateTime<Utc>,
}

/// Public contact-form payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactForm {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Message body
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults() {
        let json = r#"{"title":"Who I Am","description":"body"}"#;
        let create: AboutCreate = serde_json::from_str(json).unwrap();
        assert!(create.is_active);
        assert_eq!(create.order_index, 0);
        assert!(create.subtitle.is_none());
    }

    #[test]
    fn test_update_absent_fields_stay_none() {
        let json = r#"{"title":"New title"}"#;
        let update: AboutUpdate = serde_json::from_str(json).unwrap();
        assert_eq!(update.title.as_deref(), Some("New title"));
        assert!(update.description.is_none());
        assert!(update.is_active.is_none());
    }

    #[test]
    fn test_contact_info_kind_wire_name() {
        let json = r#"{"type":"email","value":"a@b.c","label":"Email"}"#;
        let create: ContactInfoCreate = serde_json::from_str(json).unwrap();
        assert_eq!(create.kind, "email");

        let serialized = serde_json::to_string(&create).unwrap();
        assert!(serialized.contains(r#""type":"email""#));
    }

    #[test]
    fn test_project_category_default() {
        let json = r#"{"title":"T","description":"D"}"#;
        let create: ProjectCreate = serde_json::from_str(json).unwrap();
        assert_eq!(create.category, "all");
        assert!(!create.is_featured);
    }
}
