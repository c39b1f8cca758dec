// ABOUTME: Demo content seeder for the Folio portfolio backend
// ABOUTME: Clears content tables and repopulates them with sample rows
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Demo content seeder for the Folio server.
//!
//! Populates the database with sample portfolio content so the front-end has
//! something to render. Replaces any content already present.
//!
//! Usage:
//! ```bash
//! # Seed the default database
//! cargo run --bin seed-demo-content
//!
//! # Seed a specific database
//! cargo run --bin seed-demo-content -- --database-url sqlite:./data/folio.db
//! ```

use anyhow::Result;
use clap::Parser;
use folio_server::database::Database;
use folio_server::models::{
    AboutCreate, AwardCreate, CertificationCreate, ContactInfoCreate, EducationCreate,
    ExperienceCreate, HeroCreate, ProjectCreate, SectionTitleCreate, SkillGroupCreate, StatCreate,
    TestimonialCreate,
};
use sqlx::SqlitePool;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-demo-content",
    about = "Folio demo content seeder",
    long_about = "Clear the content tables and repopulate them with sample portfolio data"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Keep existing rows instead of clearing the content tables first
    #[arg(long)]
    keep_existing: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let args = SeedArgs::parse();
    let database_url = args
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite:./data/folio.db".into());

    let database = Database::new(&database_url).await?;

    if !args.keep_existing {
        clear_content_tables(&database_url).await?;
        info!("Cleared existing content");
    }

    seed_hero(&database).await?;
    seed_about(&database).await?;
    seed_experiences(&database).await?;
    seed_stats(&database).await?;
    seed_testimonials(&database).await?;
    seed_projects(&database).await?;
    seed_contact_info(&database).await?;
    seed_awards(&database).await?;
    seed_education(&database).await?;
    seed_certifications(&database).await?;
    seed_skills(&database).await?;
    seed_section_titles(&database).await?;

    info!("Database seeded successfully with sample data");
    Ok(())
}

/// Delete every row from the content tables (contact submissions are kept)
async fn clear_content_tables(database_url: &str) -> Result<()> {
    let pool = SqlitePool::connect(database_url).await?;
    for table in [
        "hero",
        "about",
        "experiences",
        "stats",
        "testimonials",
        "projects",
        "contact_info",
        "awards",
        "education",
        "certifications",
        "skills",
        "section_titles",
    ] {
        sqlx::query(&format!("DELETE FROM {table}")).execute(&pool).await?;
    }
    Ok(())
}

async fn seed_hero(database: &Database) -> Result<()> {
    database
        .create_hero(&HeroCreate {
            title: "I Am Jordan Reyes".into(),
            subtitle: "Senior Product Manager".into(),
            description: "A product manager with a designer's heart and an engineer's mind. \
                          I craft digital experiences that users love and businesses value."
                .into(),
            badge: "Welcome to My Universe".into(),
            badge_emoji: "\u{2728}".into(),
            cta_text: "Explore My Work".into(),
            cta_style: "bordered".into(),
            is_active: true,
        })
        .await?;
    info!("Seeded hero banner");
    Ok(())
}

async fn seed_about(database: &Database) -> Result<()> {
    let blurbs = [
        (
            "Who I Am",
            "Passionate Product Manager",
            "I bridge the gap between technology and business to create meaningful solutions.",
        ),
        (
            "What I Do",
            "Turning Ideas into Reality",
            "I lead cross-functional teams to deliver products that solve real problems, \
             from concept to launch.",
        ),
        (
            "What Interests Me",
            "Innovation & Strategy",
            "Emerging technologies, AI possibilities, and solutions that make a real-world impact.",
        ),
    ];

    for (order_index, (title, subtitle, description)) in blurbs.iter().enumerate() {
        database
            .create_about(&AboutCreate {
                title: (*title).into(),
                subtitle: Some((*subtitle).into()),
                description: (*description).into(),
                image_url: None,
                additional_data: None,
                is_active: true,
                order_index: order_index as i64,
            })
            .await?;
    }
    info!("Seeded {} about blurbs", blurbs.len());
    Ok(())
}

async fn seed_experiences(database: &Database) -> Result<()> {
    let experiences = [
        (
            "Northwind Labs",
            "Senior Product Manager",
            "2022 - Present",
            "Leading product strategy for an enterprise SaaS platform across a \
             fifteen-person cross-functional team.",
            "Product Strategy, Agile, SQL, User Research",
            "Increased user engagement by 40%, Launched 3 major features",
        ),
        (
            "Brightline Studio",
            "Product Manager",
            "2020 - 2022",
            "Built and scaled mobile applications from concept to market alongside design \
             and engineering.",
            "Mobile Development, A/B Testing, Analytics",
            "Launched 2 successful apps, Grew user base to 100K+",
        ),
        (
            "Seedling",
            "Associate Product Manager",
            "2018 - 2020",
            "Started my product journey on web applications, learning the fundamentals of \
             product development.",
            "Web Development, Prototyping, Customer Feedback",
            "Contributed to 5 product launches, Improved conversion rates by 15%",
        ),
    ];

    for (order_index, (company, position, duration, description, technologies, achievements)) in
        experiences.iter().enumerate()
    {
        database
            .create_experience(&ExperienceCreate {
                company: (*company).into(),
                position: (*position).into(),
                duration: (*duration).into(),
                description: (*description).into(),
                technologies: Some((*technologies).into()),
                achievements: Some((*achievements).into()),
                is_active: true,
                order_index: order_index as i64,
            })
            .await?;
    }
    info!("Seeded {} experiences", experiences.len());
    Ok(())
}

async fn seed_stats(database: &Database) -> Result<()> {
    let stats = [
        ("Projects Completed", "50", "+", "\u{1f680}"),
        ("Happy Clients", "25", "+", "\u{1f60a}"),
        ("Years Experience", "6", "+", "\u{23f0}"),
        ("Success Rate", "98", "%", "\u{1f4c8}"),
    ];

    for (order_index, (label, value, suffix, icon)) in stats.iter().enumerate() {
        database
            .create_stat(&StatCreate {
                label: (*label).into(),
                value: (*value).into(),
                suffix: (*suffix).into(),
                icon: Some((*icon).into()),
                is_active: true,
                order_index: order_index as i64,
            })
            .await?;
    }
    info!("Seeded {} stats", stats.len());
    Ok(())
}

async fn seed_testimonials(database: &Database) -> Result<()> {
    let testimonials = [
        (
            "Sarah Mitchell",
            "CEO",
            "Northwind Labs",
            "Former Manager",
            "An exceptional product manager who consistently delivers outstanding results.",
        ),
        (
            "Miguel Chen",
            "CTO",
            "Brightline Studio",
            "Peer",
            "Their attention to detail and user-centric approach resulted in products our \
             customers love.",
        ),
        (
            "Priya Desai",
            "Product Director",
            "Seedling",
            "Client",
            "Remarkable at translating complex business requirements into successful products.",
        ),
    ];

    for (order_index, (name, position, company, relation, message)) in
        testimonials.iter().enumerate()
    {
        database
            .create_testimonial(&TestimonialCreate {
                name: (*name).into(),
                position: Some((*position).into()),
                company: Some((*company).into()),
                relation: Some((*relation).into()),
                message: (*message).into(),
                is_active: true,
                order_index: order_index as i64,
            })
            .await?;
    }
    info!("Seeded {} testimonials", testimonials.len());
    Ok(())
}

async fn seed_projects(database: &Database) -> Result<()> {
    let projects = [
        (
            "E-Commerce Platform",
            "A scalable e-commerce solution with recommendations, real-time inventory, and \
             payment processing.",
            "Modern E-commerce Solution",
            "web",
            true,
        ),
        (
            "Voice Assistant",
            "A conversational assistant with voice-to-voice interaction and natural language \
             processing.",
            "Voice-to-Voice Chatbot",
            "ai",
            true,
        ),
        (
            "Analytics Dashboard",
            "A business intelligence platform with real-time visualization and custom reporting.",
            "Business Intelligence Platform",
            "data",
            false,
        ),
        (
            "Fitness Tracker",
            "A cross-platform mobile application for workout planning with social features.",
            "Fitness Tracking App",
            "mobile",
            false,
        ),
    ];

    for (order_index, (title, description, short_description, category, is_featured)) in
        projects.iter().enumerate()
    {
        database
            .create_project(&ProjectCreate {
                title: (*title).into(),
                description: (*description).into(),
                short_description: Some((*short_description).into()),
                image_url: None,
                live_url: None,
                github_url: None,
                technologies: None,
                category: (*category).into(),
                is_featured: *is_featured,
                is_active: true,
                order_index: order_index as i64,
            })
            .await?;
    }
    info!("Seeded {} projects", projects.len());
    Ok(())
}

async fn seed_contact_info(database: &Database) -> Result<()> {
    let channels = [
        ("email", "jordan.reyes@example.com", "Email"),
        ("phone", "+1 (555) 123-4567", "Phone"),
        ("linkedin", "linkedin.com/in/jordanreyes", "LinkedIn"),
        ("github", "github.com/jordanreyes", "GitHub"),
        ("website", "jordanreyes.dev", "Website"),
    ];

    for (order_index, (kind, value, label)) in channels.iter().enumerate() {
        database
            .create_contact_info(&ContactInfoCreate {
                kind: (*kind).into(),
                value: (*value).into(),
                label: (*label).into(),
                is_active: true,
                order_index: order_index as i64,
            })
            .await?;
    }
    info!("Seeded {} contact channels", channels.len());
    Ok(())
}

async fn seed_awards(database: &Database) -> Result<()> {
    let awards = [
        ("Best Product Manager 2023", "Tech Awards Association", "2023", "\u{1f3c6}"),
        ("Innovation Excellence Award", "Product Institute", "2022", "\u{1f31f}"),
        ("Customer Success Champion", "SaaS Growth Awards", "2021", "\u{1f451}"),
    ];

    for (order_index, (title, organization, year, icon)) in awards.iter().enumerate() {
        database
            .create_award(&AwardCreate {
                title: (*title).into(),
                organization: (*organization).into(),
                year: (*year).into(),
                icon: (*icon).into(),
                is_active: true,
                order_index: order_index as i64,
            })
            .await?;
    }
    info!("Seeded {} awards", awards.len());
    Ok(())
}

async fn seed_education(database: &Database) -> Result<()> {
    let entries = [
        ("Master of Business Administration", "State University", "2020", "\u{1f393}"),
        ("Bachelor of Computer Science", "Institute of Technology", "2018", "\u{1f4bb}"),
    ];

    for (order_index, (degree, institution, year, icon)) in entries.iter().enumerate() {
        database
            .create_education(&EducationCreate {
                degree: (*degree).into(),
                institution: (*institution).into(),
                year: (*year).into(),
                icon: (*icon).into(),
                is_active: true,
                order_index: order_index as i64,
            })
            .await?;
    }
    info!("Seeded {} education entries", entries.len());
    Ok(())
}

async fn seed_certifications(database: &Database) -> Result<()> {
    let certifications = [
        ("Certified Scrum Master", "Scrum Alliance", "2022", "\u{1f4dc}"),
        ("Cloud Solutions Architect", "Cloud Vendor", "2021", "\u{2601}\u{fe0f}"),
    ];

    for (order_index, (name, issuer, year, icon)) in certifications.iter().enumerate() {
        database
            .create_certification(&CertificationCreate {
                name: (*name).into(),
                issuer: (*issuer).into(),
                year: (*year).into(),
                icon: (*icon).into(),
                certificate_link: None,
                certificate_id: None,
                is_active: true,
                order_index: order_index as i64,
            })
            .await?;
    }
    info!("Seeded {} certifications", certifications.len());
    Ok(())
}

async fn seed_skills(database: &Database) -> Result<()> {
    let groups = [
        (
            "Product Management",
            "Product Strategy, User Research, Data Analysis, Agile, Roadmapping",
        ),
        ("Technical Skills", "Python, JavaScript, React, SQL, Docker, Git"),
        ("Design & UX", "Figma, Wireframing, Prototyping, Design Systems"),
    ];

    for (order_index, (category, skills)) in groups.iter().enumerate() {
        database
            .create_skill_group(&SkillGroupCreate {
                category: (*category).into(),
                skills: (*skills).into(),
                is_active: true,
                order_index: order_index as i64,
            })
            .await?;
    }
    info!("Seeded {} skill groups", groups.len());
    Ok(())
}

async fn seed_section_titles(database: &Database) -> Result<()> {
    let sections = [
        ("about", "Get to Know Me", Some("A glimpse into my world")),
        ("stats", "My Journey", Some("Achievements and expertise")),
        ("projects", "My Creations", Some("Favorite projects and builds")),
        ("experience", "My Journey", Some("Professional roles so far")),
        ("testimonials", "What People Say", Some("Words from colleagues and clients")),
        ("contact", "Get In Touch", Some("Ready to work together?")),
    ];

    for (order_index, (section_name, title, description)) in sections.iter().enumerate() {
        database
            .create_section_title(&SectionTitleCreate {
                section_name: (*section_name).into(),
                title: (*title).into(),
                subtitle: None,
                description: description.map(Into::into),
                main_title: None,
                emoji: None,
                is_active: true,
                order_index: order_index as i64,
            })
            .await?;
    }
    info!("Seeded {} section titles", sections.len());
    Ok(())
}
