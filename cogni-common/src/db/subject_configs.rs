//! Subject configuration store
//!
//! Holds the per-subject synthesis material: a summary template, canned
//! flashcards and phrasing variations, keyed by subject tag. Seeding writes
//! a fixed five-entry catalog (the four named subjects plus `general`) and
//! is idempotent; `resolve` falls back to the `general` entry for tags
//! without their own row. A store without a usable `general` entry is a
//! bootstrap defect and surfaces as [`Error::Config`].

use crate::db::models::SubjectConfig;
use crate::error::{Error, Result};
use crate::subject::SubjectTag;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::debug;

struct CatalogEntry {
    subject: SubjectTag,
    summary_template: &'static str,
    flashcards: &'static [&'static str],
    variations: &'static [&'static str],
}

/// Built-in synthesis catalog written once at first startup. After seeding,
/// the database rows are authoritative; these constants are never consulted
/// again at runtime.
const BUILTIN_CATALOG: [CatalogEntry; 5] = [
    CatalogEntry {
        subject: SubjectTag::Math,
        summary_template: "Mathematical Concept Analysis:\n- Identified core mathematical principles in the text\n- Extracted key formulas and equations\n- Highlighted problem-solving approaches\n- Recommended practice exercises on related topics",
        flashcards: &[
            "Key Formula: Quadratic Equation - x = [-b ± √(b² - 4ac)] / 2a",
            "Concept: Derivatives measure the rate of change of a function",
            "Technique: Factorize polynomials to simplify equations",
        ],
        variations: &[
            "Based on cognitive science principles, I've organized this information for optimal learning.",
            "Using mathematical modeling techniques, I've extracted the most important formulas for study.",
            "Leveraging educational research, I've created study materials that enhance mathematical understanding.",
        ],
    },
    CatalogEntry {
        subject: SubjectTag::History,
        summary_template: "Historical Context Analysis:\n- Identified key historical events and figures\n- Established chronological timeline\n- Highlighted cause-and-effect relationships\n- Connected to broader historical themes",
        flashcards: &[
            "Event: World War II (1939-1945) - Global conflict involving most nations",
            "Concept: The Renaissance - Cultural and intellectual revival in Europe",
            "Figure: Napoleon Bonaparte - French military leader and emperor",
        ],
        variations: &[
            "Based on historical analysis methods, I've organized this information chronologically.",
            "Using historical research techniques, I've identified the most significant events.",
            "Leveraging historical context, I've created study materials that enhance understanding of timelines.",
        ],
    },
    CatalogEntry {
        subject: SubjectTag::Science,
        summary_template: "Scientific Principles Analysis:\n- Identified core scientific concepts and laws\n- Explained natural phenomena described\n- Connected to fundamental scientific principles\n- Suggested related experiments or observations",
        flashcards: &[
            "Law: Newton's First Law - Objects at rest stay at rest, objects in motion stay in motion",
            "Concept: Photosynthesis - Process by which plants convert light to energy",
            "Term: Atom - Basic unit of matter consisting of nucleus and electrons",
        ],
        variations: &[
            "Based on scientific methodology, I've organized this information systematically.",
            "Using scientific analysis techniques, I've identified the fundamental principles.",
            "Leveraging experimental data, I've created study materials that enhance scientific understanding.",
        ],
    },
    CatalogEntry {
        subject: SubjectTag::Programming,
        summary_template: "Programming Concepts Analysis:\n- Identified key programming paradigms and patterns\n- Extracted algorithms and data structures\n- Highlighted best practices and potential pitfalls\n- Suggested related coding exercises",
        flashcards: &[
            "Concept: Object-Oriented Programming - Organizing code around objects rather than functions",
            "Algorithm: Binary Search - Efficient search algorithm for sorted arrays",
            "Term: API - Application Programming Interface for software communication",
        ],
        variations: &[
            "Based on software engineering principles, I've organized this information for optimal learning.",
            "Using code analysis techniques, I've identified the most important programming concepts.",
            "Leveraging development best practices, I've created study materials that enhance coding skills.",
        ],
    },
    CatalogEntry {
        subject: SubjectTag::General,
        summary_template: "General Knowledge Analysis:\n- Identified key concepts and relationships\n- Extracted main ideas and supporting details\n- Created structured knowledge representation\n- Generated study aids for improved retention",
        flashcards: &[
            "Study Tip: Use spaced repetition for better long-term memory",
            "Technique: Create mind maps to visualize connections between ideas",
            "Concept: The forgetting curve shows how information is lost over time",
        ],
        variations: &[
            "Based on cognitive science principles, I've organized this information for optimal learning.",
            "Using natural language processing, I've extracted the most important concepts for study.",
            "Leveraging educational psychology research, I've created study materials that enhance retention.",
            "Applying machine learning algorithms, I've identified patterns and relationships in the content.",
        ],
    },
];

/// Seed the built-in catalog. Existing rows are left untouched, so calling
/// this on every startup neither duplicates nor overwrites entries.
pub async fn seed(pool: &SqlitePool, now: DateTime<Utc>) -> Result<()> {
    for entry in &BUILTIN_CATALOG {
        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO subject_configs
                (subject, summary_template, flashcards, variations, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(entry.subject.as_str())
        .bind(entry.summary_template)
        .bind(serde_json::to_string(entry.flashcards)?)
        .bind(serde_json::to_string(entry.variations)?)
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            debug!("Seeded subject config '{}'", entry.subject);
        }
    }
    Ok(())
}

/// Fetch the config for exactly `subject`, without fallback
pub async fn get(pool: &SqlitePool, subject: SubjectTag) -> Result<Option<SubjectConfig>> {
    let row = sqlx::query("SELECT * FROM subject_configs WHERE subject = ?")
        .bind(subject.as_str())
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(SubjectConfig::from_row).transpose()
}

/// List all configs, ordered by subject name
pub async fn list(pool: &SqlitePool) -> Result<Vec<SubjectConfig>> {
    let rows = sqlx::query("SELECT * FROM subject_configs ORDER BY subject")
        .fetch_all(pool)
        .await?;

    rows.iter().map(SubjectConfig::from_row).collect()
}

/// Resolve the config to synthesize with: the subject's own entry when
/// present, the `general` entry otherwise.
///
/// Both outcomes are checked for usability (non-empty flashcards and
/// variations). A miss on `general` itself means seeding never ran or the
/// store is corrupted; that is fatal, not a per-request condition.
pub async fn resolve(pool: &SqlitePool, subject: SubjectTag) -> Result<SubjectConfig> {
    if let Some(config) = get(pool, subject).await? {
        return usable(config);
    }

    debug!("No config for '{}', falling back to general", subject);
    match get(pool, SubjectTag::General).await? {
        Some(config) => usable(config),
        None => Err(Error::Config(
            "subject config store has no 'general' entry".to_string(),
        )),
    }
}

fn usable(config: SubjectConfig) -> Result<SubjectConfig> {
    if config.flashcards.is_empty() {
        return Err(Error::Config(format!(
            "subject config '{}' has no flashcards",
            config.subject
        )));
    }
    if config.variations.is_empty() {
        return Err(Error::Config(format!(
            "subject config '{}' has no variations",
            config.subject
        )));
    }
    Ok(config)
}

/// Partial update payload; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubjectConfigUpdate {
    pub summary_template: Option<String>,
    pub flashcards: Option<Vec<String>>,
    pub variations: Option<Vec<String>>,
}

impl SubjectConfigUpdate {
    /// Reject provided-but-unusable fields before anything is written
    fn validate(&self) -> Result<()> {
        if let Some(template) = &self.summary_template {
            if template.trim().is_empty() {
                return Err(Error::InvalidInput(
                    "summary_template cannot be empty".to_string(),
                ));
            }
        }
        if let Some(flashcards) = &self.flashcards {
            if flashcards.is_empty() {
                return Err(Error::InvalidInput(
                    "flashcards cannot be empty".to_string(),
                ));
            }
        }
        if let Some(variations) = &self.variations {
            if variations.is_empty() {
                return Err(Error::InvalidInput(
                    "variations cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Apply a partial update to an existing config, refreshing `updated_at`.
///
/// The stored row is read, merged with the update and written back as one
/// complete row. Fails with [`Error::NotFound`] when `subject` has no
/// config; update never creates tags implicitly.
pub async fn update(
    pool: &SqlitePool,
    subject: SubjectTag,
    changes: SubjectConfigUpdate,
    now: DateTime<Utc>,
) -> Result<SubjectConfig> {
    changes.validate()?;

    let Some(mut config) = get(pool, subject).await? else {
        return Err(Error::NotFound(format!(
            "no subject config for '{}'",
            subject
        )));
    };

    if let Some(template) = changes.summary_template {
        config.summary_template = template;
    }
    if let Some(flashcards) = changes.flashcards {
        config.flashcards = flashcards;
    }
    if let Some(variations) = changes.variations {
        config.variations = variations;
    }
    config.updated_at = now;

    sqlx::query(
        r#"
        UPDATE subject_configs
        SET summary_template = ?, flashcards = ?, variations = ?, updated_at = ?
        WHERE subject = ?
        "#,
    )
    .bind(&config.summary_template)
    .bind(serde_json::to_string(&config.flashcards)?)
    .bind(serde_json::to_string(&config.variations)?)
    .bind(config.updated_at.to_rfc3339())
    .bind(subject.as_str())
    .execute(pool)
    .await?;

    Ok(config)
}
