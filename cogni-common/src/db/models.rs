//! Shared data models for the CogniGrasp database
//!
//! List-valued fields (flashcards, variations, review dates) are stored as
//! JSON text columns; timestamps are stored as RFC3339 text. The `from_row`
//! constructors decode that storage form back into typed values.

use crate::error::{Error, Result};
use crate::subject::SubjectTag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

/// Per-subject synthesis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectConfig {
    pub subject: SubjectTag,
    /// Multi-line analysis template placed at the top of every summary
    pub summary_template: String,
    /// Canned flashcards returned verbatim for this subject
    pub flashcards: Vec<String>,
    /// Closing phrases; synthesis appends one chosen at random
    pub variations: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SubjectConfig {
    /// Decode a `subject_configs` row
    pub fn from_row(row: &SqliteRow) -> Result<Self> {
        let subject: String = row.try_get("subject")?;
        let flashcards: String = row.try_get("flashcards")?;
        let variations: String = row.try_get("variations")?;
        Ok(Self {
            subject: decode_subject(&subject)?,
            summary_template: row.try_get("summary_template")?,
            flashcards: serde_json::from_str(&flashcards)?,
            variations: serde_json::from_str(&variations)?,
            created_at: decode_timestamp(&row.try_get::<String, _>("created_at")?)?,
            updated_at: decode_timestamp(&row.try_get::<String, _>("updated_at")?)?,
        })
    }
}

/// A processed piece of study text with its synthesized outputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyMaterial {
    pub id: i64,
    /// Original text exactly as submitted
    pub input_text: String,
    pub subject: SubjectTag,
    pub summary: String,
    pub flashcards: Vec<String>,
    /// Review points in `YYYY-MM-DD HH:00` form
    pub review_dates: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub processed_at: DateTime<Utc>,
}

impl StudyMaterial {
    /// Decode a `study_materials` row
    pub fn from_row(row: &SqliteRow) -> Result<Self> {
        let subject: String = row.try_get("subject")?;
        let flashcards: String = row.try_get("flashcards")?;
        let review_dates: String = row.try_get("review_dates")?;
        Ok(Self {
            id: row.try_get("id")?,
            input_text: row.try_get("input_text")?,
            subject: decode_subject(&subject)?,
            summary: row.try_get("summary")?,
            flashcards: serde_json::from_str(&flashcards)?,
            review_dates: serde_json::from_str(&review_dates)?,
            created_at: decode_timestamp(&row.try_get::<String, _>("created_at")?)?,
            processed_at: decode_timestamp(&row.try_get::<String, _>("processed_at")?)?,
        })
    }
}

/// A logged usage event against a study material
///
/// `material_id` is a plain integer reference: interactions may outlive the
/// material they point at, so the schema deliberately declares no foreign
/// key for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInteraction {
    pub id: i64,
    pub material_id: i64,
    /// Free-form event label ("process", "api_view", ...)
    pub interaction_type: String,
    /// Optional caller-supplied JSON payload
    pub interaction_data: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl UserInteraction {
    /// Decode a `user_interactions` row
    pub fn from_row(row: &SqliteRow) -> Result<Self> {
        let data: Option<String> = row.try_get("interaction_data")?;
        let interaction_data = match data {
            Some(raw) => Some(serde_json::from_str(&raw)?),
            None => None,
        };
        Ok(Self {
            id: row.try_get("id")?,
            material_id: row.try_get("material_id")?,
            interaction_type: row.try_get("interaction_type")?,
            interaction_data,
            created_at: decode_timestamp(&row.try_get::<String, _>("created_at")?)?,
        })
    }
}

/// Parse an RFC3339 timestamp column back into UTC
fn decode_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::Internal(format!("invalid timestamp '{}' in database: {}", raw, e)))
}

/// Parse a stored subject name; unknown names indicate corrupted storage,
/// not bad user input
fn decode_subject(raw: &str) -> Result<SubjectTag> {
    raw.parse()
        .map_err(|_| Error::Internal(format!("unknown subject '{}' in database", raw)))
}
