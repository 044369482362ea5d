//! Study material queries

use chrono::{DateTime, Utc};
use cogni_common::db::models::StudyMaterial;
use cogni_common::{Result, SubjectTag};
use sqlx::SqlitePool;

/// New material row; list fields are JSON-encoded on insert
#[derive(Debug)]
pub struct NewMaterial<'a> {
    pub input_text: &'a str,
    pub subject: SubjectTag,
    pub summary: &'a str,
    pub flashcards: &'a [String],
    /// Already-formatted `YYYY-MM-DD HH:00` strings
    pub review_dates: &'a [String],
    pub created_at: DateTime<Utc>,
    pub processed_at: DateTime<Utc>,
}

/// Insert a material and return its assigned id
pub async fn insert_material(pool: &SqlitePool, material: &NewMaterial<'_>) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO study_materials
            (input_text, subject, summary, flashcards, review_dates, created_at, processed_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(material.input_text)
    .bind(material.subject.as_str())
    .bind(material.summary)
    .bind(serde_json::to_string(material.flashcards)?)
    .bind(serde_json::to_string(material.review_dates)?)
    .bind(material.created_at.to_rfc3339())
    .bind(material.processed_at.to_rfc3339())
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Fetch one material by id
pub async fn material_by_id(pool: &SqlitePool, id: i64) -> Result<Option<StudyMaterial>> {
    let row = sqlx::query("SELECT * FROM study_materials WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(StudyMaterial::from_row).transpose()
}

/// Most recently created materials, newest first
pub async fn recent_materials(pool: &SqlitePool, limit: i64) -> Result<Vec<StudyMaterial>> {
    let rows =
        sqlx::query("SELECT * FROM study_materials ORDER BY created_at DESC, id DESC LIMIT ?")
            .bind(limit)
            .fetch_all(pool)
            .await?;

    rows.iter().map(StudyMaterial::from_row).collect()
}

/// Most recent materials carrying exactly `subject`
pub async fn materials_by_subject(
    pool: &SqlitePool,
    subject: SubjectTag,
    limit: i64,
) -> Result<Vec<StudyMaterial>> {
    let rows = sqlx::query(
        "SELECT * FROM study_materials WHERE subject = ? ORDER BY created_at DESC, id DESC LIMIT ?",
    )
    .bind(subject.as_str())
    .bind(limit)
    .fetch_all(pool)
    .await?;

    rows.iter().map(StudyMaterial::from_row).collect()
}

/// Every material, oldest first; feeds analytics aggregation
pub async fn all_materials(pool: &SqlitePool) -> Result<Vec<StudyMaterial>> {
    let rows = sqlx::query("SELECT * FROM study_materials ORDER BY id")
        .fetch_all(pool)
        .await?;

    rows.iter().map(StudyMaterial::from_row).collect()
}

/// Number of stored materials
pub async fn count_materials(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM study_materials")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
