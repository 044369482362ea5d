//! User interaction logging and queries
//!
//! Interactions are append-only. `material_id` is stored as given; the
//! schema keeps it a weak reference so logging never fails because the
//! referenced material is gone or never existed.

use chrono::{DateTime, Utc};
use cogni_common::db::models::UserInteraction;
use cogni_common::Result;
use sqlx::SqlitePool;

/// Append one interaction and return its assigned id
pub async fn log_interaction(
    pool: &SqlitePool,
    material_id: i64,
    interaction_type: &str,
    interaction_data: Option<&serde_json::Value>,
    now: DateTime<Utc>,
) -> Result<i64> {
    let data_text = match interaction_data {
        Some(value) => Some(serde_json::to_string(value)?),
        None => None,
    };

    let result = sqlx::query(
        r#"
        INSERT INTO user_interactions (material_id, interaction_type, interaction_data, created_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(material_id)
    .bind(interaction_type)
    .bind(data_text)
    .bind(now.to_rfc3339())
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Every interaction, oldest first; feeds analytics aggregation
pub async fn all_interactions(pool: &SqlitePool) -> Result<Vec<UserInteraction>> {
    let rows = sqlx::query("SELECT * FROM user_interactions ORDER BY id")
        .fetch_all(pool)
        .await?;

    rows.iter().map(UserInteraction::from_row).collect()
}
