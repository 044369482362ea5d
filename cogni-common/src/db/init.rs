//! Database initialization
//!
//! Opens (creating if needed) the SQLite database, applies the schema and
//! seeds the subject configuration catalog. Every step is idempotent, so
//! initialization runs unconditionally on each startup.

use crate::db::subject_configs;
use crate::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;

/// Open the database at `db_path`, creating file and schema on first run
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;

    // WAL allows concurrent readers while a process request writes
    sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;

    sqlx::query("PRAGMA busy_timeout = 5000").execute(&pool).await?;

    init_schema(&pool).await?;

    Ok(pool)
}

/// Apply the schema and seed the subject config catalog.
///
/// Safe to call repeatedly; also used directly by tests running against
/// in-memory databases.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    create_subject_configs_table(pool).await?;
    create_study_materials_table(pool).await?;
    create_user_interactions_table(pool).await?;

    subject_configs::seed(pool, crate::time::now()).await?;

    Ok(())
}

async fn create_subject_configs_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS subject_configs (
            subject TEXT PRIMARY KEY,
            summary_template TEXT NOT NULL,
            flashcards TEXT NOT NULL,
            variations TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_study_materials_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS study_materials (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            input_text TEXT NOT NULL,
            subject TEXT NOT NULL,
            summary TEXT NOT NULL,
            flashcards TEXT NOT NULL,
            review_dates TEXT NOT NULL,
            created_at TEXT NOT NULL,
            processed_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_study_materials_subject ON study_materials(subject)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_study_materials_created_at ON study_materials(created_at)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_user_interactions_table(pool: &SqlitePool) -> Result<()> {
    // material_id carries no FOREIGN KEY constraint: interaction rows are
    // kept even when they reference an id no material has (or no longer has)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_interactions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            material_id INTEGER NOT NULL,
            interaction_type TEXT NOT NULL,
            interaction_data TEXT,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_user_interactions_material_id ON user_interactions(material_id)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_user_interactions_type ON user_interactions(interaction_type)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
