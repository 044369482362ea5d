//! Subject configuration endpoints
//!
//! Lookup here is exact: unlike the processing pipeline, these endpoints
//! never fall back to `general`. A subject name outside the tag set gets
//! the same 404 as a tag whose row is missing.

use axum::extract::{Path, State};
use axum::Json;
use cogni_common::db::models::SubjectConfig;
use cogni_common::db::subject_configs::{self, SubjectConfigUpdate};
use cogni_common::{time, SubjectTag};
use serde_json::{json, Value};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

fn parse_subject(raw: &str) -> ApiResult<SubjectTag> {
    raw.parse::<SubjectTag>()
        .map_err(|_| ApiError::NotFound("Subject configuration not found".to_string()))
}

/// GET /api/subject-configs
pub async fn list_subject_configs(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<SubjectConfig>>> {
    let configs = subject_configs::list(&state.db).await?;
    Ok(Json(configs))
}

/// GET /api/subject-configs/:subject
pub async fn get_subject_config(
    State(state): State<AppState>,
    Path(subject): Path<String>,
) -> ApiResult<Json<SubjectConfig>> {
    let subject = parse_subject(&subject)?;

    match subject_configs::get(&state.db, subject).await? {
        Some(config) => Ok(Json(config)),
        None => Err(ApiError::NotFound(
            "Subject configuration not found".to_string(),
        )),
    }
}

/// PUT /api/subject-configs/:subject
///
/// Partial update of template, flashcards and/or variations. Fields left
/// out of the payload keep their stored values; provided-but-empty fields
/// are rejected with a 400 before anything is written.
pub async fn update_subject_config(
    State(state): State<AppState>,
    Path(subject): Path<String>,
    Json(changes): Json<SubjectConfigUpdate>,
) -> ApiResult<Json<Value>> {
    let subject = parse_subject(&subject)?;

    subject_configs::update(&state.db, subject, changes, time::now())
        .await
        .map_err(|err| match err {
            cogni_common::Error::NotFound(_) => {
                ApiError::NotFound("Subject configuration not found".to_string())
            }
            other => other.into(),
        })?;
    info!("Updated subject config '{}'", subject);

    Ok(Json(json!({
        "status": "success",
        "message": "Subject configuration updated",
    })))
}
