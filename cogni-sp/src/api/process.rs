//! POST /api/process: run the study pipeline over submitted text

use axum::extract::State;
use axum::Json;
use cogni_common::schedule::format_review_date;
use cogni_common::{process, time, SubjectTag};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::db::interactions;
use crate::db::materials::{self, NewMaterial};
use crate::error::{ApiError, ApiResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    /// Raw study text; stored exactly as submitted
    #[serde(default)]
    pub study_material: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub material_id: i64,
    pub subject: SubjectTag,
    pub summary: String,
    pub flashcards: Vec<String>,
    pub review_dates: Vec<String>,
}

/// POST /api/process
///
/// Classify, synthesize and schedule the submitted text, persist the
/// resulting material, then log a `process` interaction against it.
/// Empty or whitespace-only input is rejected before the pipeline runs.
pub async fn process_study_material(
    State(state): State<AppState>,
    Json(payload): Json<ProcessRequest>,
) -> ApiResult<Json<ProcessResponse>> {
    let input_text = payload.study_material.unwrap_or_default();
    if input_text.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Please enter some study material.".to_string(),
        ));
    }

    // One reference instant for the schedule and both row timestamps
    let now = time::now();
    let mut rng = StdRng::from_entropy();
    let processed = process::process_input(&state.db, &input_text, now, &mut rng).await?;

    let review_dates: Vec<String> = processed
        .review_dates
        .iter()
        .map(|d| format_review_date(*d))
        .collect();

    let material_id = materials::insert_material(
        &state.db,
        &NewMaterial {
            input_text: &input_text,
            subject: processed.subject,
            summary: &processed.summary,
            flashcards: &processed.flashcards,
            review_dates: &review_dates,
            created_at: now,
            processed_at: now,
        },
    )
    .await?;

    interactions::log_interaction(&state.db, material_id, "process", None, now).await?;

    info!(
        "Processed study material {} as '{}'",
        material_id, processed.subject
    );

    Ok(Json(ProcessResponse {
        material_id,
        subject: processed.subject,
        summary: processed.summary,
        flashcards: processed.flashcards,
        review_dates,
    }))
}
