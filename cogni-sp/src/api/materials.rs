//! Material listing and retrieval endpoints

use axum::extract::{Path, Query, State};
use axum::Json;
use cogni_common::db::models::StudyMaterial;
use cogni_common::{time, SubjectTag};
use serde::Deserialize;

use crate::db::{interactions, materials};
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Largest accepted ?limit= value
const MAX_LIMIT: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct MaterialsQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub subject: Option<String>,
}

fn default_limit() -> i64 {
    10
}

/// GET /api/materials?limit=&subject=
///
/// Recent materials, newest first. An unknown subject filter matches
/// nothing and yields an empty list rather than an error.
pub async fn list_materials(
    State(state): State<AppState>,
    Query(query): Query<MaterialsQuery>,
) -> ApiResult<Json<Vec<StudyMaterial>>> {
    let limit = query.limit.clamp(1, MAX_LIMIT);

    let materials = match query.subject.as_deref() {
        Some(raw) => match raw.parse::<SubjectTag>() {
            Ok(subject) => materials::materials_by_subject(&state.db, subject, limit).await?,
            Err(_) => Vec::new(),
        },
        None => materials::recent_materials(&state.db, limit).await?,
    };

    Ok(Json(materials))
}

/// GET /api/materials/:id
///
/// Single material lookup; every successful lookup logs an `api_view`
/// interaction against the material.
pub async fn get_material(
    State(state): State<AppState>,
    Path(material_id): Path<i64>,
) -> ApiResult<Json<StudyMaterial>> {
    let Some(material) = materials::material_by_id(&state.db, material_id).await? else {
        return Err(ApiError::NotFound("Material not found".to_string()));
    };

    interactions::log_interaction(&state.db, material_id, "api_view", None, time::now()).await?;

    Ok(Json(material))
}
