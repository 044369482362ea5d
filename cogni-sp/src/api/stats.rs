//! Usage statistics endpoint

use axum::extract::State;
use axum::Json;
use cogni_common::stats::{compute_stats, StatsReport};

use crate::db::{interactions, materials};
use crate::error::ApiResult;
use crate::AppState;

/// GET /api/stats
///
/// Loads all materials and interactions and tallies them. An empty
/// database reports zero totals with empty breakdown maps.
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<StatsReport>> {
    let materials = materials::all_materials(&state.db).await?;
    let interactions = interactions::all_interactions(&state.db).await?;

    Ok(Json(compute_stats(&materials, &interactions)))
}
