//! Interaction logging endpoint

use axum::extract::State;
use axum::Json;
use cogni_common::time;
use serde_json::{json, Value};

use crate::db::interactions;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// POST /api/interaction
///
/// Logs a caller-described interaction. `material_id` and
/// `interaction_type` are required; the full request payload is kept as
/// the interaction's data. The material id is not checked for existence,
/// interactions are weak references.
pub async fn log_interaction(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<Value>> {
    let material_id = payload.get("material_id").and_then(Value::as_i64);
    let interaction_type = payload
        .get("interaction_type")
        .and_then(Value::as_str)
        .map(str::to_string);

    let (Some(material_id), Some(interaction_type)) = (material_id, interaction_type) else {
        return Err(ApiError::BadRequest("Missing required fields".to_string()));
    };

    interactions::log_interaction(
        &state.db,
        material_id,
        &interaction_type,
        Some(&payload),
        time::now(),
    )
    .await?;

    Ok(Json(json!({
        "status": "success",
        "message": "Interaction logged",
    })))
}
