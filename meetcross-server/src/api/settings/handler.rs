//! Church settings handlers

use axum::{Json, extract::State};
use validator::Validate;

use shared::models::ChurchSettings;

use crate::core::ServerState;
use crate::db::repository::settings;
use crate::utils::AppResult;

/// GET /api/settings - built-in default when no row exists yet
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<ChurchSettings>> {
    let settings = settings::get(&state.pool).await?;
    Ok(Json(settings))
}

/// PUT /api/settings - upsert under the fixed singleton key
pub async fn save(
    State(state): State<ServerState>,
    Json(payload): Json<ChurchSettings>,
) -> AppResult<Json<ChurchSettings>> {
    payload.validate()?;
    let settings = settings::save(&state.pool, payload).await?;
    Ok(Json(settings))
}
