//! Family API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use shared::models::Family;

use crate::core::ServerState;
use crate::db::repository::family;
use crate::utils::AppResult;

/// GET /api/families
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Family>>> {
    let families = family::find_all(&state.pool).await?;
    Ok(Json(families))
}

/// POST /api/families - insert-or-update by primary key
pub async fn save(
    State(state): State<ServerState>,
    Json(payload): Json<Family>,
) -> AppResult<Json<Family>> {
    payload.validate()?;
    let family = family::save(&state.pool, payload).await?;
    Ok(Json(family))
}

/// DELETE /api/families/{id}
///
/// Also nulls `family_id` on every member of the family, in one
/// transaction.
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let result = family::delete(&state.pool, &id).await?;
    Ok(Json(result))
}
