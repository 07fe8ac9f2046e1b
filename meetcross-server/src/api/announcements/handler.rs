//! Announcement API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use shared::models::Announcement;

use crate::core::ServerState;
use crate::db::repository::announcement;
use crate::utils::AppResult;

/// GET /api/announcements - newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Announcement>>> {
    let announcements = announcement::find_all(&state.pool).await?;
    Ok(Json(announcements))
}

/// POST /api/announcements - insert-or-update by primary key
pub async fn save(
    State(state): State<ServerState>,
    Json(payload): Json<Announcement>,
) -> AppResult<Json<Announcement>> {
    payload.validate()?;
    let announcement = announcement::save(&state.pool, payload).await?;
    Ok(Json(announcement))
}

/// DELETE /api/announcements/{id}
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let result = announcement::delete(&state.pool, &id).await?;
    Ok(Json(result))
}
