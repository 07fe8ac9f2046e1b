//! Donation API handlers

use axum::{Json, extract::State};
use validator::Validate;

use shared::models::Donation;

use crate::core::ServerState;
use crate::db::repository::donation;
use crate::utils::AppResult;

/// GET /api/donations - most recent first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Donation>>> {
    let donations = donation::find_all(&state.pool).await?;
    Ok(Json(donations))
}

/// POST /api/donations - insert-only; any incoming id is stripped
pub async fn add(
    State(state): State<ServerState>,
    Json(payload): Json<Donation>,
) -> AppResult<Json<Donation>> {
    payload.validate()?;
    let donation = donation::add(&state.pool, payload).await?;
    Ok(Json(donation))
}
