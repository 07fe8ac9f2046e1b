//! Member API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use shared::models::Member;

use crate::core::ServerState;
use crate::db::repository::member;
use crate::utils::AppResult;

/// GET /api/members - all members, sorted by surname
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Member>>> {
    let members = member::find_all(&state.pool).await?;
    Ok(Json(members))
}

/// POST /api/members - insert-or-update by primary key
pub async fn save(
    State(state): State<ServerState>,
    Json(payload): Json<Member>,
) -> AppResult<Json<Member>> {
    payload.validate()?;
    let member = member::save(&state.pool, payload).await?;
    Ok(Json(member))
}

/// DELETE /api/members/{id}
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let result = member::delete(&state.pool, &id).await?;
    Ok(Json(result))
}
