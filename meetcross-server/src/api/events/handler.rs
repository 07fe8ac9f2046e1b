//! Event API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use shared::client::AttendanceUpdate;
use shared::models::Event;

use crate::core::ServerState;
use crate::db::repository::event;
use crate::utils::AppResult;

/// GET /api/events - most recent first, with attendee lists
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Event>>> {
    let events = event::find_all(&state.pool).await?;
    Ok(Json(events))
}

/// POST /api/events - insert-or-update by primary key
pub async fn save(
    State(state): State<ServerState>,
    Json(payload): Json<Event>,
) -> AppResult<Json<Event>> {
    payload.validate()?;
    let event = event::save(&state.pool, payload).await?;
    Ok(Json(event))
}

/// PUT /api/events/{id}/attendance - replace the attendee list wholesale
pub async fn set_attendance(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<AttendanceUpdate>,
) -> AppResult<Json<Event>> {
    let event = event::set_attendees(&state.pool, &id, &payload.member_ids).await?;
    Ok(Json(event))
}
