//! User management handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use validator::Validate;

use shared::models::UserProfile;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::profile;
use crate::utils::{AppError, AppResult};

/// GET /api/users
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<UserProfile>>> {
    let users = profile::find_all(&state.pool).await?;
    Ok(Json(users))
}

/// POST /api/users - insert-or-update by primary key
pub async fn save(
    State(state): State<ServerState>,
    Json(payload): Json<UserProfile>,
) -> AppResult<Json<UserProfile>> {
    payload.validate()?;
    let user = profile::save(&state.pool, payload).await?;
    Ok(Json(user))
}

/// DELETE /api/users/{id}
///
/// The acting user may not delete themselves.
pub async fn remove(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if current_user.id == id {
        return Err(AppError::forbidden("You cannot delete your own account"));
    }

    let result = profile::delete(&state.pool, &id).await?;
    Ok(Json(result))
}
