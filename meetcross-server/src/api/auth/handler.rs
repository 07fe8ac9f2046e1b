//! Authentication handlers

use axum::{Json, extract::State, http::HeaderMap};
use validator::Validate;

use shared::client::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use shared::models::UserProfile;

use crate::auth::{JwtService, SessionState};
use crate::core::ServerState;
use crate::utils::AppResult;

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(JwtService::extract_from_header)
}

/// POST /api/auth/login
///
/// Returns the session token only; the caller fetches the profile with a
/// follow-up `/api/auth/me` call.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    req.validate()?;
    let token = state.sessions.login(&req.email, &req.password).await?;
    Ok(Json(LoginResponse { token }))
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<Json<RegisterResponse>> {
    req.validate()?;
    let profile = state
        .sessions
        .register(&req.email, &req.password, &req.name)
        .await?;
    Ok(Json(RegisterResponse { profile }))
}

/// GET /api/auth/me - resolve the current user's profile
pub async fn me(
    State(state): State<ServerState>,
    headers: HeaderMap,
) -> AppResult<Json<UserProfile>> {
    match state.sessions.current_user(bearer_token(&headers)).await {
        SessionState::Authenticated(profile) => Ok(Json(profile)),
        _ => Err(crate::utils::AppError::unauthorized()),
    }
}

/// POST /api/auth/logout - idempotent
pub async fn logout(State(state): State<ServerState>) -> AppResult<Json<()>> {
    state.sessions.logout();
    Ok(Json(()))
}
