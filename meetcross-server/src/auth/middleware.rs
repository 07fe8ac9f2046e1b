//! Authentication middleware
//!
//! Axum middleware for the service API key, JWT authentication and the
//! admin guard.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use shared::models::UserRole;

use crate::auth::{CurrentUser, JwtError, JwtService, SessionState};
use crate::core::ServerState;
use crate::utils::AppError;

/// Routes reachable without a bearer token (API key still required)
fn is_public_api_route(path: &str) -> bool {
    matches!(
        path,
        "/api/auth/login" | "/api/auth/register" | "/api/health"
    )
}

/// Service API key middleware
///
/// Every `/api/` request must present the configured key in `x-api-key`.
/// The key is the service credential of the deployment, checked before
/// any authentication runs.
pub async fn require_api_key(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if req.method() == http::Method::OPTIONS || !req.uri().path().starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    let presented = req
        .headers()
        .get("x-api-key")
        .and_then(|h| h.to_str().ok());

    match presented {
        Some(key) if key == state.config.api_key => Ok(next.run(req).await),
        Some(_) => {
            tracing::warn!(uri = %req.uri(), "Rejected request with wrong API key");
            Err(AppError::invalid_token())
        }
        None => Err(AppError::unauthorized()),
    }
}

/// Authentication middleware — requires a logged-in user
///
/// Extracts and validates the JWT from `Authorization: Bearer <token>`,
/// then injects [`CurrentUser`] into request extensions.
///
/// Skipped for: `OPTIONS` (CORS preflight), non-`/api/` paths, and the
/// public routes (login, register, health).
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    if req.method() == http::Method::OPTIONS || !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    if is_public_api_route(path) {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => {
            JwtService::extract_from_header(header).ok_or_else(AppError::invalid_token)?
        }
        None => {
            tracing::warn!(uri = %req.uri(), "Missing authorization header");
            return Err(AppError::unauthorized());
        }
    };

    match state.jwt.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::from(claims);
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(error = %e, uri = %req.uri(), "Authentication failed");
            match e {
                JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token()),
            }
        }
    }
}

/// Admin guard — requires the acting user's profile role to be Admin
///
/// The role is resolved fresh from storage on every check rather than
/// trusted from the token, so demotions take effect immediately. An
/// account whose profile is missing resolves to the placeholder (Staff)
/// and is rejected.
pub async fn require_admin(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .cloned()
        .ok_or_else(AppError::unauthorized)?;

    let resolved = state
        .sessions
        .current_user(Some(
            req.headers()
                .get(http::header::AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .and_then(JwtService::extract_from_header)
                .unwrap_or_default(),
        ))
        .await;

    match resolved {
        SessionState::Authenticated(profile) if profile.role == UserRole::Admin => {
            Ok(next.run(req).await)
        }
        _ => {
            tracing::warn!(account_id = %user.id, "Admin permission denied");
            Err(AppError::forbidden("Admin role required"))
        }
    }
}
