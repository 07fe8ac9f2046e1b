//! Client-facing API DTOs
//!
//! Request/response types shared between the server and clients.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::UserProfile;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login response
///
/// Deliberately carries the session token only: authentication success and
/// profile availability are decoupled failure domains, so the caller
/// fetches the profile with a follow-up `/api/auth/me` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}

/// Registration response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub profile: UserProfile,
}

// =============================================================================
// Entity API DTOs
// =============================================================================

/// Wholesale attendance replacement for one event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceUpdate {
    pub member_ids: Vec<String>,
}
