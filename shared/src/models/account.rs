//! Identity Account Model
//!
//! The identity-provider side of authentication, kept separate from
//! [`UserProfile`](super::UserProfile) so the two failure domains stay
//! decoupled: an account can exist without a profile (registration
//! partially failed) and a profile without an account (created from the
//! user-management screen).

use serde::{Deserialize, Serialize};

/// Identity account backing login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Account {
    pub id: String,
    pub email: String,
    /// Argon2 PHC string; never serialized to clients
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: i64,
}
