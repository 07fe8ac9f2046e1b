//! User Profile Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Application role
///
/// Admin is the only role with user-management rights. The first
/// registered account is promoted to Admin; everyone after defaults to
/// Staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum UserRole {
    Admin,
    Pastor,
    Treasurer,
    Staff,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Staff
    }
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Pastor => "Pastor",
            Self::Treasurer => "Treasurer",
            Self::Staff => "Staff",
        }
    }
}

/// User profile entity
///
/// 1:1 with an identity account when provisioned through registration.
/// Profiles created from the user-management screen have no account and
/// cannot log in until one is provisioned for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl UserProfile {
    /// Placeholder profile for an authenticated account with no profile row.
    ///
    /// Keeps the UI usable when profile provisioning lags account signup:
    /// display name comes from the email local-part, role defaults to
    /// Staff, the avatar is a generated placeholder.
    pub fn placeholder(account_id: &str, email: &str) -> Self {
        let name = crate::util::email_local_part(email).to_string();
        let avatar = crate::util::placeholder_avatar_url(&name);
        Self {
            id: account_id.to_string(),
            name,
            email: email.to_string(),
            role: UserRole::default(),
            avatar: Some(avatar),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_profile() {
        let profile = UserProfile::placeholder("acc-1", "grace@example.com");
        assert_eq!(profile.id, "acc-1");
        assert_eq!(profile.name, "grace");
        assert_eq!(profile.role, UserRole::Staff);
        assert!(profile.avatar.as_deref().unwrap_or("").contains("grace"));
    }
}
