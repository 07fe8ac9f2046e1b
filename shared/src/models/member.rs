//! Member Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Member gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum Gender {
    Male,
    Female,
}

/// Membership status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum MemberStatus {
    Active,
    Inactive,
    Visitor,
}

impl Default for MemberStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// Member entity
///
/// `family_id` is nullable; deleting the referenced family nulls it on
/// every member in the same transaction.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub gender: Gender,
    #[serde(default)]
    pub status: MemberStatus,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baptism_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_deserializes_without_id() {
        let json = r#"{
            "firstName": "Ada",
            "lastName": "Lovelace",
            "gender": "Female"
        }"#;
        let member: Member = serde_json::from_str(json).expect("valid member json");
        assert!(member.id.is_empty());
        assert_eq!(member.status, MemberStatus::Active);
        assert!(member.family_id.is_none());
    }

    #[test]
    fn test_member_validation_rejects_blank_names() {
        let member = Member {
            id: String::new(),
            first_name: String::new(),
            last_name: "Lovelace".into(),
            email: String::new(),
            phone: String::new(),
            gender: Gender::Female,
            status: MemberStatus::Active,
            birth_date: String::new(),
            address: String::new(),
            family_id: None,
            photo_url: None,
            baptism_date: None,
            notes: None,
        };
        assert!(validator::Validate::validate(&member).is_err());
    }
}
