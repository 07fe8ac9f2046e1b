//! Announcement Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Announcement audience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum AnnouncementTarget {
    All,
    Individual,
}

impl Default for AnnouncementTarget {
    fn default() -> Self {
        Self::All
    }
}

/// Announcement entity, listed newest-first
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub target: AnnouncementTarget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_member_id: Option<String>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub sent_via_email: bool,
}
