//! Family Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Family entity
///
/// `head_of_family_id` references a member; members reference families
/// back through `family_id`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Family {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, message = "Family name is required"))]
    pub family_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_of_family_id: Option<String>,
}
