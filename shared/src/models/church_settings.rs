//! Church Settings Model (Singleton)
//!
//! Exactly one row, upserted under the fixed key "1". Reads fall back to
//! the built-in default so the application renders before first-time
//! setup.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fixed primary key of the singleton settings row
pub const SETTINGS_ID: &str = "1";

/// Organization-wide settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct ChurchSettings {
    pub name: String,
    pub address: String,
    pub currency: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl Default for ChurchSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            currency: "$".to_string(),
            email: String::new(),
            phone: String::new(),
            logo_url: None,
        }
    }
}
