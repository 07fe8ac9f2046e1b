//! Donation Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Donation fund category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum FundType {
    Tithe,
    Offering,
    #[serde(rename = "Building Fund")]
    #[cfg_attr(feature = "db", sqlx(rename = "Building Fund"))]
    Building,
    Missions,
}

/// Payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum PaymentMethod {
    Cash,
    Cheque,
    Transfer,
}

/// Donation entity
///
/// Insert-only: no update or delete path is exposed. A null `member_id`
/// records an anonymous donation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
    #[validate(range(min = 0.01, message = "Amount must be positive"))]
    pub amount: f64,
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,
    pub fund: FundType,
    pub method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_building_fund_wire_name() {
        let json = serde_json::to_string(&FundType::Building).expect("serialize fund");
        assert_eq!(json, r#""Building Fund""#);
        let fund: FundType = serde_json::from_str(r#""Building Fund""#).expect("deserialize fund");
        assert_eq!(fund, FundType::Building);
    }

    #[test]
    fn test_anonymous_donation_has_no_member() {
        let json = r#"{"amount": 500.0, "date": "2026-01-10", "fund": "Tithe", "method": "Cash"}"#;
        let donation: Donation = serde_json::from_str(json).expect("valid donation json");
        assert!(donation.member_id.is_none());
        assert_eq!(donation.amount, 500.0);
    }
}
