//! Event Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Event type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum EventType {
    Service,
    Meeting,
    Program,
}

/// Event entity
///
/// Attendance is stored in a join table and mutated wholesale by the
/// attendance workflow; `attendee_ids` and the derived `attendance_count`
/// reflect the join rows at read time.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default)]
    pub attendee_ids: Vec<String>,
    #[serde(default)]
    pub attendance_count: u32,
}

impl Event {
    /// Attach the attendee list, keeping the derived count consistent
    pub fn with_attendees(mut self, attendee_ids: Vec<String>) -> Self {
        self.attendance_count = attendee_ids.len() as u32;
        self.attendee_ids = attendee_ids;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_uses_type_key() {
        let json = r#"{"title": "Sunday Service", "date": "2026-03-01", "type": "Service"}"#;
        let event: Event = serde_json::from_str(json).expect("valid event json");
        assert_eq!(event.event_type, EventType::Service);
        assert!(event.attendee_ids.is_empty());
        assert_eq!(event.attendance_count, 0);
    }

    #[test]
    fn test_with_attendees_keeps_count_in_sync() {
        let event: Event = serde_json::from_str(
            r#"{"title": "Choir", "date": "2026-03-02", "type": "Program"}"#,
        )
        .expect("valid event json");
        let event = event.with_attendees(vec!["m1".into(), "m2".into()]);
        assert_eq!(event.attendance_count, 2);
    }
}
