//! Event Repository
//!
//! Event rows plus the attendance join table. Attendance is mutated
//! wholesale by [`set_attendees`]; `save` touches the event row only.

use std::collections::HashMap;

use super::{RepoError, RepoResult, new_id};
use shared::models::{Event, EventType};
use sqlx::SqlitePool;

/// Event row without the attendee list
#[derive(sqlx::FromRow)]
struct EventRow {
    id: String,
    title: String,
    description: String,
    date: String,
    location: String,
    event_type: EventType,
}

impl EventRow {
    fn into_event(self, attendee_ids: Vec<String>) -> Event {
        Event {
            id: self.id,
            title: self.title,
            description: self.description,
            date: self.date,
            location: self.location,
            event_type: self.event_type,
            attendee_ids: Vec::new(),
            attendance_count: 0,
        }
        .with_attendees(attendee_ids)
    }
}

const EVENT_SELECT: &str =
    "SELECT id, title, description, date, location, event_type FROM event";

/// All events with attendee lists, most recent first
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Event>> {
    let sql = format!("{EVENT_SELECT} ORDER BY date DESC");
    let rows = sqlx::query_as::<_, EventRow>(&sql).fetch_all(pool).await?;

    let pairs: Vec<(String, String)> =
        sqlx::query_as("SELECT event_id, member_id FROM attendance")
            .fetch_all(pool)
            .await?;
    let mut by_event: HashMap<String, Vec<String>> = HashMap::new();
    for (event_id, member_id) in pairs {
        by_event.entry(event_id).or_default().push(member_id);
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let attendees = by_event.remove(&row.id).unwrap_or_default();
            row.into_event(attendees)
        })
        .collect())
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Event>> {
    let sql = format!("{EVENT_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, EventRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let attendees: Vec<(String,)> =
        sqlx::query_as("SELECT member_id FROM attendance WHERE event_id = ?")
            .bind(id)
            .fetch_all(pool)
            .await?;

    Ok(Some(
        row.into_event(attendees.into_iter().map(|(m,)| m).collect()),
    ))
}

/// Insert-or-update the event row by primary key
///
/// Any attendee list on the payload is ignored; attendance changes go
/// through [`set_attendees`] only. The returned record reflects the
/// current join rows.
pub async fn save(pool: &SqlitePool, mut event: Event) -> RepoResult<Event> {
    if event.id.is_empty() {
        event.id = new_id();
        sqlx::query(
            "INSERT INTO event (id, title, description, date, location, event_type) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.date)
        .bind(&event.location)
        .bind(event.event_type)
        .execute(pool)
        .await?;
    } else {
        let rows = sqlx::query(
            "UPDATE event SET title = ?, description = ?, date = ?, location = ?, event_type = ? WHERE id = ?",
        )
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.date)
        .bind(&event.location)
        .bind(event.event_type)
        .bind(&event.id)
        .execute(pool)
        .await?;
        if rows.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Event {} not found", event.id)));
        }
    }

    find_by_id(pool, &event.id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to persist event".into()))
}

/// Replace the attendee list wholesale
///
/// Every id must reference an existing member; the delete-and-insert
/// runs in one transaction so readers never observe a partial list.
pub async fn set_attendees(
    pool: &SqlitePool,
    event_id: &str,
    member_ids: &[String],
) -> RepoResult<Event> {
    if find_by_id(pool, event_id).await?.is_none() {
        return Err(RepoError::NotFound(format!("Event {event_id} not found")));
    }

    let mut tx = pool.begin().await?;

    for member_id in member_ids {
        let exists: Option<(String,)> = sqlx::query_as("SELECT id FROM member WHERE id = ?")
            .bind(member_id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Err(RepoError::Validation(format!(
                "Unknown member id: {member_id}"
            )));
        }
    }

    sqlx::query("DELETE FROM attendance WHERE event_id = ?")
        .bind(event_id)
        .execute(&mut *tx)
        .await?;

    for member_id in member_ids {
        sqlx::query("INSERT OR IGNORE INTO attendance (event_id, member_id) VALUES (?, ?)")
            .bind(event_id)
            .bind(member_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    find_by_id(pool, event_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to load event after attendance update".into()))
}
