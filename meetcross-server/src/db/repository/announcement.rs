//! Announcement Repository

use super::{RepoError, RepoResult, new_id};
use shared::models::Announcement;
use sqlx::SqlitePool;

const ANNOUNCEMENT_SELECT: &str = "SELECT id, title, message, date, target, target_member_id, author, sent_via_email FROM announcement";

/// All announcements, newest first
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Announcement>> {
    let sql = format!("{ANNOUNCEMENT_SELECT} ORDER BY date DESC");
    let rows = sqlx::query_as::<_, Announcement>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Announcement>> {
    let sql = format!("{ANNOUNCEMENT_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Announcement>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Insert-or-update by primary key
pub async fn save(pool: &SqlitePool, mut announcement: Announcement) -> RepoResult<Announcement> {
    if announcement.date.is_empty() {
        announcement.date = shared::util::today_iso();
    }

    if announcement.id.is_empty() {
        announcement.id = new_id();
        sqlx::query(
            "INSERT INTO announcement (id, title, message, date, target, target_member_id, author, sent_via_email) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&announcement.id)
        .bind(&announcement.title)
        .bind(&announcement.message)
        .bind(&announcement.date)
        .bind(announcement.target)
        .bind(&announcement.target_member_id)
        .bind(&announcement.author)
        .bind(announcement.sent_via_email)
        .execute(pool)
        .await?;
    } else {
        let rows = sqlx::query(
            "UPDATE announcement SET title = ?, message = ?, date = ?, target = ?, target_member_id = ?, author = ?, sent_via_email = ? \
             WHERE id = ?",
        )
        .bind(&announcement.title)
        .bind(&announcement.message)
        .bind(&announcement.date)
        .bind(announcement.target)
        .bind(&announcement.target_member_id)
        .bind(&announcement.author)
        .bind(announcement.sent_via_email)
        .bind(&announcement.id)
        .execute(pool)
        .await?;
        if rows.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!(
                "Announcement {} not found",
                announcement.id
            )));
        }
    }

    find_by_id(pool, &announcement.id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to persist announcement".into()))
}

/// Delete an announcement; unknown ids are an error
pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM announcement WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Announcement {id} not found")));
    }
    Ok(true)
}
