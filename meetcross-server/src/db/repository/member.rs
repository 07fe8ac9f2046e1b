//! Member Repository

use super::{RepoError, RepoResult, new_id};
use shared::models::Member;
use sqlx::SqlitePool;

const MEMBER_SELECT: &str = "SELECT id, first_name, last_name, email, phone, gender, status, birth_date, address, family_id, photo_url, baptism_date, notes FROM member";

/// All members, sorted by surname
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Member>> {
    let sql = format!("{MEMBER_SELECT} ORDER BY last_name");
    let rows = sqlx::query_as::<_, Member>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Member>> {
    let sql = format!("{MEMBER_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Member>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Insert-or-update by primary key
///
/// Empty `id` inserts a new row with a server-assigned identifier; any
/// other value updates the existing row and fails with `NotFound` when
/// it does not exist.
pub async fn save(pool: &SqlitePool, mut member: Member) -> RepoResult<Member> {
    if member.id.is_empty() {
        member.id = new_id();
        sqlx::query(
            "INSERT INTO member (id, first_name, last_name, email, phone, gender, status, birth_date, address, family_id, photo_url, baptism_date, notes) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&member.id)
        .bind(&member.first_name)
        .bind(&member.last_name)
        .bind(&member.email)
        .bind(&member.phone)
        .bind(member.gender)
        .bind(member.status)
        .bind(&member.birth_date)
        .bind(&member.address)
        .bind(&member.family_id)
        .bind(&member.photo_url)
        .bind(&member.baptism_date)
        .bind(&member.notes)
        .execute(pool)
        .await?;
    } else {
        let rows = sqlx::query(
            "UPDATE member SET first_name = ?, last_name = ?, email = ?, phone = ?, gender = ?, status = ?, birth_date = ?, address = ?, family_id = ?, photo_url = ?, baptism_date = ?, notes = ? \
             WHERE id = ?",
        )
        .bind(&member.first_name)
        .bind(&member.last_name)
        .bind(&member.email)
        .bind(&member.phone)
        .bind(member.gender)
        .bind(member.status)
        .bind(&member.birth_date)
        .bind(&member.address)
        .bind(&member.family_id)
        .bind(&member.photo_url)
        .bind(&member.baptism_date)
        .bind(&member.notes)
        .bind(&member.id)
        .execute(pool)
        .await?;
        if rows.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Member {} not found", member.id)));
        }
    }

    find_by_id(pool, &member.id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to persist member".into()))
}

/// Delete a member; deleting an unknown id is an error, not a no-op
pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM member WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Member {id} not found")));
    }
    Ok(true)
}
