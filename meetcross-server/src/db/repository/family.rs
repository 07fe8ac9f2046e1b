//! Family Repository

use super::{RepoError, RepoResult, new_id};
use shared::models::Family;
use sqlx::SqlitePool;

const FAMILY_SELECT: &str = "SELECT id, family_name, address, head_of_family_id FROM family";

/// All families, unordered
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Family>> {
    let rows = sqlx::query_as::<_, Family>(FAMILY_SELECT)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Family>> {
    let sql = format!("{FAMILY_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Family>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Insert-or-update by primary key
pub async fn save(pool: &SqlitePool, mut family: Family) -> RepoResult<Family> {
    if family.id.is_empty() {
        family.id = new_id();
        sqlx::query("INSERT INTO family (id, family_name, address, head_of_family_id) VALUES (?, ?, ?, ?)")
            .bind(&family.id)
            .bind(&family.family_name)
            .bind(&family.address)
            .bind(&family.head_of_family_id)
            .execute(pool)
            .await?;
    } else {
        let rows = sqlx::query(
            "UPDATE family SET family_name = ?, address = ?, head_of_family_id = ? WHERE id = ?",
        )
        .bind(&family.family_name)
        .bind(&family.address)
        .bind(&family.head_of_family_id)
        .bind(&family.id)
        .execute(pool)
        .await?;
        if rows.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Family {} not found", family.id)));
        }
    }

    find_by_id(pool, &family.id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to persist family".into()))
}

/// Delete a family and null `family_id` on every member that referenced it
///
/// Both statements run in one transaction so a crash cannot leave
/// dangling member references.
pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let mut tx = pool.begin().await?;

    sqlx::query("UPDATE member SET family_id = NULL WHERE family_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let rows = sqlx::query("DELETE FROM family WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if rows.rows_affected() == 0 {
        // Dropping the transaction rolls the member update back
        return Err(RepoError::NotFound(format!("Family {id} not found")));
    }

    tx.commit().await?;
    Ok(true)
}
