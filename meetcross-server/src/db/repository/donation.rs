//! Donation Repository
//!
//! Insert-only: the observed workflow exposes no edit or delete path, and
//! any incoming identifier is stripped so callers cannot overwrite rows.

use super::{RepoError, RepoResult, new_id};
use shared::models::Donation;
use sqlx::SqlitePool;

const DONATION_SELECT: &str =
    "SELECT id, member_id, amount, date, fund, method, notes FROM donation";

/// All donations, most recent first
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Donation>> {
    let sql = format!("{DONATION_SELECT} ORDER BY date DESC");
    let rows = sqlx::query_as::<_, Donation>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Donation>> {
    let sql = format!("{DONATION_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Donation>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Record a donation; a null `member_id` means anonymous
pub async fn add(pool: &SqlitePool, mut donation: Donation) -> RepoResult<Donation> {
    donation.id = new_id();
    sqlx::query(
        "INSERT INTO donation (id, member_id, amount, date, fund, method, notes) VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&donation.id)
    .bind(&donation.member_id)
    .bind(donation.amount)
    .bind(&donation.date)
    .bind(donation.fund)
    .bind(donation.method)
    .bind(&donation.notes)
    .execute(pool)
    .await?;

    find_by_id(pool, &donation.id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to persist donation".into()))
}
