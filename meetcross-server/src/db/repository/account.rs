//! Identity Account Repository

use super::{RepoError, RepoResult, new_id};
use shared::models::Account;
use sqlx::SqlitePool;

const ACCOUNT_SELECT: &str = "SELECT id, email, password_hash, created_at FROM account";

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Account>> {
    let sql = format!("{ACCOUNT_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Account>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<Account>> {
    let sql = format!("{ACCOUNT_SELECT} WHERE email = ?");
    let row = sqlx::query_as::<_, Account>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Create an identity account with an already-hashed password
pub async fn create(pool: &SqlitePool, email: &str, password_hash: &str) -> RepoResult<Account> {
    if find_by_email(pool, email).await?.is_some() {
        return Err(RepoError::Duplicate(email.to_string()));
    }

    let account = Account {
        id: new_id(),
        email: email.to_string(),
        password_hash: password_hash.to_string(),
        created_at: shared::util::now_millis(),
    };

    sqlx::query("INSERT INTO account (id, email, password_hash, created_at) VALUES (?, ?, ?, ?)")
        .bind(&account.id)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(account.created_at)
        .execute(pool)
        .await?;

    Ok(account)
}
