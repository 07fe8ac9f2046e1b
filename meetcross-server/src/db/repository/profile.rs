//! User Profile Repository

use super::{RepoError, RepoResult, new_id};
use shared::models::{UserProfile, UserRole};
use sqlx::SqlitePool;

const PROFILE_SELECT: &str = "SELECT id, name, email, role, avatar FROM profile";

/// All profiles, unordered
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<UserProfile>> {
    let rows = sqlx::query_as::<_, UserProfile>(PROFILE_SELECT)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<UserProfile>> {
    let sql = format!("{PROFILE_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, UserProfile>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Number of stored profiles; drives the first-registrant-is-admin policy
pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM profile")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

/// Insert-or-update by primary key
///
/// Registration passes the account id as the profile id so the two stay
/// 1:1; profiles created from the user-management screen get a fresh id.
pub async fn save(pool: &SqlitePool, mut profile: UserProfile) -> RepoResult<UserProfile> {
    if profile.id.is_empty() {
        profile.id = new_id();
        insert(pool, &profile).await?;
    } else if find_by_id(pool, &profile.id).await?.is_some() {
        sqlx::query("UPDATE profile SET name = ?, email = ?, role = ?, avatar = ? WHERE id = ?")
            .bind(&profile.name)
            .bind(&profile.email)
            .bind(profile.role)
            .bind(&profile.avatar)
            .bind(&profile.id)
            .execute(pool)
            .await?;
    } else {
        // Registration provisions a row under a caller-supplied account id
        insert(pool, &profile).await?;
    }

    find_by_id(pool, &profile.id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to persist profile".into()))
}

async fn insert(pool: &SqlitePool, profile: &UserProfile) -> RepoResult<()> {
    sqlx::query("INSERT INTO profile (id, name, email, role, avatar) VALUES (?, ?, ?, ?, ?)")
        .bind(&profile.id)
        .bind(&profile.name)
        .bind(&profile.email)
        .bind(profile.role)
        .bind(&profile.avatar)
        .execute(pool)
        .await?;
    Ok(())
}

/// Create the profile row paired with a fresh registration
pub async fn create_for_account(
    pool: &SqlitePool,
    account_id: &str,
    name: &str,
    email: &str,
    role: UserRole,
) -> RepoResult<UserProfile> {
    let profile = UserProfile {
        id: account_id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        avatar: Some(shared::util::placeholder_avatar_url(name)),
    };
    insert(pool, &profile).await?;
    Ok(profile)
}

/// Delete a profile; unknown ids are an error
pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM profile WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("User {id} not found")));
    }
    Ok(true)
}
