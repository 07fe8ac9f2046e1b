//! Church Settings Repository (Singleton)

use super::RepoResult;
use shared::models::ChurchSettings;
use shared::models::church_settings::SETTINGS_ID;
use sqlx::SqlitePool;

const SETTINGS_SELECT: &str =
    "SELECT name, address, currency, email, phone, logo_url FROM settings WHERE id = ?";

/// Read the singleton settings row
///
/// Absence is not an error: the application must render before
/// first-time setup, so a missing row yields the built-in default.
pub async fn get(pool: &SqlitePool) -> RepoResult<ChurchSettings> {
    let row: Option<ChurchSettings> = sqlx::query_as(SETTINGS_SELECT)
        .bind(SETTINGS_ID)
        .fetch_optional(pool)
        .await?;
    Ok(row.unwrap_or_default())
}

/// Upsert under the fixed singleton key
pub async fn save(pool: &SqlitePool, settings: ChurchSettings) -> RepoResult<ChurchSettings> {
    sqlx::query(
        "INSERT INTO settings (id, name, address, currency, email, phone, logo_url) \
         VALUES (?, ?, ?, ?, ?, ?, ?) \
         ON CONFLICT(id) DO UPDATE SET \
             name = excluded.name, \
             address = excluded.address, \
             currency = excluded.currency, \
             email = excluded.email, \
             phone = excluded.phone, \
             logo_url = excluded.logo_url",
    )
    .bind(SETTINGS_ID)
    .bind(&settings.name)
    .bind(&settings.address)
    .bind(&settings.currency)
    .bind(&settings.email)
    .bind(&settings.phone)
    .bind(&settings.logo_url)
    .execute(pool)
    .await?;

    get(pool).await
}
