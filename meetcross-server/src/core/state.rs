//! Server state
//!
//! [`ServerState`] holds shared references to every service a handler
//! needs. Cloning is shallow (`Arc` / pool handles), so it is passed by
//! value into the axum router.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::{JwtService, SessionManager};
use crate::core::{Config, Result, ServerError};
use crate::db::DbService;

#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// JWT token service
    pub jwt: Arc<JwtService>,
    /// Session manager (login, register, current-user resolution)
    pub sessions: Arc<SessionManager>,
}

impl ServerState {
    /// Initialize server state
    ///
    /// Order: work directory layout, database (pool + migrations), JWT
    /// service, session manager.
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let db_path = config.database_dir().join("meetcross.db");
        let db = DbService::new(&db_path.to_string_lossy())
            .await
            .map_err(|e| ServerError::Database(e.to_string()))?;

        Self::with_pool(config, db.pool)
    }

    /// Build state around an existing pool
    pub fn with_pool(config: &Config, pool: SqlitePool) -> Result<Self> {
        let jwt = Arc::new(JwtService::with_config(config.jwt.clone()));
        let sessions = Arc::new(SessionManager::new(pool.clone(), jwt.clone()));

        Ok(Self {
            config: config.clone(),
            pool,
            jwt,
            sessions,
        })
    }
}
