//! Meetcross Server - church/congregation management backend
//!
//! # Module structure
//!
//! ```text
//! meetcross-server/src/
//! ├── core/     # configuration, state, server lifecycle
//! ├── auth/     # JWT sessions, session manager, middleware
//! ├── api/      # HTTP routes and handlers
//! ├── db/       # SQLite pool and entity repositories
//! ├── routes.rs # router assembly
//! └── utils/    # errors, logging
//! ```
//!
//! The `auth::SessionManager` owns authentication state (login, register,
//! logout, current-user resolution, change subscription); the modules
//! under `db::repository` form a uniform create/read/update/delete
//! gateway over the seven entity kinds.

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod routes;
pub mod utils;

// Re-export common types
pub use auth::{CurrentUser, JwtService, SessionManager, SessionState};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

/// Load `.env` and initialize logging
pub fn setup_environment() {
    dotenv::dotenv().ok();
    utils::logger::init_logger();
}
