//! Authentication module
//!
//! - [`JwtService`] - token generation and validation
//! - [`SessionManager`] - login, register, logout, current-user
//!   resolution and change subscription
//! - [`middleware`] - API key, bearer auth and admin guards

pub mod jwt;
pub mod middleware;
pub mod session;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_admin, require_api_key, require_auth};
pub use session::{AuthError, SessionManager, SessionState};
