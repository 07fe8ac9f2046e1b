//! Session manager
//!
//! Single source of truth for "who is logged in". Both the initial
//! resolution and later auth transitions (login, logout) funnel through
//! one reducer — [`SessionManager::publish`] — over a watch channel, so
//! state updates are idempotent and ordering-insensitive: whichever
//! resolution lands last wins, and subscribers never observe a
//! session-only partial state because the full profile is resolved
//! before publishing.

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;
use thiserror::Error;
use tokio::sync::watch;

use shared::models::{Account, UserProfile, UserRole};

use crate::auth::{JwtError, JwtService};
use crate::db::repository::{RepoError, account, profile};

/// Fixed delay for credential checks to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Authentication state
///
/// `Unresolved` is only ever the initial channel value; the first
/// resolution replaces it and nothing transitions back.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Unresolved,
    Anonymous,
    Authenticated(UserProfile),
}

impl SessionState {
    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            Self::Authenticated(profile) => Some(profile),
            _ => None,
        }
    }
}

/// Authentication errors surfaced to callers
///
/// Invalid credentials and backend failures are distinct so the UI can
/// show an inline message for one and a retry hint for the other.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account '{0}' already exists")]
    EmailTaken(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

impl From<RepoError> for AuthError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Duplicate(msg) => AuthError::EmailTaken(msg),
            other => AuthError::Backend(other.to_string()),
        }
    }
}

/// Session manager: login, register, logout, current-user resolution and
/// change notification.
pub struct SessionManager {
    pool: SqlitePool,
    jwt: Arc<JwtService>,
    state_tx: watch::Sender<SessionState>,
}

impl SessionManager {
    pub fn new(pool: SqlitePool, jwt: Arc<JwtService>) -> Self {
        let (state_tx, _) = watch::channel(SessionState::Unresolved);
        Self {
            pool,
            jwt,
            state_tx,
        }
    }

    /// Subscribe to session transitions
    ///
    /// The receiver always yields the latest fully-resolved state; the
    /// caller drops it on teardown, nothing else to unwind.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    /// Resolve the active session for a bearer token
    ///
    /// Never fails: no token, an invalid/expired token, or any storage
    /// error during lookup all degrade to `Anonymous` (errors are logged,
    /// not propagated), so a transient failure shows the login screen
    /// rather than an error page. An authenticated account without a
    /// profile row resolves to a synthesized placeholder profile.
    pub async fn current_user(&self, token: Option<&str>) -> SessionState {
        let state = self.resolve(token).await;
        self.publish(state.clone());
        state
    }

    async fn resolve(&self, token: Option<&str>) -> SessionState {
        let Some(token) = token else {
            return SessionState::Anonymous;
        };

        let claims = match self.jwt.validate_token(token) {
            Ok(claims) => claims,
            Err(JwtError::ExpiredToken) => return SessionState::Anonymous,
            Err(e) => {
                tracing::debug!(error = %e, "Rejected session token");
                return SessionState::Anonymous;
            }
        };

        match self.resolve_account(&claims.sub, &claims.email).await {
            Ok(state) => state,
            Err(e) => {
                // Swallowed by design, but never hidden from telemetry
                tracing::error!(error = %e, account_id = %claims.sub, "Session lookup failed");
                SessionState::Anonymous
            }
        }
    }

    async fn resolve_account(&self, account_id: &str, email: &str) -> Result<SessionState, RepoError> {
        let Some(account) = account::find_by_id(&self.pool, account_id).await? else {
            return Ok(SessionState::Anonymous);
        };

        let profile = match profile::find_by_id(&self.pool, &account.id).await? {
            Some(profile) => profile,
            // Profile provisioning can lag account signup; keep the UI
            // usable with a synthesized placeholder instead of failing
            None => UserProfile::placeholder(&account.id, email),
        };

        Ok(SessionState::Authenticated(profile))
    }

    /// Verify credentials and mint a session token
    ///
    /// The profile is not part of the response: authentication success
    /// and profile availability are separate failure domains, so callers
    /// follow up with [`current_user`](Self::current_user).
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let found = account::find_by_email(&self.pool, email)
            .await
            .map_err(|e| AuthError::Backend(e.to_string()))?;

        // Fixed delay before the verdict to prevent timing attacks
        tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

        let Some(account) = found else {
            tracing::warn!(email = %email, "Login failed - account not found");
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(&account, password)? {
            tracing::warn!(email = %email, "Login failed - invalid credentials");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .jwt
            .generate_token(&account.id, &account.email)
            .map_err(|e| AuthError::Backend(e.to_string()))?;

        // Re-resolve the full profile before notifying subscribers
        match self.resolve_account(&account.id, &account.email).await {
            Ok(state) => self.publish(state),
            Err(e) => tracing::error!(error = %e, "Profile resolution after login failed"),
        }

        tracing::info!(account_id = %account.id, email = %email, "User logged in");
        Ok(token)
    }

    /// Create an identity account, then its profile row
    ///
    /// First-registrant-is-admin: the profile gets Admin when no profiles
    /// exist yet, Staff otherwise. The two inserts are deliberately not
    /// atomic — a profile-insert failure after account creation
    /// propagates loudly, and the resulting account-without-profile state
    /// is papered over by the placeholder in `current_user`. Registration
    /// signs the user in, so the new state is published to subscribers
    /// the same way `login` does.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<UserProfile, AuthError> {
        let password_hash = hash_password(password)?;
        let account = account::create(&self.pool, email, &password_hash).await?;

        let role = if profile::count(&self.pool).await? == 0 {
            UserRole::Admin
        } else {
            UserRole::Staff
        };

        let profile =
            profile::create_for_account(&self.pool, &account.id, name, email, role).await?;

        self.publish(SessionState::Authenticated(profile.clone()));

        tracing::info!(account_id = %account.id, email = %email, role = role.as_str(), "User registered");
        Ok(profile)
    }

    /// Terminate the session; idempotent
    pub fn logout(&self) {
        self.publish(SessionState::Anonymous);
        tracing::info!("User logged out");
    }

    /// The single reducer every transition goes through
    fn publish(&self, next: SessionState) {
        self.state_tx.send_replace(next);
    }
}

fn verify_password(account: &Account, password: &str) -> Result<bool, AuthError> {
    use argon2::{
        Argon2,
        password_hash::{PasswordHash, PasswordVerifier},
    };

    let parsed_hash = PasswordHash::new(&account.password_hash)
        .map_err(|e| AuthError::Backend(format!("Corrupt password hash: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

fn hash_password(password: &str) -> Result<String, AuthError> {
    use argon2::{
        Argon2,
        password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
    };

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Backend(format!("Failed to hash password: {e}")))?;
    Ok(password_hash.to_string())
}
