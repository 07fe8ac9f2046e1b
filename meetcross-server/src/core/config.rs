//! Server configuration
//!
//! Configuration errors are a separate failure domain from runtime/data
//! errors: a missing API key or JWT secret must stop the process before
//! any data call is attempted.

use std::path::PathBuf;

use crate::auth::JwtConfig;

/// Startup configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Server configuration
///
/// All values come from environment variables:
///
/// | Variable | Default | Notes |
/// |----------|---------|-------|
/// | MEETCROSS_API_KEY | (required) | service key clients send in `x-api-key` |
/// | JWT_SECRET | (required) | at least 32 bytes |
/// | WORK_DIR | /var/lib/meetcross | database and log files |
/// | HTTP_PORT | 3000 | |
/// | JWT_EXPIRATION_MINUTES | 1440 | |
/// | ENVIRONMENT | development | development \| staging \| production |
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Service API key every request must present
    pub api_key: String,
    /// JWT configuration
    pub jwt: JwtConfig,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Missing or malformed required values fail here, before the server
    /// opens its database or binds a socket.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("MEETCROSS_API_KEY")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar("MEETCROSS_API_KEY"))?;

        let secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar("JWT_SECRET"))?;
        if secret.len() < 32 {
            return Err(ConfigError::Invalid {
                var: "JWT_SECRET",
                reason: "must be at least 32 characters long".to_string(),
            });
        }

        let expiration_minutes = std::env::var("JWT_EXPIRATION_MINUTES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1440);

        Ok(Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/meetcross".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            api_key,
            jwt: JwtConfig {
                secret,
                expiration_minutes,
                issuer: std::env::var("JWT_ISSUER")
                    .unwrap_or_else(|_| "meetcross-server".to_string()),
                audience: std::env::var("JWT_AUDIENCE")
                    .unwrap_or_else(|_| "meetcross-clients".to_string()),
            },
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        })
    }

    /// Directory holding the SQLite database file
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Directory holding rolled log files
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Create the work directory layout if it does not exist
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the fixed env var names are not raced by parallel tests
    #[test]
    fn test_from_env_requires_api_key_and_secret() {
        unsafe {
            std::env::remove_var("MEETCROSS_API_KEY");
            std::env::remove_var("JWT_SECRET");
        }
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::MissingVar("MEETCROSS_API_KEY"))
        ));

        unsafe {
            std::env::set_var("MEETCROSS_API_KEY", "test-service-key");
        }
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::MissingVar("JWT_SECRET"))
        ));

        unsafe {
            std::env::set_var("JWT_SECRET", "too-short");
        }
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid { var: "JWT_SECRET", .. })
        ));

        unsafe {
            std::env::set_var("JWT_SECRET", "0123456789abcdef0123456789abcdef");
        }
        let config = Config::from_env().expect("config with required vars set");
        assert_eq!(config.api_key, "test-service-key");
        assert_eq!(config.jwt.expiration_minutes, 1440);

        unsafe {
            std::env::remove_var("MEETCROSS_API_KEY");
            std::env::remove_var("JWT_SECRET");
        }
    }
}
