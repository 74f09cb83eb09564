//! Environment-driven server configuration.

use dioxus_logger::tracing::Level;

use crate::server::error::config::ConfigError;

/// Database used when `DATABASE_URL` is not set.
pub static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";
pub static DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
/// User that favorite mutations act on when `CURRENT_USER_ID` is not set.
pub const DEFAULT_CURRENT_USER_ID: i32 = 1;

pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub current_user_id: i32,
    pub log_level: Level,
}

impl Config {
    /// Loads the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Loads the configuration using `lookup` to resolve each variable
    ///
    /// Unset variables fall back to their defaults, set variables which fail to parse
    /// return [`ConfigError::InvalidEnvValue`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => parse_var("PORT", &value)?,
            None => DEFAULT_PORT,
        };

        let current_user_id = match lookup("CURRENT_USER_ID") {
            Some(value) => parse_var("CURRENT_USER_ID", &value)?,
            None => DEFAULT_CURRENT_USER_ID,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => parse_var("LOG_LEVEL", &value)?,
            None => Level::INFO,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            current_user_id,
            log_level,
        })
    }
}

fn parse_var<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        })
}
