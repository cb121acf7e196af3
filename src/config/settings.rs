//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_TOKEN_LIFETIME_SECONDS, DEVELOPMENT_JWT_SECRET, MAX_TOKEN_LIFETIME_SECONDS,
    MIN_JWT_SECRET_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Signing secret and lifetime shared by every token the process issues.
#[derive(Clone)]
pub struct TokenSettings {
    secret: String,
    lifetime_seconds: i64,
}

impl std::fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSettings")
            .field("secret", &"[REDACTED]")
            .field("lifetime_seconds", &self.lifetime_seconds)
            .finish()
    }
}

impl TokenSettings {
    /// Build token settings, rejecting short secrets and lifetimes outside
    /// `1..=MAX_TOKEN_LIFETIME_SECONDS`.
    pub fn new(secret: impl Into<String>, lifetime_seconds: i64) -> AppResult<Self> {
        let secret = secret.into();

        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::configuration(format!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if lifetime_seconds <= 0 {
            return Err(AppError::configuration(
                "JWT_LIFETIME_SECONDS must be greater than 0",
            ));
        }

        if lifetime_seconds > MAX_TOKEN_LIFETIME_SECONDS {
            return Err(AppError::configuration(format!(
                "JWT_LIFETIME_SECONDS must not exceed {}",
                MAX_TOKEN_LIFETIME_SECONDS
            )));
        }

        Ok(Self {
            secret,
            lifetime_seconds,
        })
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn lifetime_seconds(&self) -> i64 {
        self.lifetime_seconds
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub token: TokenSettings,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("token", &self.token)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env`, if present).
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = match lookup("JWT_SECRET") {
            Some(secret) => secret,
            None if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                DEVELOPMENT_JWT_SECRET.to_string()
            }
            None => {
                return Err(AppError::configuration(
                    "JWT_SECRET environment variable must be set in production",
                ))
            }
        };

        let lifetime_seconds = match lookup("JWT_LIFETIME_SECONDS") {
            Some(raw) => raw.parse::<i64>().map_err(|_| {
                AppError::configuration(format!("JWT_LIFETIME_SECONDS is not a number: {}", raw))
            })?,
            None => DEFAULT_TOKEN_LIFETIME_SECONDS,
        };

        let server_port = match lookup("SERVER_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::configuration(format!("SERVER_PORT is not a valid port: {}", raw))
            })?,
            None => DEFAULT_SERVER_PORT,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            token: TokenSettings::new(jwt_secret, lifetime_seconds)?,
            server_host: lookup("SERVER_HOST")
                .unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port,
        })
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SECRET: &str = "test-secret-key-for-testing-only-32chars";

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup_from(&[("JWT_SECRET", SECRET)])).unwrap();

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.token.lifetime_seconds(), DEFAULT_TOKEN_LIFETIME_SECONDS);
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_values_read_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            ("JWT_SECRET", SECRET),
            ("JWT_LIFETIME_SECONDS", "600"),
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8080"),
        ]))
        .unwrap();

        assert_eq!(config.token.secret(), SECRET);
        assert_eq!(config.token.lifetime_seconds(), 600);
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_short_secret_rejected() {
        let result = Config::from_lookup(lookup_from(&[("JWT_SECRET", "too-short")]));
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_invalid_lifetime_rejected() {
        let result = Config::from_lookup(lookup_from(&[
            ("JWT_SECRET", SECRET),
            ("JWT_LIFETIME_SECONDS", "soon"),
        ]));
        assert!(matches!(result, Err(AppError::Configuration(_))));

        assert!(TokenSettings::new(SECRET, 0).is_err());
    }

    #[test]
    fn test_oversized_lifetime_rejected() {
        let result = Config::from_lookup(lookup_from(&[
            ("JWT_SECRET", SECRET),
            ("JWT_LIFETIME_SECONDS", "100000000000000"),
        ]));
        assert!(matches!(result, Err(AppError::Configuration(_))));

        assert!(TokenSettings::new(SECRET, MAX_TOKEN_LIFETIME_SECONDS).is_ok());
        assert!(TokenSettings::new(SECRET, MAX_TOKEN_LIFETIME_SECONDS + 1).is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let settings = TokenSettings::new(SECRET, 60).unwrap();
        let rendered = format!("{:?}", settings);

        assert!(!rendered.contains(SECRET));
        assert!(rendered.contains("[REDACTED]"));
    }
}
