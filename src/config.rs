// src/config.rs
use crate::infrastructure::security::token::MIN_SECRET_LEN;
use axum::http::HeaderValue;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    listen_addr: String,
    token_secret: Vec<u8>,
    token_ttl: Duration,
    allowed_origins: Vec<HeaderValue>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &self.database_url)
            .field("database_max_connections", &self.database_max_connections)
            .field("listen_addr", &self.listen_addr)
            .field("token_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("allowed_origins", &self.allowed_origins)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://feedline.db".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:5000".into()
}

const DEFAULT_DB_MAX_CONNECTIONS: u32 = 16;

/// Six hours.
const DEFAULT_TOKEN_TTL_SECS: u64 = 6 * 60 * 60;

fn default_allowed_origins() -> String {
    "http://localhost:3000".into()
}

impl AppConfig {
    /// Build configuration from the process environment, after letting a
    /// `.env` file fill in anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid("DATABASE_MAX_CONNECTIONS must be a positive integer".into())
                })?,
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };

        let raw_secret = lookup("TOKEN_SECRET").ok_or(ConfigError::Missing("TOKEN_SECRET"))?;
        let token_secret = STANDARD
            .decode(raw_secret.trim())
            .map_err(|_| ConfigError::Invalid("TOKEN_SECRET must be standard base64".into()))?;
        if token_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid(format!(
                "TOKEN_SECRET must decode to at least {MIN_SECRET_LEN} bytes"
            )));
        }

        let token_ttl_secs = match lookup("TOKEN_TTL_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid("TOKEN_TTL_SECONDS must be a positive integer".into())
                })?,
            None => DEFAULT_TOKEN_TTL_SECS,
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(default_allowed_origins)
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| ConfigError::Invalid(format!("invalid CORS origin: {origin}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            database_url,
            database_max_connections,
            listen_addr,
            token_secret,
            token_ttl: Duration::from_secs(token_ttl_secs),
            allowed_origins,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn token_secret(&self) -> &[u8] {
        &self.token_secret
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    pub fn allowed_origins(&self) -> &[HeaderValue] {
        &self.allowed_origins
    }
}
