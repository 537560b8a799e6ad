//! Server configuration parsed from environment variables.
//!
//! `main` loads `.env` (if present) before calling [`Config::from_env`], so
//! local development can keep settings in a file while deployments use the
//! process environment.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://localhost:8080",
    "https://*.vercel.app",
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} required")]
    Missing(&'static str),
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub allowed_origins: AllowedOrigins,
    pub seed_sample_data: bool,
    /// Directory holding the built web client, served for non-API paths.
    pub static_dir: Option<PathBuf>,
}

impl Config {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `DATABASE_URL`
    ///
    /// Optional:
    /// - `PORT`: default 8000
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `ALLOWED_ORIGINS`: comma-separated origins; `*` matches one host label run
    /// - `SEED_SAMPLE_DATA`: `true`/`1` inserts sample listings into an empty table
    /// - `STATIC_DIR`: built web client directory
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a missing `DATABASE_URL` or unparsable values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a missing `DATABASE_URL` or unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let db_max_connections = parse_or("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), DEFAULT_DB_MAX_CONNECTIONS)?;
        let seed_sample_data = parse_flag("SEED_SAMPLE_DATA", lookup("SEED_SAMPLE_DATA"))?;

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|raw| AllowedOrigins::parse(&raw))
            .unwrap_or_default();

        let static_dir = lookup("STATIC_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { database_url, port, db_max_connections, allowed_origins, seed_sample_data, static_dir })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

fn parse_flag(var: &'static str, raw: Option<String>) -> Result<bool, ConfigError> {
    let Some(value) = raw else {
        return Ok(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" => Ok(false),
        "1" | "true" | "yes" => Ok(true),
        _ => Err(ConfigError::Invalid { var, value }),
    }
}

// =============================================================================
// CORS ORIGINS
// =============================================================================

/// Origin allow-list. Entries are exact origins or contain a single `*`,
/// e.g. `https://*.vercel.app`, which matches any non-empty run of
/// characters without `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedOrigins(Vec<String>);

impl Default for AllowedOrigins {
    fn default() -> Self {
        Self(DEFAULT_ALLOWED_ORIGINS.iter().map(|origin| (*origin).to_owned()).collect())
    }
}

impl AllowedOrigins {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(|entry| entry.trim().trim_end_matches('/'))
                .filter(|entry| !entry.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }

    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn matches(&self, origin: &str) -> bool {
        self.0.iter().any(|pattern| origin_matches(pattern, origin))
    }
}

fn origin_matches(pattern: &str, origin: &str) -> bool {
    if pattern == "*" {
        return true;
    }
    let Some((prefix, suffix)) = pattern.split_once('*') else {
        return pattern == origin;
    };
    if origin.len() <= prefix.len() + suffix.len() || !origin.starts_with(prefix) || !origin.ends_with(suffix) {
        return false;
    }
    let middle = &origin[prefix.len()..origin.len() - suffix.len()];
    !middle.contains('/')
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
