//! # EIA Configuration Module
//!
//! Resolves the settings needed to talk to the EIA open-data API: the API key
//! and the base URL. Explicit overrides win, then the process environment,
//! which may itself be seeded from a `.env` file.

use std::env;
use std::fmt;
use std::path::Path;

use thiserror::Error;
use url::Url;

/// Environment variable holding the EIA API key.
pub const API_KEY_VAR: &str = "VITE_EIA_KEY";

/// Environment variable overriding the API base URL.
pub const BASE_URL_VAR: &str = "EIA_API_BASE_URL";

/// Env file read at startup, relative to the working directory.
pub const DOTENV_FILE: &str = ".env";

/// Production base URL of the EIA open-data API, version 2.
pub const DEFAULT_BASE_URL: &str = "https://api.eia.gov/v2/";

/// Errors that can occur while resolving the EIA configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is unset, empty or only whitespace.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// The configured base URL does not parse as an absolute URL.
    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The `.env` file exists but could not be read or parsed.
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Resolved settings for the EIA client.
#[derive(Clone, PartialEq, Eq)]
pub struct EiaConfig {
    /// The API key, already trimmed and guaranteed non-empty.
    pub api_key: String,
    /// The API base URL, always ending in `/` so relative routes join beneath it.
    pub base_url: Url,
}

impl fmt::Debug for EiaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EiaConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl EiaConfig {
    /// Loads `.env` from the working directory (if any) and resolves the
    /// configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv()?;
        Self::new(None, None)
    }

    /// Resolves the configuration, using `api_key` and `base_url` when given
    /// and falling back to `VITE_EIA_KEY` / `EIA_API_BASE_URL` otherwise.
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Result<Self, ConfigError> {
        Self::resolve(api_key, base_url, |name| env::var(name).ok())
    }

    /// Same as [`EiaConfig::new`] with a caller-supplied variable lookup.
    pub fn resolve<F>(
        api_key: Option<String>,
        base_url: Option<String>,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = api_key
            .or_else(|| lookup(API_KEY_VAR))
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(API_KEY_VAR.to_string()))?;

        let base_url = base_url
            .or_else(|| lookup(BASE_URL_VAR))
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            base_url: parse_base_url(&base_url)?,
        })
    }
}

/// Parses `raw` as an absolute URL and appends a trailing `/` when missing.
///
/// Without the slash, `Url::join` would replace the last segment (`v2`)
/// instead of descending into it.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw).map_err(|e| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: "URL cannot be used as a base".to_string(),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Loads `.env` from the current directory. A missing file is not an error.
pub fn load_dotenv() -> Result<(), ConfigError> {
    load_dotenv_if_present(Path::new(DOTENV_FILE))
}

/// Loads `path` when it exists; does nothing otherwise.
pub fn load_dotenv_if_present(path: &Path) -> Result<(), ConfigError> {
    if !path.is_file() {
        return Ok(());
    }
    load_dotenv_from(path)
}

/// Loads a specific env file into the process environment.
/// Variables already present in the environment are left untouched.
pub fn load_dotenv_from(path: &Path) -> Result<(), ConfigError> {
    dotenvy::from_path(path).map_err(|e| ConfigError::DotenvError(e.to_string()))
}
