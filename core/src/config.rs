//! Backend location, read from the environment.

use thiserror::Error;

/// Environment variable holding the backend base URL.
pub const API_URL_VAR: &str = "GALERIE_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let has_scheme = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .is_some_and(|host| !host.is_empty());
        if !has_scheme {
            return Err(ConfigError::InvalidUrl {
                var: API_URL_VAR,
                value: base_url.to_string(),
            });
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Load from the process environment, reading a `.env` file first if one
    /// exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = lookup(API_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(API_URL_VAR))?;
        Self::new(&value)
    }
}
