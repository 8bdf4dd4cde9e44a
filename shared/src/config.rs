//! Application configuration.
//!
//! The only setting is the base URL of the remote book service. It is
//! resolved once at startup and handed to the API client explicitly.

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    api_base: String,
}

impl AppConfig {
    /// Build a configuration from a raw base URL such as `http://localhost:8000/`.
    ///
    /// Surrounding whitespace and trailing slashes are stripped so endpoint
    /// paths can be appended directly.
    pub fn from_base_url(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }

        let has_scheme = ["http://", "https://"].iter().any(|scheme| {
            trimmed.len() > scheme.len() && trimmed.to_ascii_lowercase().starts_with(scheme)
        });
        if !has_scheme {
            return Err(ConfigError::InvalidBaseUrl(raw.to_string()));
        }

        Ok(Self {
            api_base: trimmed.to_string(),
        })
    }

    /// Resolve from an optional build-time value; absence is an error.
    pub fn from_env_value(value: Option<&str>) -> Result<Self, ConfigError> {
        match value {
            Some(raw) => Self::from_base_url(raw),
            None => Err(ConfigError::MissingBaseUrl),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}
