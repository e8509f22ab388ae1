use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level application configuration.
/// Read once at startup; nothing here changes while a session is live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub endpoint: Option<String>,
    pub title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl AppConfig {
    /// Configuration baked into the binary via `AIMPACT_BACKEND_URL`.
    pub fn from_build_env() -> Self {
        Self::default().with_endpoint_opt(option_env!("AIMPACT_BACKEND_URL"))
    }

    pub fn with_endpoint(self, endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            ..self
        }
    }

    fn with_endpoint_opt(self, endpoint: Option<&str>) -> Self {
        match endpoint {
            Some(url) => self.with_endpoint(url),
            None => self,
        }
    }

    /// The validated endpoint URL
    pub fn endpoint(&self) -> Result<&str, ConfigError> {
        let url = self
            .endpoint
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::MissingEndpoint)?;

        if url.starts_with("http://") || url.starts_with("https://") || url.starts_with('/') {
            Ok(url)
        } else {
            Err(ConfigError::InvalidEndpoint(url.to_string()))
        }
    }
}

const DEFAULT_TITLE: &str = "AImpact Super Agent";
