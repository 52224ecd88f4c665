//! API client configuration loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Android emulator alias for the host machine's loopback interface.
const DEFAULT_BASE_URL: &str = "http://10.0.2.2:8080";

/// Errors returned when settings hold unusable values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiSettingsError {
    /// The base URL could not be parsed.
    #[error("invalid food API base URL {value:?}: {message}")]
    InvalidBaseUrl {
        /// Raw configured value.
        value: String,
        /// Parser diagnostic.
        message: String,
    },
    /// The base URL uses a scheme other than HTTP(S).
    #[error("food API base URL must use http or https, got {scheme}")]
    UnsupportedScheme {
        /// Scheme found in the configured URL.
        scheme: String,
    },
    /// A zero timeout would fail every request immediately.
    #[error("food API timeout must be at least one second")]
    ZeroTimeout,
}

/// Configuration values for reaching the food API.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FOOD_API")]
pub struct ApiSettings {
    /// Base URL that request paths are resolved against.
    pub base_url: Option<String>,
    /// Per-request timeout in seconds.
    #[ortho_config(default = 30)]
    pub timeout_secs: u64,
}

impl ApiSettings {
    /// Return the configured base URL, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns an error when the value does not parse as an absolute HTTP(S)
    /// URL.
    pub fn base_url(&self) -> Result<Url, ApiSettingsError> {
        let raw = self
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        let url = Url::parse(raw).map_err(|error| ApiSettingsError::InvalidBaseUrl {
            value: raw.to_owned(),
            message: error.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ApiSettingsError::UnsupportedScheme {
                scheme: other.to_owned(),
            }),
        }
    }

    /// Return the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the timeout is configured as zero.
    pub fn timeout(&self) -> Result<Duration, ApiSettingsError> {
        match self.timeout_secs {
            0 => Err(ApiSettingsError::ZeroTimeout),
            secs => Ok(Duration::from_secs(secs)),
        }
    }
}
