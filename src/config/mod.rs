#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ENDPOINT: &str = "https://automl.googleapis.com";
pub const DEFAULT_API_VERSION: &str = "v1beta1";

pub const ENDPOINT_ENV: &str = "AUTOML_ENDPOINT";
pub const ACCESS_TOKEN_ENV: &str = "AUTOML_ACCESS_TOKEN";

/// Settings for [`crate::client::AutoMlClient`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub endpoint: String,
    pub api_version: String,
    /// Bearer token. When unset the client resolves one at startup.
    pub access_token: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub page_size: Option<u32>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            access_token: None,
            timeout_seconds: None,
            page_size: None,
        }
    }
}

impl ClientConfig {
    /// Defaults, then the optional TOML file, then environment overrides.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                tracing::debug!("Loading client configuration from {}", path.display());
                toml_config::TomlConfig::from_file(path)?.client
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|v| !v.is_empty()) {
            tracing::debug!("Endpoint overridden by {}", ENDPOINT_ENV);
            self.endpoint = endpoint;
        }
        if let Some(token) = lookup(ACCESS_TOKEN_ENV).filter(|v| !v.is_empty()) {
            self.access_token = Some(token);
        }
    }

    /// `{endpoint}/{api_version}`, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!(
            "{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.api_version.trim_matches('/')
        )
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_non_empty_string("api_version", &self.api_version)?;

        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        if let Some(page_size) = self.page_size {
            validate_positive_number("page_size", page_size, 1)?;
        }

        Ok(())
    }
}
