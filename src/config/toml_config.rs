use crate::config::ClientConfig;
use crate::utils::error::{AutoMlError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk configuration:
///
/// ```toml
/// [client]
/// endpoint = "https://automl.googleapis.com"
/// access_token = "${MY_TOKEN}"
/// timeout_seconds = 30
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub client: ClientConfig,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AutoMlError::ConfigValidation {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value. Unset variables are left verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AutoMlError::ConfigValidation {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.client.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_client_section() {
        let toml_content = r#"
[client]
endpoint = "https://eu-automl.googleapis.com"
timeout_seconds = 15
page_size = 50
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.client.endpoint, "https://eu-automl.googleapis.com");
        assert_eq!(config.client.api_version, "v1beta1");
        assert_eq!(config.client.timeout_seconds, Some(15));
        assert_eq!(config.client.page_size, Some(50));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_section_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.client, ClientConfig::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("AUTOML_SAMPLES_TEST_TOKEN", "ya29.from-env");

        let toml_content = r#"
[client]
access_token = "${AUTOML_SAMPLES_TEST_TOKEN}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.client.access_token.as_deref(), Some("ya29.from-env"));

        std::env::remove_var("AUTOML_SAMPLES_TEST_TOKEN");
    }

    #[test]
    fn test_unset_env_var_is_left_verbatim() {
        let toml_content = r#"
[client]
access_token = "${AUTOML_SAMPLES_SURELY_UNSET}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.client.access_token.as_deref(),
            Some("${AUTOML_SAMPLES_SURELY_UNSET}")
        );
    }

    #[test]
    fn test_invalid_endpoint_fails_validation() {
        let config = TomlConfig::from_toml_str("[client]\nendpoint = \"not-a-url\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_a_config_error() {
        let err = TomlConfig::from_toml_str("[client\nendpoint = 1").unwrap_err();
        assert!(matches!(err, AutoMlError::ConfigValidation { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[client]\nendpoint = \"http://localhost:8080\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.client.endpoint, "http://localhost:8080");
    }
}
