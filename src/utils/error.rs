use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutoMlError {
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {code} ({status}): {message}")]
    Api {
        code: u16,
        status: String,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Pagination error: {message}")]
    Pagination { message: String },

    #[error("Authentication error: {message}")]
    Auth { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl AutoMlError {
    /// Short hint printed next to the error in the logs.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AutoMlError::Http(_) => "Check network connectivity and the configured endpoint",
            AutoMlError::Api { code: 401, .. } | AutoMlError::Api { code: 403, .. } => {
                "Check that the access token is valid and has AutoML permissions"
            }
            AutoMlError::Api { code: 404, .. } => {
                "Check the project id, region and resource id arguments"
            }
            AutoMlError::Api { code: 400, .. } => "Check the filter expression syntax",
            AutoMlError::Api { .. } => "Inspect the API error message for details",
            AutoMlError::Io(_) => "Check that the file exists and is readable",
            AutoMlError::Serialization(_) => "The service returned an unexpected response body",
            AutoMlError::Pagination { .. } => {
                "The service repeated a page token; retry later or narrow the filter"
            }
            AutoMlError::Url(_) => "Check the configured endpoint URL",
            AutoMlError::Auth { .. } => {
                "Set AUTOML_ACCESS_TOKEN or run 'gcloud auth application-default login'"
            }
            AutoMlError::ConfigValidation { .. } | AutoMlError::InvalidConfigValue { .. } => {
                "Fix the configuration file or environment overrides"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AutoMlError>;
