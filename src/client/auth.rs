use crate::config::ClientConfig;
use crate::utils::error::{AutoMlError, Result};
use tokio::process::Command;

pub const GOOGLE_ACCESS_TOKEN_ENV: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";

/// Picks a bearer token: the configured one, then `GOOGLE_OAUTH_ACCESS_TOKEN`,
/// then Application Default Credentials via `gcloud`.
pub async fn resolve_access_token(config: &ClientConfig) -> Result<String> {
    if let Some(token) = config.access_token.as_deref().filter(|t| !t.is_empty()) {
        tracing::debug!("Using configured access token");
        return Ok(token.to_string());
    }

    if let Ok(token) = std::env::var(GOOGLE_ACCESS_TOKEN_ENV) {
        if !token.trim().is_empty() {
            tracing::debug!("Using access token from {}", GOOGLE_ACCESS_TOKEN_ENV);
            return Ok(token.trim().to_string());
        }
    }

    gcloud_access_token().await
}

async fn gcloud_access_token() -> Result<String> {
    tracing::debug!("Requesting access token from gcloud");

    let output = Command::new("gcloud")
        .args(["auth", "application-default", "print-access-token"])
        .output()
        .await
        .map_err(|e| AutoMlError::Auth {
            message: format!("failed to run gcloud: {}", e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AutoMlError::Auth {
            message: format!("gcloud could not print an access token: {}", stderr.trim()),
        });
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Err(AutoMlError::Auth {
            message: "gcloud returned an empty access token".to_string(),
        });
    }

    Ok(token)
}
