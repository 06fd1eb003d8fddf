//! REST adapter for the AutoML `v1beta1` API.

pub mod auth;

use crate::config::ClientConfig;
use crate::domain::model::{
    Dataset, ListDatasetsResponse, ListModelEvaluationsResponse, ModelEvaluation,
};
use crate::domain::ports::AutoMlService;
use crate::utils::error::{AutoMlError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

/// A single page of a list call.
trait ListPage: DeserializeOwned {
    type Item;

    fn into_parts(self) -> (Vec<Self::Item>, String);
}

impl ListPage for ListDatasetsResponse {
    type Item = Dataset;

    fn into_parts(self) -> (Vec<Dataset>, String) {
        (self.datasets, self.next_page_token)
    }
}

impl ListPage for ListModelEvaluationsResponse {
    type Item = ModelEvaluation;

    fn into_parts(self) -> (Vec<ModelEvaluation>, String) {
        (self.model_evaluation, self.next_page_token)
    }
}

pub struct AutoMlClient {
    client: Client,
    config: ClientConfig,
    access_token: String,
}

impl AutoMlClient {
    /// Builds a client, resolving an access token if none is configured.
    pub async fn new(config: ClientConfig) -> Result<Self> {
        let access_token = auth::resolve_access_token(&config).await?;
        Self::with_access_token(config, access_token)
    }

    pub fn with_access_token(config: ClientConfig, access_token: String) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(Self {
            client: builder.build()?,
            config,
            access_token,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn collection_url(
        &self,
        parent: &str,
        collection: &str,
        filter: &str,
        page_token: Option<&str>,
    ) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/{}/{}",
            self.config.base_url(),
            parent,
            collection
        ))?;

        {
            let mut query = url.query_pairs_mut();
            if !filter.is_empty() {
                query.append_pair("filter", filter);
            }
            if let Some(page_size) = self.config.page_size {
                query.append_pair("pageSize", &page_size.to_string());
            }
            if let Some(token) = page_token {
                query.append_pair("pageToken", token);
            }
        }

        // Drop the bare `?` left behind when no pair was appended.
        if url.query() == Some("") {
            url.set_query(None);
        }

        Ok(url)
    }

    /// Fetches every page of a listing. Nothing is returned unless all pages succeed.
    async fn list_all<P: ListPage>(
        &self,
        parent: &str,
        collection: &str,
        filter: &str,
    ) -> Result<Vec<P::Item>> {
        let mut items = Vec::new();
        let mut page_token: Option<String> = None;
        let mut seen_tokens = HashSet::new();

        loop {
            let url = self.collection_url(parent, collection, filter, page_token.as_deref())?;
            tracing::debug!("GET {}", url);

            let response = self
                .client
                .get(url)
                .bearer_auth(&self.access_token)
                .send()
                .await?;

            let status = response.status();
            tracing::debug!("API response status: {}", status);

            let body = response.text().await?;
            if !status.is_success() {
                return Err(decode_api_error(status, &body));
            }

            let page: P = serde_json::from_str(&body)?;
            let (page_items, next_page_token) = page.into_parts();
            tracing::debug!("Received {} {} in page", page_items.len(), collection);
            items.extend(page_items);

            if next_page_token.is_empty() {
                break;
            }
            if !seen_tokens.insert(next_page_token.clone()) {
                return Err(AutoMlError::Pagination {
                    message: format!(
                        "page token '{}' was returned more than once for {}",
                        next_page_token, collection
                    ),
                });
            }
            page_token = Some(next_page_token);
        }

        Ok(items)
    }
}

#[async_trait]
impl AutoMlService for AutoMlClient {
    async fn list_datasets(&self, parent: &str, filter: &str) -> Result<Vec<Dataset>> {
        self.list_all::<ListDatasetsResponse>(parent, "datasets", filter)
            .await
    }

    async fn list_model_evaluations(
        &self,
        parent: &str,
        filter: &str,
    ) -> Result<Vec<ModelEvaluation>> {
        self.list_all::<ListModelEvaluationsResponse>(parent, "modelEvaluations", filter)
            .await
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<u16>,
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

/// Maps a non-success response onto [`AutoMlError::Api`], preferring the
/// Google error envelope and falling back to the HTTP status and raw body.
pub(crate) fn decode_api_error(status: StatusCode, body: &str) -> AutoMlError {
    let reason = status.canonical_reason().unwrap_or("Unknown");

    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => AutoMlError::Api {
            code: envelope.error.code.unwrap_or(status.as_u16()),
            status: if envelope.error.status.is_empty() {
                reason.to_string()
            } else {
                envelope.error.status
            },
            message: envelope.error.message,
        },
        Err(_) => AutoMlError::Api {
            code: status.as_u16(),
            status: reason.to_string(),
            message: if body.trim().is_empty() {
                reason.to_string()
            } else {
                body.trim().to_string()
            },
        },
    }
}
