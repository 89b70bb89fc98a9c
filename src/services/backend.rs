use crate::core::Query;
use crate::models::{HealthResponse, SearchRequest, SearchResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use validator::Validate;

/// Errors that can occur when talking to the search service
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] validator::ValidationErrors),
}

/// Transport seam between the controller and the search service
///
/// Production uses `SearchClient`; tests substitute scripted backends.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &Query) -> Result<SearchResponse, BackendError>;
}

/// Search service API client
///
/// Handles all communication with the AIFindr backend:
/// - Submitting natural-language search queries
/// - Probing service health
#[derive(Debug, Clone)]
pub struct SearchClient {
    base_url: String,
    client: Client,
}

impl SearchClient {
    /// Create a new client for the service at `base_url`.
    ///
    /// No request timeout is applied unless `timeout_secs` is given; a
    /// hung request then stays in flight until the connection settles.
    pub fn new(base_url: String, timeout_secs: Option<u64>) -> Result<Self, BackendError> {
        let mut builder = Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe the service health endpoint.
    pub async fn health(&self) -> Result<HealthResponse, BackendError> {
        let url = format!("{}/health", self.base_url);

        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(BackendError::ApiError(format!(
                "Health check failed: {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl SearchBackend for SearchClient {
    /// Submit a search query.
    ///
    /// POSTs `{"query": ...}` to `{base_url}/search`. The body of a
    /// non-success response is ignored.
    async fn search(&self, query: &Query) -> Result<SearchResponse, BackendError> {
        let request = SearchRequest {
            query: query.as_str().to_string(),
        };
        request.validate()?;

        let url = format!("{}/search", self.base_url);

        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BackendError::ApiError(format!(
                "Search failed: {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = SearchClient::new("http://localhost:8000/".to_string(), None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_client_accepts_timeout() {
        let client = SearchClient::new("http://localhost:8000".to_string(), Some(30));
        assert!(client.is_ok());
    }
}
