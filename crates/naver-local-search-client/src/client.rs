//! Naver local search HTTP client

use crate::error::{LocalSearchError, Result};
use crate::types::*;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};

/// Client for the Naver Search local API
pub struct LocalSearchClient {
    http: reqwest::Client,
    base_url: String,
    client_id: String,
    client_secret: String,
}

impl LocalSearchClient {
    /// Base URL for the Naver open API
    pub const DEFAULT_BASE_URL: &'static str = "https://openapi.naver.com";
    /// Largest `display` value the API accepts
    pub const MAX_DISPLAY: u32 = 10;

    /// Create a new client with default settings (30 second timeout)
    pub fn new(client_id: &str, client_secret: &str) -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL, client_id, client_secret)
    }

    /// Create a new client against a custom base URL
    pub fn with_base_url(base_url: &str, client_id: &str, client_secret: &str) -> Self {
        Self::with_timeout(base_url, client_id, client_secret, Duration::from_secs(30))
    }

    /// Create a new client with a custom base URL and timeout
    pub fn with_timeout(
        base_url: &str,
        client_id: &str,
        client_secret: &str,
        timeout: Duration,
    ) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
        }
    }

    /// Search local places
    ///
    /// An empty result set is returned as an empty vector, not an error.
    ///
    /// # Arguments
    /// * `query` - Free-text query, typically "{address} {category}"
    /// * `display` - Number of results to request, clamped to `1..=MAX_DISPLAY`
    /// * `sort` - Ordering requested from the provider
    pub async fn search(
        &self,
        query: &str,
        display: u32,
        sort: SortOrder,
    ) -> Result<Vec<LocalItem>> {
        let display = display.clamp(1, Self::MAX_DISPLAY);
        let url = format!(
            "{}/v1/search/local.json?query={}&display={}&start=1&sort={}",
            self.base_url,
            urlencoding::encode(query),
            display,
            sort.as_str()
        );

        let response = self
            .http
            .get(&url)
            .header("X-Naver-Client-Id", &self.client_id)
            .header("X-Naver-Client-Secret", &self.client_secret)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!(status = %status, "Local search rejected credentials");
            return Err(LocalSearchError::Unauthorized);
        }

        if !status.is_success() {
            warn!(status = %status, query = %query, "Local search returned error status");
            return Err(match serde_json::from_slice::<ErrorBody>(&body) {
                Ok(err) if !err.error_code.is_empty() => LocalSearchError::Provider {
                    code: err.error_code,
                    message: err.error_message,
                },
                _ => LocalSearchError::Status(status.as_u16()),
            });
        }

        let data: LocalSearchResponse = serde_json::from_slice(&body)?;
        debug!(query = %query, count = data.items.len(), "Local search completed");

        Ok(data.items)
    }
}
