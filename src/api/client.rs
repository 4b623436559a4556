//! HTTP client for the admin panel API.
//!
//! The client installs the request configuration as default headers, so
//! every request issued through it carries the content-type marker and the
//! bearer authorization header for the lifetime of the client.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use super::{ApiError, RequestConfig};

/// HTTP request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Panel API client.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct PanelClient {
    client: Client,
    base_url: String,
}

impl PanelClient {
    /// Create a client that carries `config`'s headers on every request.
    pub fn new(base_url: impl Into<String>, config: &RequestConfig) -> Result<Self> {
        Self::with_timeout(base_url, config, Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        config: &RequestConfig,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .default_headers(config.headers().clone())
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Send a GET request and return the raw response.
    ///
    /// The status is left for the caller to inspect, typically via
    /// `Session::check_auth`.
    pub async fn get_raw(&self, path: &str) -> Result<reqwest::Response> {
        let url = self.url(path);
        debug!(url = %url, "GET");
        self.client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {}", url))
    }

    /// Send a GET request and deserialize the JSON response body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!(url = %url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    /// Send a POST request and deserialize the JSON response body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        debug!(url = %url, "POST");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send POST request to {}", url))?;

        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }
}
