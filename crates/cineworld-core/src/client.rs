//! Plain HTTP page source
//!
//! Fetches a page without rendering it. Live Cineworld branch pages build
//! their listings in the browser, so this source suits pre-rendered
//! snapshots, proxies that render server-side, and tests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use tracing::debug;

use crate::error::{CineworldError, Result};
use crate::page::{PageSource, RenderedPage};

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default Accept-Language header for UK content
const DEFAULT_ACCEPT_LANGUAGE: &str = "en-GB,en;q=0.9";

/// Configuration for the HTTP page source
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

/// Page source backed by a plain HTTP GET
pub struct HttpPageSource {
    client: reqwest::Client,
}

impl HttpPageSource {
    /// Create a source with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a source with custom configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(DEFAULT_ACCEPT_LANGUAGE),
        );

        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    /// # Errors
    /// - `CineworldError::NotFound` - Server returned 404
    /// - `CineworldError::Http` - Network error or any other error status
    async fn load(&self, url: &str) -> Result<RenderedPage> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        debug!("GET {} -> {}", url, status);

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CineworldError::NotFound(url.to_string()));
        }

        let response = response.error_for_status()?;
        Ok(RenderedPage::from_html(response.text().await?))
    }
}
