//! Headless browser session
//!
//! Branch pages are built client-side, so they have to be rendered in a real
//! browser before they can be parsed. Every load launches its own Chrome
//! process, navigates, waits for the listings to settle, reads the document
//! and closes the browser again.

use std::time::Duration;

use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions};
use tracing::{debug, info, warn};

use crate::error::{CineworldError, Result};
use crate::page::{PageSource, RenderedPage};

/// Configuration for the headless browser session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Navigation timeout in seconds (default: 60)
    pub navigation_timeout_secs: u64,
    /// Run Chrome without a window (default: true)
    pub headless: bool,
    /// Enable Chrome's sandbox (default: false, as in most containers)
    pub sandbox: bool,
    /// Element to wait for after navigation before reading the page
    /// (default: the film container)
    pub settle_selector: Option<String>,
    /// How long to wait for the settle selector in seconds (default: 10)
    pub settle_timeout_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            navigation_timeout_secs: 60,
            headless: true,
            sandbox: false,
            settle_selector: Some(".qb-movie".to_string()),
            settle_timeout_secs: 10,
        }
    }
}

/// Page source that renders pages in headless Chrome
#[derive(Debug, Clone, Default)]
pub struct BrowserSession {
    config: SessionConfig,
}

impl BrowserSession {
    /// Create a session source with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session source with custom configuration
    pub fn with_config(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Get the session configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

#[async_trait]
impl PageSource for BrowserSession {
    async fn load(&self, url: &str) -> Result<RenderedPage> {
        let config = self.config.clone();
        let url = url.to_string();

        // headless_chrome blocks on every call
        tokio::task::spawn_blocking(move || render(&config, &url))
            .await
            .map_err(session_error)?
    }
}

/// Launch a browser, render `url` and read the resulting page.
fn render(config: &SessionConfig, url: &str) -> Result<RenderedPage> {
    let timeout = Duration::from_secs(config.navigation_timeout_secs);

    let options = LaunchOptions::default_builder()
        .headless(config.headless)
        .sandbox(config.sandbox)
        .idle_browser_timeout(timeout)
        .build()
        .map_err(session_error)?;

    let browser = Browser::new(options).map_err(session_error)?;
    let tab = browser.new_tab().map_err(session_error)?;
    tab.set_default_timeout(timeout);

    info!("Loading branch page {}", url);
    tab.navigate_to(url)
        .and_then(|tab| tab.wait_until_navigated())
        .map_err(session_error)?;

    if let Some(selector) = &config.settle_selector {
        // Pages with nothing showing never render the selector
        let settle_timeout = Duration::from_secs(config.settle_timeout_secs);
        if let Err(e) = tab.wait_for_element_with_custom_timeout(selector, settle_timeout) {
            debug!("Settle selector {} not found on {}: {}", selector, url, e);
        }
    }

    let window_name = tab
        .evaluate("window.name", false)
        .ok()
        .and_then(|object| object.value)
        .and_then(|value| value.as_str().map(str::to_string))
        .unwrap_or_default();

    let html = tab.get_content().map_err(session_error)?;
    debug!("Read {} bytes from {}", html.len(), url);

    if let Err(e) = tab.close(true) {
        warn!("Failed to close tab for {}: {}", url, e);
    }

    Ok(RenderedPage { html, window_name })
}

fn session_error(error: impl std::fmt::Display) -> CineworldError {
    CineworldError::Session(error.to_string())
}
