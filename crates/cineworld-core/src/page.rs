//! Page sources
//!
//! A page source turns a branch URL into the rendered HTML the parsers read.
//! The scraper only depends on this trait, so the headless browser can be
//! swapped for a plain HTTP fetch or a canned page in tests.

use async_trait::async_trait;

use crate::error::Result;

/// A page as rendered by a source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedPage {
    /// Serialized document after rendering
    pub html: String,
    /// `window.name` of the page, empty when the source has no window
    pub window_name: String,
}

impl RenderedPage {
    /// Create a page without a window name
    pub fn from_html(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            window_name: String::new(),
        }
    }
}

/// Something that can load and render a branch page
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Load `url` and return the rendered page.
    ///
    /// Each call is an independent session; sources keep no state between
    /// calls.
    async fn load(&self, url: &str) -> Result<RenderedPage>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendered_page_from_html() {
        let page = RenderedPage::from_html("<html></html>");
        assert_eq!(page.html, "<html></html>");
        assert_eq!(page.window_name, "");
    }
}
