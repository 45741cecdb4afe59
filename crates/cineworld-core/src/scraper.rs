//! Main Cineworld scraper API
//!
//! This module ties the pieces together: it normalizes the branch URL, loads
//! the page through a [`PageSource`], and runs the parsers over the result
//! with the scraper's [`Clock`].

use scraper::Html;
use tracing::{debug, info};

use crate::browser::BrowserSession;
use crate::dates::{Clock, LocalClock};
use crate::error::Result;
use crate::page::{PageSource, RenderedPage};
use crate::parser::{parse_branch, parse_listings_html, ExtractionContext};
use crate::search::get_search_data;
use crate::types::{Branch, Listings};

/// Main scraper API for Cineworld branch pages
///
/// The scraper holds no per-request state, so one instance can serve any
/// number of concurrent requests; each load runs its own page session.
///
/// # Example
/// ```no_run
/// use cineworld_core::CineworldScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = CineworldScraper::new();
///
///     let listings = scraper
///         .get_listings("https://www.cineworld.co.uk/cinemas/ashton-under-lyne/068", None)
///         .await?;
///     println!("{} films showing", listings.films.len());
///
///     Ok(())
/// }
/// ```
pub struct CineworldScraper {
    source: Box<dyn PageSource>,
    clock: Box<dyn Clock>,
}

impl CineworldScraper {
    /// Create a scraper that renders pages in headless Chrome and uses the
    /// host's local time zone.
    pub fn new() -> Self {
        Self::with_source(BrowserSession::new(), LocalClock)
    }

    /// Create a scraper with a custom page source and clock.
    ///
    /// This is useful for testing or for loading pages without a browser.
    pub fn with_source(source: impl PageSource + 'static, clock: impl Clock + 'static) -> Self {
        Self {
            source: Box::new(source),
            clock: Box::new(clock),
        }
    }

    /// Get the branch details and all films for a branch page.
    ///
    /// # Arguments
    /// * `raw_url` - Any URL of the branch page
    /// * `date` - Optional date (`YYYY-MM-DD`) overriding one in the URL
    ///
    /// # Returns
    /// * `Ok(Listings)` with the branch and its films
    /// * `Err(CineworldError::InvalidInput)` if `raw_url` is empty
    /// * `Err(CineworldError::MalformedUrl)` if `raw_url` is not a URL
    /// * `Err(CineworldError::Session)` or another load error if the page
    ///   could not be loaded
    pub async fn get_listings(&self, raw_url: &str, date: Option<&str>) -> Result<Listings> {
        let page = self.load(raw_url, date).await?;
        let listings = parse_listings_html(&page.html, &page.window_name, self.clock.as_ref());

        info!(
            "Extracted {} films and {} dates for {}",
            listings.films.len(),
            listings.branch.dates.len(),
            listings.branch.name
        );

        Ok(listings)
    }

    /// Get only the branch details for a branch page.
    ///
    /// Accepts the same arguments and returns the same errors as
    /// [`get_listings`](Self::get_listings).
    pub async fn get_branch(&self, raw_url: &str, date: Option<&str>) -> Result<Branch> {
        let page = self.load(raw_url, date).await?;
        Ok(branch_from_page(&page, self.clock.as_ref()))
    }

    async fn load(&self, raw_url: &str, date: Option<&str>) -> Result<RenderedPage> {
        let search = get_search_data(raw_url, date)?;
        debug!("Normalized {} to {}", raw_url, search.full_url);

        self.source.load(&search.full_url).await
    }
}

impl Default for CineworldScraper {
    fn default() -> Self {
        Self::new()
    }
}

fn branch_from_page(page: &RenderedPage, clock: &dyn Clock) -> Branch {
    let document = Html::parse_document(&page.html);
    let ctx = ExtractionContext::new(&document, &page.window_name, clock);
    parse_branch(&ctx)
}
