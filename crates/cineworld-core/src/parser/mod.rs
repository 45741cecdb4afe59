//! HTML parsers for Cineworld branch pages
//!
//! This module turns a rendered branch page into typed records:
//! - `query`: defensive element queries that never fail
//! - `branch`: branch identity and available dates
//! - `films`: films, screening types and showtimes
//!
//! Every parser receives an explicit [`ExtractionContext`] rather than reading
//! page or host state from anywhere else.

pub mod branch;
pub mod films;
pub mod query;
pub mod selectors;

use scraper::{ElementRef, Html};

use crate::dates::Clock;
use crate::types::Listings;

// Re-export main parsing functions
pub use branch::parse_branch;
pub use films::{parse_duration, parse_film, parse_films};

/// Everything a parser may read: the rendered document, the page's window
/// name, and the host calendar.
#[derive(Clone, Copy)]
pub struct ExtractionContext<'a> {
    document: &'a Html,
    window_name: &'a str,
    clock: &'a dyn Clock,
}

impl<'a> ExtractionContext<'a> {
    /// Create a context for one extraction
    pub fn new(document: &'a Html, window_name: &'a str, clock: &'a dyn Clock) -> Self {
        Self {
            document,
            window_name,
            clock,
        }
    }

    /// Root element of the document
    pub fn root(&self) -> ElementRef<'a> {
        self.document.root_element()
    }

    /// `window.name` as reported by the rendered page
    pub fn window_name(&self) -> &'a str {
        self.window_name
    }

    /// Host calendar used for date and time reconstruction
    pub fn clock(&self) -> &'a dyn Clock {
        self.clock
    }
}

/// Parse the branch and its films from a rendered page.
pub fn parse_listings(ctx: &ExtractionContext<'_>) -> Listings {
    Listings {
        branch: parse_branch(ctx),
        films: parse_films(ctx),
    }
}

/// Parse raw page HTML into listings.
///
/// # Arguments
/// * `html` - Rendered HTML of a branch page
/// * `window_name` - `window.name` of the rendered page
/// * `clock` - Host calendar
pub fn parse_listings_html(html: &str, window_name: &str, clock: &dyn Clock) -> Listings {
    let document = Html::parse_document(html);
    let ctx = ExtractionContext::new(&document, window_name, clock);
    parse_listings(&ctx)
}
