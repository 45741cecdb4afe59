//! Error types for the Cineworld listings scraper
//!
//! Only request-level failures are errors. Field-level problems inside a
//! rendered page never surface here; the parser recovers them to empty values.
//! CineworldError implements Serialize so it can be returned as a JSON string.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for Cineworld scraper operations
#[derive(Error, Debug)]
pub enum CineworldError {
    /// No usable branch URL was supplied
    #[error("We couldn't find a URL for the desired branch.")]
    InvalidInput,

    /// The branch URL could not be parsed
    #[error("The provided URL doesn't seem to be correct.")]
    MalformedUrl,

    /// The browser session failed to launch, navigate or read the page
    #[error("Browser session failed: {0}")]
    Session(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The branch page does not exist (HTTP 404)
    #[error("Branch page not found: {0}")]
    NotFound(String),
}

impl CineworldError {
    /// Whether the error was caused by the caller's input rather than by
    /// loading the page.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput | Self::MalformedUrl)
    }
}

/// Serialize CineworldError as its display string
impl Serialize for CineworldError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for Cineworld scraper operations
pub type Result<T> = std::result::Result<T, CineworldError>;
