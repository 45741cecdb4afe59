//! Cineworld Listings Core Library
//!
//! This crate extracts a structured snapshot of a Cineworld branch's film
//! schedule from its rendered branch page.
//!
//! # Features
//! - Normalize any branch URL into a canonical URL and optional date
//! - Reconstruct calendar dates and ISO instants from day labels and bare times
//! - Parse branch details, films, screenings and showtimes, degrading missing
//!   fields to empty values instead of failing
//! - Render pages in headless Chrome, or fetch them over plain HTTP

pub mod browser;
pub mod client;
pub mod dates;
pub mod error;
pub mod page;
pub mod parser;
pub mod scraper;
pub mod search;
pub mod types;

// Re-export main types for convenience
pub use crate::browser::{BrowserSession, SessionConfig};
pub use crate::client::{ClientConfig, HttpPageSource};
pub use crate::dates::{Clock, FixedClock, LocalClock};
pub use crate::error::{CineworldError, Result};
pub use crate::page::{PageSource, RenderedPage};
pub use crate::scraper::CineworldScraper;
pub use crate::search::{get_search_data, parse_url_params};
pub use crate::types::{
    Branch, DayDate, Film, Listings, ParsedParams, Poster, Rating, Screening, SearchData,
    Showtime, TimePoint,
};
