//! Branch URL normalization
//!
//! Cineworld branch URLs carry their state in two places: the ordinary query
//! string, and a second parameter block hidden in the fragment
//! (`#/buy-tickets-by-cinema?in-cinema=068&at=2026-01-09`). This module folds
//! both into one parameter map and reduces any branch URL to the canonical form
//! used to load the page.

use chrono::NaiveDate;
use url::Url;

use crate::dates::format_date;
use crate::error::{CineworldError, Result};
use crate::types::{ParsedParams, SearchData};

/// Parameter holding the selected date on Cineworld URLs
pub const DATE_PARAM: &str = "at";

/// Standardise a branch URL into a base URL, an optional selected date, and
/// the full URL to load.
///
/// A valid `date` takes precedence over any `at` parameter found in the URL
/// itself. Dates that are not `YYYY-MM-DD` calendar dates are treated as
/// absent.
///
/// # Arguments
/// * `raw_url` - Branch URL as supplied by the caller
/// * `date` - Optional override date (`YYYY-MM-DD`)
///
/// # Returns
/// * `Ok(SearchData)` with the canonical URLs
/// * `Err(CineworldError::InvalidInput)` if `raw_url` is empty or whitespace-only
/// * `Err(CineworldError::MalformedUrl)` if `raw_url` is not an absolute URL
///
/// # Example
/// ```
/// use cineworld_core::search::get_search_data;
///
/// let data = get_search_data("https://host/path?at=2026-01-09", None).unwrap();
/// assert_eq!(data.base_url, "https://host/path");
/// assert_eq!(data.full_url, "https://host/path#?at=2026-01-09");
/// assert_eq!(data.selected_date.as_deref(), Some("2026-01-09"));
/// ```
pub fn get_search_data(raw_url: &str, date: Option<&str>) -> Result<SearchData> {
    if !is_non_empty(raw_url) {
        return Err(CineworldError::InvalidInput);
    }

    let url = Url::parse(raw_url).map_err(|_| CineworldError::MalformedUrl)?;
    let params = parse_url_params(raw_url);

    let selected_date = date
        .and_then(parse_date)
        .or_else(|| params.get(DATE_PARAM).and_then(|d| parse_date(d)))
        .map(format_date);

    let base_url = format!("{}{}", url.origin().ascii_serialization(), url.path());
    let full_url = match &selected_date {
        Some(date) => format!("{}#?{}={}", base_url, DATE_PARAM, date),
        None => base_url.clone(),
    };

    Ok(SearchData {
        base_url,
        full_url,
        selected_date,
    })
}

/// Parse the parameters of a URL, combining the query string with any
/// parameters hidden after a `?` in the fragment.
///
/// Query string parameters win over fragment parameters with the same key.
/// Fragments without a `?` contribute nothing. Empty or unparseable input
/// yields an empty map.
///
/// # Example
/// ```
/// use cineworld_core::search::parse_url_params;
///
/// let params = parse_url_params("https://howles.dev?in-cinema=068#?in-cinema=001&at=2000-01-01");
/// assert_eq!(params["in-cinema"], "068");
/// assert_eq!(params["at"], "2000-01-01");
/// ```
pub fn parse_url_params(raw_url: &str) -> ParsedParams {
    let mut params = ParsedParams::new();

    if !is_non_empty(raw_url) {
        return params;
    }

    let Ok(url) = Url::parse(raw_url) else {
        return params;
    };

    if let Some(fragment) = url.fragment().filter(|f| f.contains('?')) {
        // The fragment reads like a relative URL on the same site
        let fragment_url = Url::parse(&url.origin().ascii_serialization())
            .and_then(|origin| origin.join(fragment));

        match fragment_url {
            Ok(fragment_url) => params.extend(fragment_url.query_pairs().into_owned()),
            Err(_) => return ParsedParams::new(),
        }
    }

    params.extend(url.query_pairs().into_owned());

    params
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}
