//! Data types for the Cineworld listings scraper
//!
//! Every record is assembled fresh from a rendered page and never mutated
//! afterwards. All types implement Serialize and Deserialize so they can be
//! returned as JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Query parameters merged from the query string and the fragment
pub type ParsedParams = BTreeMap<String, String>;

/// Canonical reference to a branch page, with an optional target date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchData {
    /// Origin and path, without query or fragment
    pub base_url: String,
    /// `base_url`, plus `#?at=<date>` when a date is selected
    pub full_url: String,
    /// Selected date as `YYYY-MM-DD`
    pub selected_date: Option<String>,
}

/// A day selector label paired with the calendar date it stands for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayDate {
    /// Label as displayed on the page (e.g. "Today", "Monday")
    pub day: String,
    /// Calendar date as `YYYY-MM-DD`
    pub date: String,
}

/// Identity of a cinema branch and the dates it offers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub description: String,
    pub dates: Vec<DayDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poster {
    pub url: String,
}

/// Age rating icon for a film
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub url: String,
    pub alt: String,
}

/// A film shown at the branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    /// Link to the film's details page
    pub url: String,
    pub poster: Poster,
    pub rating: Rating,
    pub genre: String,
    pub duration_minutes: u32,
    /// Empty when the film cannot be booked yet
    pub screenings: Vec<Screening>,
}

/// One way of showing a film (2D, IMAX, ...) and its showtimes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screening {
    pub label: String,
    pub subtitled: bool,
    pub times: Vec<Showtime>,
}

/// A single bookable showing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showtime {
    pub start: TimePoint,
    pub end: TimePoint,
    pub booking_url: String,
}

/// A wall-clock label and the absolute instant it denotes
///
/// Both fields are empty when the source time could not be read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePoint {
    /// Zero-padded `HH:MM`
    pub label: String,
    /// ISO-8601 instant in UTC
    pub value: String,
}

impl TimePoint {
    /// Create an empty time point
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the time could not be reconstructed
    pub fn is_empty(&self) -> bool {
        self.label.is_empty() && self.value.is_empty()
    }
}

/// Everything extracted from one branch page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listings {
    pub branch: Branch,
    pub films: Vec<Film>,
}
