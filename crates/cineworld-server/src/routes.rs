//! HTTP handlers
//!
//! Every handler answers with `{ "data": ... }` on success and
//! `{ "error": "..." }` with status 400 on failure.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cineworld_core::{Branch, CineworldError, Listings};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::AppState;

/// Message returned when a branch page could not be loaded
pub const LOAD_FAILED_MESSAGE: &str = "We couldn't load the requested branch.";

/// Query parameters accepted by the branch endpoints
#[derive(Debug, Default, Deserialize)]
pub struct BranchQuery {
    /// Any URL of the branch page
    pub url: Option<String>,
    /// Optional date (`YYYY-MM-DD`) overriding one in the URL
    pub date: Option<String>,
}

/// Successful response envelope
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Error response for the API
///
/// Input errors and unreadable query strings are reported as-is. Failures
/// while loading the page are logged and reported with a generic message.
#[derive(Debug)]
pub enum ApiError {
    /// The scraper rejected the request or failed to load the page
    Scraper(CineworldError),
    /// The query string could not be deserialized
    Query(QueryRejection),
}

impl ApiError {
    fn message(&self) -> String {
        match self {
            Self::Scraper(error) if error.is_input_error() => error.to_string(),
            Self::Scraper(error) => {
                warn!("Failed to load branch: {}", error);
                LOAD_FAILED_MESSAGE.to_string()
            }
            Self::Query(rejection) => rejection.body_text(),
        }
    }
}

impl From<CineworldError> for ApiError {
    fn from(error: CineworldError) -> Self {
        Self::Scraper(error)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Query(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": self.message() }))).into_response()
    }
}

/// Health check.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Get the branch details and films for a branch page.
pub async fn get_films(
    State(state): State<AppState>,
    query: Result<Query<BranchQuery>, QueryRejection>,
) -> Result<Json<DataResponse<Listings>>, ApiError> {
    let Query(query) = query?;
    let url = query.url.unwrap_or_default();
    let data = state
        .scraper()
        .get_listings(&url, query.date.as_deref())
        .await?;

    Ok(Json(DataResponse { data }))
}

/// Get only the branch details for a branch page.
pub async fn get_branch(
    State(state): State<AppState>,
    query: Result<Query<BranchQuery>, QueryRejection>,
) -> Result<Json<DataResponse<Branch>>, ApiError> {
    let Query(query) = query?;
    let url = query.url.unwrap_or_default();
    let data = state
        .scraper()
        .get_branch(&url, query.date.as_deref())
        .await?;

    Ok(Json(DataResponse { data }))
}
