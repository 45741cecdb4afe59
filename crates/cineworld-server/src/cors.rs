//! Cross-origin policy
//!
//! Browsers calling the API must come from an allowed origin. Requests
//! without an `Origin` header (curl, health checks) are unaffected.

use std::sync::Arc;

use axum::http::{header, request::Parts, HeaderValue, Method};
use regex_lite::Regex;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

/// Compile origin patterns, skipping any that are not valid expressions.
pub fn compile_origins(patterns: &[String]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|pattern| match Regex::new(pattern) {
            Ok(regex) => Some(regex),
            Err(e) => {
                warn!("Ignoring invalid origin pattern {:?}: {}", pattern, e);
                None
            }
        })
        .collect()
}

/// Whether `origin` matches any of the allowed patterns.
pub fn is_allowed_origin(allowed: &[Regex], origin: &str) -> bool {
    allowed.iter().any(|pattern| pattern.is_match(origin))
}

/// CORS layer granting read access to the allowed origins.
pub fn cors_layer(patterns: &[String]) -> CorsLayer {
    let allowed = Arc::new(compile_origins(patterns));

    CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _parts: &Parts| {
            origin
                .to_str()
                .map(|origin| is_allowed_origin(&allowed, origin))
                .unwrap_or(false)
        }))
}
