//! Cineworld Listings HTTP Server
//!
//! This crate exposes the Cineworld listings scraper over HTTP so client
//! applications can show a branch's schedule.
//!
//! # Endpoints
//! - `GET /health` - Health check
//! - `GET /api/cineworld/films?url=...&date=...` - Branch details and films
//! - `GET /api/cineworld/branch?url=...&date=...` - Branch details only
//!
//! # Usage
//!
//! ```rust,no_run
//! use cineworld_server::{serve, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     serve(ServerConfig::from_env()).await
//! }
//! ```

pub mod config;
pub mod cors;
pub mod logging;
pub mod routes;

use std::sync::Arc;

use axum::{routing::get, Router};
use cineworld_core::{BrowserSession, CineworldScraper, LocalClock};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::ServerConfig;

/// Shared application state.
///
/// The scraper holds no per-request state, so handlers share it without
/// locking and concurrent requests each run their own browser session.
#[derive(Clone)]
pub struct AppState {
    scraper: Arc<CineworldScraper>,
}

impl AppState {
    /// Create state around a configured scraper.
    pub fn new(scraper: CineworldScraper) -> Self {
        Self {
            scraper: Arc::new(scraper),
        }
    }

    /// Get a reference to the inner scraper.
    pub fn scraper(&self) -> &CineworldScraper {
        &self.scraper
    }
}

/// Build the application router.
pub fn router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/api/cineworld/films", get(routes::get_films))
        .route("/api/cineworld/branch", get(routes::get_branch))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors::cors_layer(allowed_origins)),
        )
}

/// Bind to the configured port and serve until the process exits.
pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    let scraper = CineworldScraper::with_source(
        BrowserSession::with_config(config.session.clone()),
        LocalClock,
    );
    let app = router(AppState::new(scraper), &config.allowed_origins);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("Server running on port {}", config.port);

    axum::serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use chrono::DateTime;
    use cineworld_core::{CineworldError, FixedClock, PageSource, RenderedPage};
    use tower::ServiceExt;

    const PAGE: &str = r#"
        <html><body>
            <p class="subheading">Cinema in Ashton-under-Lyne</p>
            <div class="qb-days-group">
                <button class="btn btn-default">Today</button>
                <button class="btn btn-default">Sat</button>
            </div>
            <div class="qb-movie">
                <h3 class="qb-movie-name">Paddington in Peru</h3>
                <div class="qb-movie-info-wrapper"><span class="mr-xs">106</span></div>
                <div class="qb-movie-info-column">
                    <div class="qb-screening-attributes"><span>2D</span></div>
                    <a class="btn btn-primary" data-url="https://book/1">11:00</a>
                </div>
            </div>
        </body></html>
    "#;

    struct FakeSource;

    #[async_trait]
    impl PageSource for FakeSource {
        async fn load(&self, url: &str) -> cineworld_core::Result<RenderedPage> {
            if url.contains("broken") {
                return Err(CineworldError::Session("chrome crashed".to_string()));
            }
            Ok(RenderedPage {
                html: PAGE.to_string(),
                window_name: "Ashton-under-Lyne".to_string(),
            })
        }
    }

    fn app() -> Router {
        let clock = FixedClock::new(DateTime::parse_from_rfc3339("2026-01-09T10:00:00+00:00").unwrap());
        let scraper = CineworldScraper::with_source(FakeSource, clock);
        router(AppState::new(scraper), &ServerConfig::default().allowed_origins)
    }

    async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, json) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_films() {
        let (status, json) =
            get("/api/cineworld/films?url=https%3A%2F%2Fhost%2Fcinemas%2F068&date=2026-01-10").await;
        assert_eq!(status, StatusCode::OK);

        let data = &json["data"];
        assert_eq!(data["branch"]["name"], "Ashton-under-Lyne");
        assert_eq!(data["branch"]["dates"][1]["date"], "2026-01-10");
        assert_eq!(data["films"][0]["title"], "Paddington in Peru");
        assert_eq!(data["films"][0]["duration_minutes"], 106);
        assert_eq!(data["films"][0]["screenings"][0]["times"][0]["end"]["label"], "12:46");
        assert_eq!(
            data["films"][0]["screenings"][0]["times"][0]["booking_url"],
            "https://book/1"
        );
    }

    #[tokio::test]
    async fn test_branch() {
        let (status, json) = get("/api/cineworld/branch?url=https%3A%2F%2Fhost%2Fcinemas%2F068").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["description"], "Cinema in Ashton-under-Lyne");
        assert!(json["data"].get("films").is_none());
    }

    #[tokio::test]
    async fn test_missing_url() {
        let (status, json) = get("/api/cineworld/films").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "We couldn't find a URL for the desired branch.");
    }

    #[tokio::test]
    async fn test_malformed_url() {
        let (status, json) = get("/api/cineworld/branch?url=not-a-url").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "The provided URL doesn't seem to be correct.");
    }

    #[tokio::test]
    async fn test_unreadable_query_is_json_error() {
        for uri in [
            "/api/cineworld/films?url=https%3A%2F%2Fhost%2Fa&url=https%3A%2F%2Fhost%2Fb",
            "/api/cineworld/branch?url=https%3A%2F%2Fhost%2Fa&url=https%3A%2F%2Fhost%2Fb",
        ] {
            let (status, json) = get(uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            let message = json["error"].as_str().unwrap();
            assert!(message.contains("duplicate field"), "{}", message);
        }
    }

    #[tokio::test]
    async fn test_session_failure_is_opaque() {
        let (status, json) = get("/api/cineworld/films?url=https%3A%2F%2Fhost%2Fbroken").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], routes::LOAD_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_cors_allowed_origin() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
    }

    #[tokio::test]
    async fn test_cors_rejected_origin() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "https://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
