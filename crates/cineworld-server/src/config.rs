//! Server configuration

use cineworld_core::SessionConfig;
use tracing::warn;

/// Port used when `PORT` is unset or invalid
pub const DEFAULT_PORT: u16 = 3000;

/// Origins allowed to call the API from a browser
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    r"^http://localhost(:\d+)?$",
    r"^https://(www\.)?lewishowles\.github\.io(/.*)?$",
    r"^https://([a-zA-Z0-9-]+\.)*howles\.dev(/.*)?$",
];

/// Configuration for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on (default: 3000)
    pub port: u16,
    /// Regular expressions matched against the `Origin` header
    pub allowed_origins: Vec<String>,
    /// Browser session used to render branch pages
    pub session: SessionConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|pattern| pattern.to_string())
                .collect(),
            session: SessionConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Build the configuration from the environment.
    ///
    /// Reads the listening port from `PORT`.
    pub fn from_env() -> Self {
        Self {
            port: parse_port(std::env::var("PORT").ok().as_deref()),
            ..Self::default()
        }
    }
}

fn parse_port(value: Option<&str>) -> u16 {
    match value {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid PORT {:?}, using {}", value, DEFAULT_PORT);
            DEFAULT_PORT
        }),
        None => DEFAULT_PORT,
    }
}
