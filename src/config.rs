//! Runtime configuration from environment variables.

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/mediarack";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ASSETS_DIR: &str = "assets";

/// Server configuration. Read once at startup; `dotenvy` has already been
/// given a chance to populate the environment by then.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    /// Directory the client page is served from.
    pub assets_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let max_connections = std::env::var("MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.into()),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into()),
            max_connections,
            assets_dir: std::env::var("ASSETS_DIR").unwrap_or_else(|_| DEFAULT_ASSETS_DIR.into()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: DEFAULT_BIND_ADDR.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            assets_dir: DEFAULT_ASSETS_DIR.into(),
        }
    }
}
