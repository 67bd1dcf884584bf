// rest_api/src/config.rs

use std::env;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_CLIENT_ORIGIN: &str = "http://localhost:3000";

/// Process-wide configuration, read from the environment once at
/// startup and passed into the collaborators that need it.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub store_path: String,
    pub store_db_name: String,
}

impl ServerConfig {
    /// Loads the configuration from environment variables, falling back
    /// to development defaults for anything unset.
    ///
    /// * `HOST` / `PORT` — bind address (default `127.0.0.1:5000`)
    /// * `CLIENT_ORIGIN` — comma-separated allowed CORS origins
    /// * `STORE_PATH` — record store data directory
    /// * `STORE_DB_NAME` — logical database namespace inside the store
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let allowed_origins: Vec<String> = env::var("CLIENT_ORIGIN")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();
        let allowed_origins = if allowed_origins.is_empty() {
            vec![DEFAULT_CLIENT_ORIGIN.to_string()]
        } else {
            allowed_origins
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
            allowed_origins,
            store_path: env::var("STORE_PATH").unwrap_or_else(|_| "data/emr".to_string()),
            store_db_name: env::var("STORE_DB_NAME").unwrap_or_else(|_| "emrdb".to_string()),
        })
    }

    /// CORS layer restricted to the configured client origins. Origins
    /// that fail header-value parsing are skipped with a warning rather
    /// than aborting startup.
    pub fn cors_layer(&self) -> CorsLayer {
        let origins: Vec<HeaderValue> = self
            .allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring unparseable CLIENT_ORIGIN entry");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST])
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(true)
    }
}

#[cfg(test)]
mod tests {
    use super::ServerConfig;

    #[test]
    fn origin_list_splits_and_trims() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
            allowed_origins: "http://a.example, http://b.example"
                .split(',')
                .map(str::trim)
                .map(str::to_string)
                .collect(),
            store_path: "data/emr".to_string(),
            store_db_name: "emrdb".to_string(),
        };
        assert_eq!(config.allowed_origins.len(), 2);
        // Building the layer must not panic on a well-formed list.
        let _ = config.cors_layer();
    }
}
