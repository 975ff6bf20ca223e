//! Configuration module
//!
//! All settings are loaded from the environment (a `.env` file is honored in
//! development). The gateway only needs already-resolved values at
//! construction time: where the Plex library database lives, where the origin
//! server is, and which bucket holds the media files.

use std::env;

const SERVER_PORT: u16 = 3000;
const MAX_CONNECTIONS: u32 = 5;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
const SIGNED_URL_EXPIRY_SECS: u64 = 18000;
const UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    /// Path to the Plex library database (SQLite, opened read-only).
    pub catalog_path: String,
    /// Base URL of the origin Plex server all non-redirected requests go to.
    pub origin_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    // Object storage configuration
    pub s3_bucket: String,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers
    pub aws_region: Option<String>,
    /// How long a presigned redirect target stays valid.
    pub signed_url_expiry_secs: u64,
    pub upstream_connect_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let config = Config {
            server_port: env::var("SERVER_PORT")
                .or_else(|_| env::var("PORT"))
                .unwrap_or_else(|_| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("SERVER_PORT must be a valid port number"))?,
            environment,
            catalog_path: env::var("PLEX_DB")
                .map_err(|_| anyhow::anyhow!("PLEX_DB must point at the Plex library database"))?,
            origin_url: env::var("PLEX_URL")
                .map_err(|_| anyhow::anyhow!("PLEX_URL must be set to the origin server URL"))?,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| MAX_CONNECTIONS.to_string())
                .parse()
                .unwrap_or(MAX_CONNECTIONS),
            db_timeout_seconds: env::var("DB_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| CONNECTION_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(CONNECTION_TIMEOUT_SECS),
            s3_bucket: env::var("S3_BUCKET")
                .or_else(|_| env::var("AWS_S3_BUCKET"))
                .map_err(|_| anyhow::anyhow!("S3_BUCKET must be set"))?,
            s3_region: env::var("S3_REGION").ok(),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            aws_region: env::var("AWS_REGION").ok(),
            signed_url_expiry_secs: env::var("SIGNED_URL_EXPIRY_SECS")
                .unwrap_or_else(|_| SIGNED_URL_EXPIRY_SECS.to_string())
                .parse()
                .unwrap_or(SIGNED_URL_EXPIRY_SECS),
            upstream_connect_timeout_secs: env::var("UPSTREAM_CONNECT_TIMEOUT_SECS")
                .unwrap_or_else(|_| UPSTREAM_CONNECT_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(UPSTREAM_CONNECT_TIMEOUT_SECS),
        };

        Ok(config)
    }

    /// Fail fast on misconfiguration before any connection is opened.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.catalog_path.trim().is_empty() {
            return Err(anyhow::anyhow!("PLEX_DB must not be empty"));
        }
        if !self.origin_url.starts_with("http://") && !self.origin_url.starts_with("https://") {
            return Err(anyhow::anyhow!(
                "PLEX_URL must be an http(s) URL, got '{}'",
                self.origin_url
            ));
        }
        if self.s3_bucket.trim().is_empty() {
            return Err(anyhow::anyhow!("S3_BUCKET must not be empty"));
        }
        if self.signed_url_expiry_secs == 0 {
            return Err(anyhow::anyhow!("SIGNED_URL_EXPIRY_SECS must be positive"));
        }
        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// Origin base with any trailing slash removed, ready for path joining.
    pub fn origin_base(&self) -> &str {
        self.origin_url.trim_end_matches('/')
    }
}
