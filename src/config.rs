//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address in `host:port` form; takes priority over `PORT`
//! - `PORT` - Port bound on all interfaces when `LISTEN` is unset (default: `8080`)
//! - `PUBLIC_BASE_URL` - Origin short URLs are built on (default: `http://localhost:8080`)
//! - `CORS_ALLOWED_ORIGINS` - Comma-separated browser origins (default: `http://localhost:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CODE_LENGTH` - Characters per generated code (default: 6)
//! - `MAX_GENERATION_ATTEMPTS` - Draws per shorten request before giving up (default: 10)
//!
//! ```bash
//! export PORT=8080
//! export PUBLIC_BASE_URL="https://sho.rt"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,https://app.sho.rt"
//! ```

use anyhow::Result;
use axum::http::HeaderValue;
use std::env;
use std::net::SocketAddr;

use crate::domain::{DEFAULT_CODE_LENGTH, DEFAULT_MAX_ATTEMPTS, MAX_CODE_LENGTH};

const DEFAULT_PORT: &str = "8080";
const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";
const MAX_GENERATION_ATTEMPTS: usize = 1000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub public_base_url: String,
    pub cors_allowed_origins: Vec<String>,
    pub log_level: String,
    pub log_format: String,
    pub code_length: usize,
    pub max_generation_attempts: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparsable numeric values fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let listen_addr = Self::load_listen_addr();

        let public_base_url =
            env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let cors_allowed_origins = parse_origins(
            &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()),
        );

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let code_length = env::var("CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CODE_LENGTH);

        let max_generation_attempts = env::var("MAX_GENERATION_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_ATTEMPTS);

        Ok(Self {
            listen_addr,
            public_base_url,
            cors_allowed_origins,
            log_level,
            log_format,
            code_length,
            max_generation_attempts,
        })
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. `0.0.0.0:$PORT`
    /// 3. `0.0.0.0:8080`
    fn load_listen_addr() -> String {
        if let Ok(addr) = env::var("LISTEN") {
            return addr;
        }

        let port = env::var("PORT")
            .ok()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PORT.to_string());

        format!("0.0.0.0:{}", port)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not a socket address
    /// - `public_base_url` does not start with `http://` or `https://`
    /// - `log_format` is not `text` or `json`
    /// - `code_length` or `max_generation_attempts` is out of range
    /// - a CORS origin is `*` or not a valid header value
    pub fn validate(&self) -> Result<()> {
        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.public_base_url.starts_with("http://")
            && !self.public_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "PUBLIC_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.public_base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.code_length == 0 || self.code_length > MAX_CODE_LENGTH {
            anyhow::bail!(
                "CODE_LENGTH must be between 1 and {}, got {}",
                MAX_CODE_LENGTH,
                self.code_length
            );
        }

        if self.max_generation_attempts == 0
            || self.max_generation_attempts > MAX_GENERATION_ATTEMPTS
        {
            anyhow::bail!(
                "MAX_GENERATION_ATTEMPTS must be between 1 and {}, got {}",
                MAX_GENERATION_ATTEMPTS,
                self.max_generation_attempts
            );
        }

        for origin in &self.cors_allowed_origins {
            // Credentialed CORS cannot be combined with a wildcard origin.
            if origin == "*" {
                anyhow::bail!("CORS_ALLOWED_ORIGINS must list explicit origins, got '*'");
            }
            if HeaderValue::from_str(origin).is_err() {
                anyhow::bail!("CORS_ALLOWED_ORIGINS contains an invalid origin '{}'", origin);
            }
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Public base URL: {}", self.public_base_url);
        tracing::info!("  CORS origins: {}", self.cors_allowed_origins.join(", "));
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Code length: {}", self.code_length);
        tracing::info!(
            "  Max generation attempts: {}",
            self.max_generation_attempts
        );
    }
}

/// Splits a comma-separated origin list.
///
/// Browsers send `Origin` without a trailing slash, so one is stripped here.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
