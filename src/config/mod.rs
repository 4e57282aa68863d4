//! Configuration module for the clipper backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// URL of the page the scrape route pulls articles from
    pub source_url: String,
    /// Directory of static assets for the browser page
    pub static_dir: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let db_path = env::var("CLIPPER_DB_PATH")
            .unwrap_or_else(|_| "./data/clipper.sqlite".to_string())
            .into();

        let source_url = env::var("CLIPPER_SOURCE_URL")
            .unwrap_or_else(|_| "http://mspmag.com/home-and-design".to_string());

        let static_dir = env::var("CLIPPER_STATIC_DIR")
            .unwrap_or_else(|_| "./public".to_string())
            .into();

        let bind_addr = env::var("CLIPPER_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid CLIPPER_BIND_ADDR format");

        let log_level = env::var("CLIPPER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            db_path,
            source_url,
            static_dir,
            bind_addr,
            log_level,
        }
    }
}
