//! Home & Design Article Clipper Backend
//!
//! A small REST backend that scrapes a home-and-design news page, stores the
//! extracted articles in SQLite, and serves them with user-authored notes.

mod api;
mod config;
mod db;
mod errors;
mod models;
mod scrape;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub http: reqwest::Client,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Article Clipper Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Source page: {}", config.source_url);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Create application state; the outbound client is shared by all scrapes
    let state = AppState {
        repo,
        http: reqwest::Client::new(),
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = state.config.static_dir.clone();

    Router::new()
        // Scrape
        .route("/scrape", get(api::run_scrape))
        // Articles
        .route("/articles", get(api::list_articles))
        .route("/articles/{id}", get(api::get_article))
        .route("/articles/{id}", post(api::attach_note))
        // Saved flag
        .route("/save", get(api::list_saved))
        .route("/save/{id}", put(api::mark_saved))
        .route("/delete/{id}", put(api::unmark_saved))
        // Health check
        .route("/health", get(health_check))
        // Browser page
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
