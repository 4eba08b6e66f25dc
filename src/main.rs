//! Team Roster Backend
//!
//! A REST backend for team scheduling with MongoDB persistence: team members,
//! time-off entries, an on-call rotation document, and a public-holiday proxy.

mod api;
mod config;
mod db;
mod errors;
mod holidays;
mod models;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::{Repository, Store};
use holidays::HolidayClient;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub holidays: Arc<HolidayClient>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration; a missing connection string is fatal before serving
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Team Roster Backend");
    tracing::info!("Database: {}", config.db_name);
    tracing::info!("Static dir: {:?}", config.static_dir);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Connect to MongoDB; connection failure here exits non-zero
    let database = db::init_database(&config.mongo_uri, &config.db_name).await?;
    let store: Arc<dyn Store> = Arc::new(Repository::new(database));

    let holidays = Arc::new(HolidayClient::new(config.holiday_api_base.clone()));

    // Create application state
    let state = AppState {
        store,
        holidays,
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

    // API routes
    let api_routes = Router::new()
        // Members
        .route("/members", get(api::list_members))
        .route("/members", post(api::create_member))
        .route("/members/{id}", delete(api::delete_member))
        // Time off
        .route("/timeoff", get(api::list_time_off))
        .route("/timeoff", post(api::create_time_off))
        .route("/timeoff/{id}", delete(api::delete_time_off))
        // On-call rotation
        .route("/oncall", get(api::get_rotation))
        .route("/oncall", post(api::save_rotation))
        // Public holidays (external proxy)
        .route("/holidays/{year}", get(api::get_holidays));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    // Static assets and landing page
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .fallback_service(static_files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
