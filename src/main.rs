//! Crew Roster Backend
//!
//! A REST backend that keeps rower and crew rosters in memory and stores rower photos on disk.

mod api;
mod config;
mod errors;
mod models;
mod photos;
mod roster;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use photos::PhotoStore;
use roster::RosterService;

/// Request bodies above this limit are rejected outright; the photo
/// store applies its own 5 MiB policy below it.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<RosterService>,
    pub photos: Arc<PhotoStore>,
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

    tracing::info!("Starting Crew Roster Backend");
    tracing::info!("Uploads directory: {:?}", config.uploads_dir);
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.enable_test_routes {
        tracing::warn!("Test routes enabled (ROSTER_ENABLE_TEST_ROUTES). /test/reset is reachable!");
    }

    // Initialize the roster with the seed dataset
    let roster = Arc::new(RosterService::new());

    // Initialize the photo store
    let photos = Arc::new(PhotoStore::open(&config.uploads_dir).await?);

    // Create application state
    let state = AppState {
        roster,
        photos,
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

    let mut router = Router::new()
        // Rowers
        .route("/rowers", get(api::list_rowers))
        .route("/rowers", post(api::create_rower))
        .route("/rowers/{id}", get(api::get_rower))
        // Crews
        .route("/crews", get(api::list_crews))
        .route("/crews", post(api::create_crew))
        .route("/crews/{id}", get(api::get_crew))
        .route("/crews/{id}/addRower", post(api::add_rower))
        .route("/crews/{id}/removeRower", post(api::remove_rower));

    // Seed-reset endpoint, only when explicitly enabled
    if state.config.enable_test_routes {
        router = router.route("/test/reset", post(api::reset));
    }

    router
        .route("/health", get(health_check))
        .nest_service("/uploads", ServeDir::new(state.photos.dir()))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
