//! PromptLab Backend
//!
//! A REST backend for managing prompts and collections with automatic version history.

mod api;
mod config;
mod errors;
mod models;
mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use store::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting PromptLab Backend v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Storage: in-memory (state is lost on restart)");

    let state = AppState {
        repo: Arc::new(Repository::new()),
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
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

    tracing::debug!(bind_addr = %state.config.bind_addr, "Building router");

    Router::new()
        .route("/health", get(health_check))
        // Prompts
        .route("/prompts", get(api::list_prompts).post(api::create_prompt))
        .route(
            "/prompts/{id}",
            get(api::get_prompt)
                .put(api::update_prompt)
                .patch(api::patch_prompt)
                .delete(api::delete_prompt),
        )
        .route("/prompts/{id}/variables", get(api::get_prompt_variables))
        // Versions
        .route("/prompts/{id}/versions", get(api::list_prompt_versions))
        .route(
            "/prompts/{id}/versions/{version_number}",
            get(api::get_prompt_version),
        )
        .route(
            "/prompts/{id}/versions/{version_number}/revert",
            post(api::revert_prompt_version),
        )
        // Collections
        .route(
            "/collections",
            get(api::list_collections).post(api::create_collection),
        )
        .route(
            "/collections/{id}",
            get(api::get_collection).delete(api::delete_collection),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check response.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
