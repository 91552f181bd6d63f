//! Server crate for the bourbon distillery recommender.
//!
//! This crate wires the catalog and recommender to HTTP:
//! - **config**: command line / environment settings
//! - **orchestrator**: runs a strategy against the shared catalog
//! - **routes**: the `POST /recommend` handler
//! - **error**: maps failures onto the two public error responses

use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod routes;

pub use config::ServerConfig;
pub use error::ApiError;
pub use orchestrator::RecommendationOrchestrator;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: RecommendationOrchestrator,
}

impl AppState {
    pub fn new(orchestrator: RecommendationOrchestrator) -> Self {
        Self { orchestrator }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/recommend", post(routes::recommend))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
