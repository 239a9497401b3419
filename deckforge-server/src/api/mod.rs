//! API Module
//!
//! HTTP API layer for the deck server.
//! Each submodule handles endpoints for a specific domain.

pub mod deck;
pub mod error;
pub mod health;

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, patch, post},
};
use deckforge_gemini::OutlineGenerator;
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub generator: Arc<dyn OutlineGenerator>,
}

/// Create the main API router with all endpoints
pub fn create_router(state: AppState, cors_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        // Health check
        .route("/", get(health::health_check))
        // Deck endpoints
        .route("/api/v1/generate-outline", post(deck::generate_outline))
        .route("/api/v1/projects/{id}", get(deck::get_project))
        .route("/api/v1/slides/{id}", patch(deck::update_slide))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
