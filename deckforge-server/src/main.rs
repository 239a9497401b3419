use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod api;
pub mod config;
pub mod db;
pub mod repository;
pub mod service;

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use deckforge_gemini::GeminiClient;

use crate::api::AppState;
use crate::config::Config;

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deckforge_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Deckforge server...");

    // Read configuration from environment
    let config = Config::from_env().expect("Invalid configuration");

    tracing::info!("Connecting to database...");

    // Create database connection pool
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");

    tracing::info!("Database connection pool created");

    // Run migrations
    db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    // Build the generation client with a capped request timeout
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(90))
        .build()
        .expect("Failed to build HTTP client");

    let generator = GeminiClient::with_client(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        http_client,
    );

    tracing::info!("Using generation model: {}", generator.model());

    let cors_origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .expect("Invalid CORS origin");

    // Build router with all API endpoints
    let app = api::create_router(
        AppState {
            pool,
            generator: Arc::new(generator),
        },
        cors_origin,
    );

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
