//! Health Check API Handler
//!
//! Simple liveness endpoint for monitoring.

use axum::Json;

/// GET /
/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "online", "version": "1.0" }))
}
