//! API route handlers
//!
//! - `health`: liveness and readiness probes
//! - `products`: the product CRUD endpoints

pub mod health;
pub mod products;

use crate::error::{ApiError, ApiResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Root endpoint (GET /). Lists the available endpoints.
pub async fn api_info() -> ApiResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Product API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "POST /products",
            "GET /products",
            "GET /products/{id}",
            "PUT /products/{id}",
            "DELETE /products/{id}",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 Not Found handler for undefined routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
