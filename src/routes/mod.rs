//! HTTP route handlers for the web service.
//!
//! The route table is built here as an explicit mapping from path to
//! handler, so the full surface is inspectable and testable without a live
//! listener. Version-bearing responses carry a Cache-Control header that
//! forces upstream caches to revalidate across deployment swaps.
//!
//! Request tracing is enabled via middleware that generates a unique
//! request ID for each incoming request, allowing correlation of all logs
//! within a request.

pub mod health;
pub mod home;

use axum::{http::Uri, middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_VERSIONED;
use crate::error::AppError;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Home - version banner, upstream caches must revalidate
    let home_routes = Router::new()
        .route("/", get(home::index))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_VERSIONED),
        ));

    // Health check - always fresh for liveness probes
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_VERSIONED),
        ));

    Router::new()
        .merge(home_routes)
        .merge(health_routes)
        .fallback(not_found)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

/// Fallback handler for paths outside the route table.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
