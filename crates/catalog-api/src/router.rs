//! Route definitions for the catalog HTTP API.
//!
//! Resource routes are mounted under `/api/v1`; the health check sits at
//! the root. The router receives `AppState` and passes it to all handlers
//! via Axum's `State` extractor.

use axum::http::HeaderName;
use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::request_id::{XRequestId, request_id_header};
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(handlers::category::routes())
        .merge(handlers::product::routes());

    let header: HeaderName = request_id_header();

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(handlers::health::health))
        .layer(CatchPanicLayer::custom(middleware::recovery::handle_panic))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::context::request_context,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(middleware::cors::build_cors_layer(&state.config.server.cors))
        .layer(SetRequestIdLayer::new(header.clone(), XRequestId))
        .layer(PropagateRequestIdLayer::new(header))
        .with_state(state)
}
