//! # catalog-api
//!
//! HTTP API layer for the product catalog built on Axum.
//!
//! Provides the generic CRUD route set, the resource routers, middleware
//! (request context and deadline, logging, CORS, request ids, panic
//! recovery), extractors, and the mapping from domain errors to HTTP
//! responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
