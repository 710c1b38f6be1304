//! # catalog-core
//!
//! Core crate for the product catalog service. Contains the entity
//! contract, configuration schemas, the per-request context,
//! pagination/sorting/filter types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other catalog crates.

pub mod config;
pub mod context;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use context::RequestContext;
pub use error::AppError;
pub use result::AppResult;
