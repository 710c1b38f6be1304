//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use axum::extract::FromRef;

use catalog_core::config::AppConfig;
use catalog_database::DatabasePool;
use catalog_service::{CategoryService, ProductService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`; services are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// SQLite connection pool
    pub db: DatabasePool,
    /// Category use cases
    pub categories: Arc<CategoryService>,
    /// Product use cases
    pub products: Arc<ProductService>,
}

impl AppState {
    /// Builds every service over the shared pool.
    pub fn new(config: AppConfig, db: DatabasePool) -> Self {
        let pagination = config.pagination;
        Self {
            categories: Arc::new(CategoryService::new(&db, pagination)),
            products: Arc::new(ProductService::new(&db, pagination)),
            config: Arc::new(config),
            db,
        }
    }
}

impl FromRef<AppState> for Arc<CategoryService> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.categories)
    }
}

impl FromRef<AppState> for Arc<ProductService> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.products)
    }
}
