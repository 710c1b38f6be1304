//! # catalog-service
//!
//! Business logic for the product catalog. A resource is described by a
//! [`Mapper`] and an optional [`EntityValidator`]; the generic
//! [`CrudService`] runs the shared pipeline (shape validation, business
//! validation, mapping, persistence) and [`ResourceService`] is the
//! contract the HTTP layer consumes.
//!
//! Services follow constructor injection; repositories are built from the
//! shared [`catalog_database::DatabasePool`] at construction time.

pub mod category;
pub mod crud;
pub mod dto;
pub mod mapper;
pub mod product;
pub mod resource;
pub mod validation;

pub use category::CategoryService;
pub use crud::CrudService;
pub use mapper::Mapper;
pub use product::ProductService;
pub use resource::{CreateRequestOf, ResourceService, ResponseOf, UpdateRequestOf};
pub use validation::{EntityValidator, NoOpValidator, ValidationResult};

#[cfg(test)]
pub(crate) mod test_support {
    use catalog_core::config::DatabaseConfig;
    use catalog_database::DatabasePool;
    use catalog_database::migration::run_migrations;

    /// A migrated in-memory database.
    pub async fn memory_db() -> DatabasePool {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..DatabaseConfig::default()
        };
        let db = DatabasePool::connect(&config).await.expect("connect");
        run_migrations(db.pool()).await.expect("migrate");
        db
    }
}
