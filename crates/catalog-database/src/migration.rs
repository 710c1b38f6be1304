//! Catalog schema migrations (`categories`, `products`).

use sqlx::SqlitePool;
use tracing::info;

use catalog_core::error::{AppError, ErrorKind};

/// Apply pending catalog schema migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    info!("Applying catalog schema migrations (categories, products)");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to apply catalog schema migrations: {e}"),
                e,
            )
        })?;

    info!("Catalog schema up to date");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    #[tokio::test]
    async fn test_creates_catalog_tables() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("connect");
        run_migrations(&pool).await.expect("migrate");
        run_migrations(&pool).await.expect("re-running is a no-op");

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('categories', 'products') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .expect("list tables");
        assert_eq!(tables, vec!["categories", "products"]);
    }
}
