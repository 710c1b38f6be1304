//! Startup seed data.

use sqlx::SqlitePool;
use tracing::info;

use catalog_core::config::SeedConfig;
use catalog_core::context::RequestContext;
use catalog_core::result::AppResult;
use catalog_core::types::Condition;
use catalog_entity::Category;

use crate::error::storage_error;
use crate::repositories::CategoryRepository;

/// Ensure the default category exists and re-point orphaned products to it.
///
/// Idempotent. Returns the default category id, or `None` when seeding is
/// disabled.
pub async fn seed_default_category(pool: &SqlitePool, config: &SeedConfig) -> AppResult<Option<i64>> {
    if !config.enabled {
        return Ok(None);
    }

    let ctx = RequestContext::new().with_request_id("seed");
    let categories = CategoryRepository::categories(pool.clone());

    let by_name = Condition::eq("name", config.category_name.as_str());
    let category = match categories.find_one_where(&ctx, &by_name).await {
        Ok(existing) => existing,
        Err(e) if e.is_not_found() => {
            let draft = Category::new(&config.category_name, &config.category_description, true);
            let created = categories.create(&ctx, &draft).await?;
            info!(id = created.id, name = %created.name, "Default category created");
            created
        }
        Err(e) => return Err(e),
    };

    let reassigned = sqlx::query(
        "UPDATE products SET category_id = ? \
         WHERE category_id NOT IN (SELECT id FROM categories)",
    )
    .bind(category.id)
    .execute(pool)
    .await
    .map_err(storage_error("Failed to reassign orphaned products"))?
    .rows_affected();

    if reassigned > 0 {
        info!(
            count = reassigned,
            category_id = category.id,
            "Orphaned products moved to default category"
        );
    }

    Ok(Some(category.id))
}
