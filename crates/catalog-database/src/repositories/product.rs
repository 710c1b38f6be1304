//! Product persistence: columns and the `category` relation.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::SqlitePool;

use catalog_core::result::AppResult;
use catalog_core::types::{Condition, FilterField};
use catalog_entity::{Category, Product};

use super::base::{Repository, select_where};
use super::record::{Record, RowValues, unknown_relation};

/// Relation name for a product's category.
pub const RELATION_CATEGORY: &str = "category";

/// Repository for products.
pub type ProductRepository = Repository<Product>;

impl Repository<Product> {
    /// Product repository that always loads the owning category.
    pub fn products(pool: SqlitePool) -> Self {
        Self::new(pool).with_preloads([RELATION_CATEGORY])
    }
}

#[async_trait]
impl Record for Product {
    const COLUMNS: &'static [&'static str] = &["code", "description", "price", "category_id"];

    fn bind_columns<'args>(&self, row: &mut RowValues<'_, 'args>) {
        row.push_bind(self.code.clone())
            .push_bind(self.description.clone())
            .push_bind(self.price)
            .push_bind(self.category_id);
    }

    async fn load_relation(
        pool: &SqlitePool,
        records: &mut [Self],
        relation: &str,
    ) -> AppResult<()> {
        if relation != RELATION_CATEGORY {
            return Err(unknown_relation::<Self>(relation));
        }

        let mut ids: Vec<i64> = records.iter().map(|p| p.category_id).collect();
        ids.sort_unstable();
        ids.dedup();
        let condition = Condition::new().and(FilterField::in_list("id", ids));
        let categories: Vec<Category> = select_where(pool, &condition, &[], None).await?;

        let by_id: HashMap<i64, Category> = categories.into_iter().map(|c| (c.id, c)).collect();
        for product in records.iter_mut() {
            product.category = by_id.get(&product.category_id).cloned();
        }
        Ok(())
    }
}
