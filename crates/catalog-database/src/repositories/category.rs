//! Category persistence: columns, the `products` relation, and the
//! name-ordered repository.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::SqlitePool;

use catalog_core::result::AppResult;
use catalog_core::types::{Condition, FilterField, SortField};
use catalog_entity::{Category, Product};

use super::base::{Repository, select_where};
use super::record::{Record, RowValues, unknown_relation};

/// Relation name for a category's products.
pub const RELATION_PRODUCTS: &str = "products";

/// Repository for categories.
pub type CategoryRepository = Repository<Category>;

impl Repository<Category> {
    /// Category repository listing by name.
    pub fn categories(pool: SqlitePool) -> Self {
        Self::new(pool).with_default_order(vec![SortField::asc("name")])
    }
}

#[async_trait]
impl Record for Category {
    const COLUMNS: &'static [&'static str] = &["name", "description", "active"];

    fn bind_columns<'args>(&self, row: &mut RowValues<'_, 'args>) {
        row.push_bind(self.name.clone())
            .push_bind(self.description.clone())
            .push_bind(self.active);
    }

    async fn load_relation(
        pool: &SqlitePool,
        records: &mut [Self],
        relation: &str,
    ) -> AppResult<()> {
        if relation != RELATION_PRODUCTS {
            return Err(unknown_relation::<Self>(relation));
        }

        let ids = records.iter().map(|c| c.id).collect();
        let condition = Condition::new().and(FilterField::in_list("category_id", ids));
        let products: Vec<Product> = select_where(pool, &condition, &[], None).await?;

        let mut by_category: HashMap<i64, Vec<Product>> = HashMap::new();
        for product in products {
            by_category.entry(product.category_id).or_default().push(product);
        }
        for category in records.iter_mut() {
            category.products = by_category.remove(&category.id).unwrap_or_default();
        }
        Ok(())
    }
}
