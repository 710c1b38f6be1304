//! Product entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use catalog_core::traits::Entity;

use crate::category::Category;

/// A sellable product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Storage-assigned identifier (`0` until stored).
    pub id: i64,
    /// Unique product code.
    pub code: String,
    /// Product description.
    pub description: String,
    /// Unit price, strictly positive.
    pub price: f64,
    /// Owning category.
    pub category_id: i64,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
    /// Owning category; populated only when eager-loaded.
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Product {
    /// Build a product that has not been stored yet.
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category_id: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            code: code.into(),
            description: description.into(),
            price,
            category_id,
            created_at: now,
            updated_at: now,
            category: None,
        }
    }
}

impl Entity for Product {
    const TABLE: &'static str = "products";
    const RESOURCE_NAME: &'static str = "Product";

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
