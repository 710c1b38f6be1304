//! Category entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use catalog_core::traits::Entity;

use crate::product::Product;

/// A product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Storage-assigned identifier (`0` until stored).
    pub id: i64,
    /// Unique category name.
    pub name: String,
    /// Free-form description (may be empty).
    pub description: String,
    /// Whether products may be assigned to this category.
    pub active: bool,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
    /// When the category was last updated.
    pub updated_at: DateTime<Utc>,
    /// Products in this category; populated only when eager-loaded.
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<Product>,
}

impl Category {
    /// Build a category that has not been stored yet.
    pub fn new(name: impl Into<String>, description: impl Into<String>, active: bool) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
            active,
            created_at: now,
            updated_at: now,
            products: Vec::new(),
        }
    }
}

impl Entity for Category {
    const TABLE: &'static str = "categories";
    const RESOURCE_NAME: &'static str = "Category";

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_is_not_persisted() {
        let category = Category::new("Bebidas", "", true);
        assert_eq!(category.id, 0);
        assert!(!category.is_persisted());
        assert_eq!(category.created_at, category.updated_at);
        assert!(category.products.is_empty());
    }

    #[test]
    fn test_unloaded_products_are_not_serialized() {
        let category = Category::new("Bebidas", "Refrigerantes", true);
        let json = serde_json::to_value(&category).expect("serialize");
        assert!(json.get("products").is_none());
        assert_eq!(json["name"], "Bebidas");
    }
}
