//! Category request and response bodies.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::omit_empty;
use crate::validation::{ShapeRules, not_blank};

/// Body of `POST /categories`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    /// Unique category name.
    #[serde(rename = "nome", default)]
    #[validate(custom(function = "not_blank"), length(min = 2, max = 100))]
    pub name: String,
    /// Free-form description.
    #[serde(rename = "descricao", default)]
    #[validate(length(max = 255))]
    pub description: String,
    /// Whether the category may be assigned; defaults to `true`.
    #[serde(rename = "ativo", default)]
    pub active: Option<bool>,
}

/// Body of `PUT /categories/{id}`. Empty strings leave a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    /// New name.
    #[serde(rename = "nome", default, deserialize_with = "omit_empty")]
    #[validate(custom(function = "not_blank"), length(min = 2, max = 100))]
    pub name: Option<String>,
    /// New description.
    #[serde(rename = "descricao", default, deserialize_with = "omit_empty")]
    #[validate(length(max = 255))]
    pub description: Option<String>,
    /// New active flag.
    #[serde(rename = "ativo", default)]
    pub active: Option<bool>,
}

fn category_wire_name(field: &str) -> &str {
    match field {
        "name" => "nome",
        "description" => "descricao",
        "active" => "ativo",
        other => other,
    }
}

impl ShapeRules for CreateCategoryRequest {
    fn wire_name(field: &str) -> &str {
        category_wire_name(field)
    }
}

impl ShapeRules for UpdateCategoryRequest {
    fn wire_name(field: &str) -> &str {
        category_wire_name(field)
    }
}

/// A category as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryResponse {
    /// Category id.
    pub id: i64,
    /// Name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Description.
    #[serde(rename = "descricao")]
    pub description: String,
    /// Active flag.
    #[serde(rename = "ativo")]
    pub active: bool,
    /// Creation time, `YYYY-MM-DD HH:MM:SS`.
    pub created_at: String,
    /// Last update time, `YYYY-MM-DD HH:MM:SS`.
    pub updated_at: String,
}

/// A product listed inside its category, without the nested category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSummary {
    /// Product id.
    pub id: i64,
    /// Product code.
    #[serde(rename = "codigo")]
    pub code: String,
    /// Product description.
    #[serde(rename = "descricao")]
    pub description: String,
    /// Unit price.
    #[serde(rename = "preco")]
    pub price: f64,
}

/// A category together with the products that reference it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryWithProductsResponse {
    /// The category itself.
    #[serde(flatten)]
    pub category: CategoryResponse,
    /// Products assigned to it.
    #[serde(rename = "produtos")]
    pub products: Vec<ProductSummary>,
}
