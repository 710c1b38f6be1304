//! Product request and response bodies.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::category::CategoryResponse;
use crate::dto::omit_empty;
use crate::validation::{ShapeRules, not_blank};

/// Body of `POST /products`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    /// Unique product code.
    #[serde(rename = "codigo", default)]
    #[validate(custom(function = "not_blank"), length(max = 50))]
    pub code: String,
    /// Description, at least three characters.
    #[serde(rename = "descricao", default)]
    #[validate(custom(function = "not_blank"), length(min = 3, max = 255))]
    pub description: String,
    /// Unit price, strictly positive.
    #[serde(rename = "preco", default)]
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    /// Owning category.
    #[serde(rename = "categoria_id", default)]
    #[validate(range(exclusive_min = 0))]
    pub category_id: i64,
}

/// Body of `PUT /products/{id}`. Empty strings and zeros leave a field
/// unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProductRequest {
    /// New code.
    #[serde(rename = "codigo", default, deserialize_with = "omit_empty")]
    #[validate(custom(function = "not_blank"), length(max = 50))]
    pub code: Option<String>,
    /// New description.
    #[serde(rename = "descricao", default, deserialize_with = "omit_empty")]
    #[validate(custom(function = "not_blank"), length(min = 3, max = 255))]
    pub description: Option<String>,
    /// New price.
    #[serde(rename = "preco", default, deserialize_with = "omit_empty")]
    #[validate(range(exclusive_min = 0.0))]
    pub price: Option<f64>,
    /// New category.
    #[serde(rename = "categoria_id", default, deserialize_with = "omit_empty")]
    #[validate(range(exclusive_min = 0))]
    pub category_id: Option<i64>,
}

fn product_wire_name(field: &str) -> &str {
    match field {
        "code" => "codigo",
        "description" => "descricao",
        "price" => "preco",
        "category_id" => "categoria_id",
        other => other,
    }
}

impl ShapeRules for CreateProductRequest {
    fn wire_name(field: &str) -> &str {
        product_wire_name(field)
    }
}

impl ShapeRules for UpdateProductRequest {
    fn wire_name(field: &str) -> &str {
        product_wire_name(field)
    }
}

/// A product as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductResponse {
    /// Product id.
    pub id: i64,
    /// Product code.
    #[serde(rename = "codigo")]
    pub code: String,
    /// Description.
    #[serde(rename = "descricao")]
    pub description: String,
    /// Unit price.
    #[serde(rename = "preco")]
    pub price: f64,
    /// Creation time, `YYYY-MM-DD HH:MM:SS`.
    pub created_at: String,
    /// Last update time, `YYYY-MM-DD HH:MM:SS`.
    pub updated_at: String,
    /// Owning category id.
    #[serde(rename = "categoria_id")]
    pub category_id: i64,
    /// Owning category, when loaded.
    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryResponse>,
}
