//! Product conversions.

use catalog_entity::Product;

use super::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::category::CategoryMapper;
use crate::dto::format_timestamp;
use crate::mapper::Mapper;

/// Maps products to and from their wire representation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductMapper;

impl Mapper for ProductMapper {
    type Entity = Product;
    type CreateRequest = CreateProductRequest;
    type UpdateRequest = UpdateProductRequest;
    type Response = ProductResponse;

    fn to_entity(&self, request: CreateProductRequest) -> Product {
        Product::new(
            request.code,
            request.description,
            round_to_cents(request.price),
            request.category_id,
        )
    }

    fn to_response(&self, product: &Product) -> ProductResponse {
        ProductResponse {
            id: product.id,
            code: product.code.clone(),
            description: product.description.clone(),
            price: product.price,
            created_at: format_timestamp(&product.created_at),
            updated_at: format_timestamp(&product.updated_at),
            category_id: product.category_id,
            category: product
                .category
                .as_ref()
                .map(|c| CategoryMapper.to_response(c)),
        }
    }

    fn apply_update(&self, product: &mut Product, request: UpdateProductRequest) {
        if let Some(code) = request.code {
            product.code = code;
        }
        if let Some(description) = request.description {
            product.description = description;
        }
        if let Some(price) = request.price {
            product.price = round_to_cents(price);
        }
        if let Some(category_id) = request.category_id {
            if category_id != product.category_id {
                product.category_id = category_id;
                product.category = None;
            }
        }
    }
}

/// Prices are stored with two decimal places.
fn round_to_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}
