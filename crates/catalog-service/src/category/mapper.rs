//! Category conversions.

use catalog_entity::Category;

use super::dto::{
    CategoryResponse, CategoryWithProductsResponse, CreateCategoryRequest, ProductSummary,
    UpdateCategoryRequest,
};
use crate::dto::format_timestamp;
use crate::mapper::Mapper;

/// Maps categories to and from their wire representation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryMapper;

impl CategoryMapper {
    /// Render a category with its loaded products.
    pub fn to_response_with_products(&self, category: &Category) -> CategoryWithProductsResponse {
        CategoryWithProductsResponse {
            category: self.to_response(category),
            products: category
                .products
                .iter()
                .map(|p| ProductSummary {
                    id: p.id,
                    code: p.code.clone(),
                    description: p.description.clone(),
                    price: p.price,
                })
                .collect(),
        }
    }
}

impl Mapper for CategoryMapper {
    type Entity = Category;
    type CreateRequest = CreateCategoryRequest;
    type UpdateRequest = UpdateCategoryRequest;
    type Response = CategoryResponse;

    fn to_entity(&self, request: CreateCategoryRequest) -> Category {
        Category::new(
            request.name,
            request.description,
            request.active.unwrap_or(true),
        )
    }

    fn to_response(&self, category: &Category) -> CategoryResponse {
        CategoryResponse {
            id: category.id,
            name: category.name.clone(),
            description: category.description.clone(),
            active: category.active,
            created_at: format_timestamp(&category.created_at),
            updated_at: format_timestamp(&category.updated_at),
        }
    }

    fn apply_update(&self, category: &mut Category, request: UpdateCategoryRequest) {
        if let Some(name) = request.name {
            category.name = name;
        }
        if let Some(description) = request.description {
            category.description = description;
        }
        if let Some(active) = request.active {
            category.active = active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_defaults_to_true() {
        let category = CategoryMapper.to_entity(CreateCategoryRequest {
            name: "Bebidas".to_string(),
            ..Default::default()
        });
        assert!(category.active);
        assert_eq!(category.id, 0);
    }

    #[test]
    fn test_apply_update_only_touches_present_fields() {
        let mut category = Category::new("Bebidas", "Sucos", true);
        CategoryMapper.apply_update(
            &mut category,
            UpdateCategoryRequest {
                active: Some(false),
                ..Default::default()
            },
        );
        assert_eq!(category.name, "Bebidas");
        assert_eq!(category.description, "Sucos");
        assert!(!category.active);
    }

    #[test]
    fn test_response_uses_wire_names() {
        let category = Category::new("Bebidas", "Sucos", true);
        let json = serde_json::to_value(CategoryMapper.to_response_with_products(&category))
            .expect("serialize");
        assert_eq!(json["nome"], "Bebidas");
        assert_eq!(json["ativo"], true);
        assert!(json["produtos"].as_array().is_some_and(Vec::is_empty));
    }
}
