//! Business rules for products.

use async_trait::async_trait;
use tracing::warn;

use catalog_core::context::RequestContext;
use catalog_core::result::AppResult;
use catalog_core::types::Condition;
use catalog_database::repositories::{CategoryRepository, ProductRepository};
use catalog_entity::Product;

use super::dto::{CreateProductRequest, UpdateProductRequest};
use crate::validation::{EntityValidator, ValidationContext, ValidationResult};

const MIN_DESCRIPTION_LENGTH: usize = 3;

/// Code uniqueness, price, description and category assignment rules.
///
/// Checks run in this order and stop at the first failure: code present,
/// code unique, price positive, description length, category present,
/// category exists, category active.
#[derive(Debug, Clone)]
pub struct ProductValidator {
    products: ProductRepository,
    categories: CategoryRepository,
}

impl ProductValidator {
    /// Create a validator over the given repositories.
    pub fn new(products: ProductRepository, categories: CategoryRepository) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// The category must exist and be active to take products.
    async fn check_category(
        &self,
        ctx: &RequestContext,
        category_id: i64,
    ) -> AppResult<ValidationResult> {
        let category = match self.categories.find_by_id(ctx, category_id).await {
            Ok(category) => category,
            Err(e) if e.is_not_found() => {
                warn!(category_id, "Product assigned to unknown category");
                return Ok(ValidationResult::fail("categoria_id", "Category not found"));
            }
            Err(e) => return Err(e),
        };

        if !category.active {
            warn!(category_id, "Product assigned to inactive category");
            return Ok(ValidationResult::fail(
                "categoria_id",
                "An inactive category cannot be used",
            ));
        }

        Ok(ValidationResult::new())
    }
}

fn price_error() -> ValidationResult {
    ValidationResult::fail("preco", "Price must be greater than zero")
}

fn description_error() -> ValidationResult {
    ValidationResult::fail("descricao", "Description must have at least 3 characters")
}

#[async_trait]
impl EntityValidator<Product, CreateProductRequest, UpdateProductRequest> for ProductValidator {
    async fn validate_create(
        &self,
        ctx: &ValidationContext<'_>,
        request: &CreateProductRequest,
    ) -> AppResult<ValidationResult> {
        if request.code.is_empty() {
            return Ok(ValidationResult::fail("codigo", "Product code is required"));
        }

        let by_code = Condition::eq("code", request.code.as_str());
        if self.products.exists_where(ctx.request, &by_code).await? {
            warn!(code = %request.code, "Product code already taken");
            return Ok(ValidationResult::duplicate(
                "codigo",
                "A product with this code already exists",
            ));
        }

        if request.price <= 0.0 {
            return Ok(price_error());
        }

        if request.description.chars().count() < MIN_DESCRIPTION_LENGTH {
            return Ok(description_error());
        }

        if request.category_id <= 0 {
            return Ok(ValidationResult::fail("categoria_id", "Category is required"));
        }

        self.check_category(ctx.request, request.category_id).await
    }

    async fn validate_update(
        &self,
        ctx: &ValidationContext<'_>,
        existing: &Product,
        request: &UpdateProductRequest,
    ) -> AppResult<ValidationResult> {
        if let Some(code) = request.code.as_deref().filter(|c| *c != existing.code) {
            let id = ctx.entity_id.unwrap_or(existing.id);
            let by_code = Condition::eq("code", code);
            if self
                .products
                .exists_where_excluding_id(ctx.request, id, &by_code)
                .await?
            {
                warn!(id, code, "Product code already taken by another product");
                return Ok(ValidationResult::duplicate(
                    "codigo",
                    "Another product with this code already exists",
                ));
            }
        }

        if request.price.is_some_and(|p| p <= 0.0) {
            return Ok(price_error());
        }

        if request
            .description
            .as_deref()
            .is_some_and(|d| d.chars().count() < MIN_DESCRIPTION_LENGTH)
        {
            return Ok(description_error());
        }

        match request.category_id {
            Some(category_id) if category_id != existing.category_id => {
                self.check_category(ctx.request, category_id).await
            }
            _ => Ok(ValidationResult::new()),
        }
    }
}
