//! Business rules for categories.

use async_trait::async_trait;
use tracing::warn;

use catalog_core::result::AppResult;
use catalog_core::types::Condition;
use catalog_database::repositories::{CategoryRepository, ProductRepository};
use catalog_entity::Category;

use super::dto::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::validation::{EntityValidator, ValidationContext, ValidationResult};

const MIN_NAME_LENGTH: usize = 2;

/// Name presence, length and uniqueness; no deletion while referenced.
#[derive(Debug, Clone)]
pub struct CategoryValidator {
    categories: CategoryRepository,
    products: ProductRepository,
}

impl CategoryValidator {
    /// Create a validator over the given repositories.
    pub fn new(categories: CategoryRepository, products: ProductRepository) -> Self {
        Self {
            categories,
            products,
        }
    }
}

#[async_trait]
impl EntityValidator<Category, CreateCategoryRequest, UpdateCategoryRequest> for CategoryValidator {
    async fn validate_create(
        &self,
        ctx: &ValidationContext<'_>,
        request: &CreateCategoryRequest,
    ) -> AppResult<ValidationResult> {
        if request.name.is_empty() {
            return Ok(ValidationResult::fail("nome", "Category name is required"));
        }

        if request.name.chars().count() < MIN_NAME_LENGTH {
            return Ok(ValidationResult::fail(
                "nome",
                "Name must have at least 2 characters",
            ));
        }

        let by_name = Condition::eq("name", request.name.as_str());
        if self.categories.exists_where(ctx.request, &by_name).await? {
            warn!(name = %request.name, "Category name already taken");
            return Ok(ValidationResult::duplicate(
                "nome",
                "A category with this name already exists",
            ));
        }

        Ok(ValidationResult::new())
    }

    async fn validate_update(
        &self,
        ctx: &ValidationContext<'_>,
        existing: &Category,
        request: &UpdateCategoryRequest,
    ) -> AppResult<ValidationResult> {
        let Some(name) = request.name.as_deref().filter(|n| *n != existing.name) else {
            return Ok(ValidationResult::new());
        };

        if name.chars().count() < MIN_NAME_LENGTH {
            return Ok(ValidationResult::fail(
                "nome",
                "Name must have at least 2 characters",
            ));
        }

        let id = ctx.entity_id.unwrap_or(existing.id);
        let by_name = Condition::eq("name", name);
        if self
            .categories
            .exists_where_excluding_id(ctx.request, id, &by_name)
            .await?
        {
            warn!(id, name, "Category name already taken by another category");
            return Ok(ValidationResult::duplicate(
                "nome",
                "Another category with this name already exists",
            ));
        }

        Ok(ValidationResult::new())
    }

    async fn validate_delete(
        &self,
        ctx: &ValidationContext<'_>,
        existing: &Category,
    ) -> AppResult<ValidationResult> {
        let referencing = self
            .products
            .count_where(ctx.request, &Condition::eq("category_id", existing.id))
            .await?;

        if referencing > 0 {
            warn!(id = existing.id, referencing, "Category still has products");
            return Ok(ValidationResult::has_relations(
                "categoria",
                "Cannot delete a category that has products",
            ));
        }

        Ok(ValidationResult::new())
    }
}
