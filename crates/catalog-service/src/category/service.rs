//! Category use cases.

use tracing::info;

use catalog_core::config::PaginationConfig;
use catalog_core::context::RequestContext;
use catalog_core::result::AppResult;
use catalog_core::types::{Condition, PageRequest, SortField};
use catalog_database::DatabasePool;
use catalog_database::repositories::category::RELATION_PRODUCTS;
use catalog_database::repositories::{CategoryRepository, ProductRepository};

use super::dto::{CategoryResponse, CategoryWithProductsResponse};
use super::mapper::CategoryMapper;
use super::validator::CategoryValidator;
use crate::crud::CrudService;
use crate::mapper::Mapper;
use crate::resource::ResourceService;

/// Upper bound on the active-category listing.
const ACTIVE_LIST_LIMIT: u64 = 1000;

/// Category CRUD plus the category-specific reads.
pub struct CategoryService {
    crud: CrudService<CategoryMapper>,
}

impl CategoryService {
    /// Creates the category service over `db`.
    pub fn new(db: &DatabasePool, pagination: PaginationConfig) -> Self {
        let pool = db.pool().clone();
        let validator = CategoryValidator::new(
            CategoryRepository::categories(pool.clone()),
            ProductRepository::new(pool.clone()),
        );
        let crud = CrudService::new(CategoryRepository::categories(pool), CategoryMapper, pagination)
            .with_validator(validator);
        Self { crud }
    }

    /// A category with every product that references it.
    pub async fn get_with_products(
        &self,
        ctx: &RequestContext,
        id: i64,
    ) -> AppResult<CategoryWithProductsResponse> {
        info!(id, request_id = %ctx.request_id, "Fetching category with products");

        let category = self
            .crud
            .repository()
            .find_by_id_with_relations(ctx, id, &[RELATION_PRODUCTS])
            .await
            .map_err(|e| self.crud.not_found_or(e, "fetch"))?;
        Ok(self.crud.mapper().to_response_with_products(&category))
    }

    /// Every active category ordered by name.
    pub async fn list_active(&self, ctx: &RequestContext) -> AppResult<Vec<CategoryResponse>> {
        info!(request_id = %ctx.request_id, "Listing active categories");

        let (categories, _) = self
            .crud
            .repository()
            .find_all_where(
                ctx,
                &PageRequest::new(1, ACTIVE_LIST_LIMIT),
                &[SortField::asc("name")],
                &Condition::eq("active", true),
            )
            .await
            .map_err(|e| self.crud.surface(e, "list"))?;

        let mapper = self.crud.mapper();
        Ok(categories.iter().map(|c| mapper.to_response(c)).collect())
    }
}

impl ResourceService for CategoryService {
    type Mapper = CategoryMapper;

    fn crud(&self) -> &CrudService<CategoryMapper> {
        &self.crud
    }
}
