//! Product use cases.

use tracing::info;

use catalog_core::config::PaginationConfig;
use catalog_core::context::RequestContext;
use catalog_core::result::AppResult;
use catalog_core::types::{Condition, PageResponse};
use catalog_database::DatabasePool;
use catalog_database::repositories::{CategoryRepository, ProductRepository};
use catalog_entity::Category;

use super::dto::ProductResponse;
use super::mapper::ProductMapper;
use super::validator::ProductValidator;
use crate::crud::{CrudService, not_found};
use crate::resource::ResourceService;

/// Product CRUD plus listing by category.
pub struct ProductService {
    crud: CrudService<ProductMapper>,
    categories: CategoryRepository,
}

impl ProductService {
    /// Creates the product service over `db`.
    pub fn new(db: &DatabasePool, pagination: PaginationConfig) -> Self {
        let pool = db.pool().clone();
        let categories = CategoryRepository::categories(pool.clone());
        let validator =
            ProductValidator::new(ProductRepository::products(pool.clone()), categories.clone());
        let crud = CrudService::new(ProductRepository::products(pool), ProductMapper, pagination)
            .with_validator(validator);
        Self { crud, categories }
    }

    /// One page of the products of `category_id`.
    pub async fn list_by_category(
        &self,
        ctx: &RequestContext,
        category_id: i64,
        page: i64,
        page_size: i64,
    ) -> AppResult<PageResponse<ProductResponse>> {
        info!(category_id, request_id = %ctx.request_id, "Listing products by category");

        if !self
            .categories
            .exists_by_id(ctx, category_id)
            .await
            .map_err(|e| self.crud.surface(e, "list"))?
        {
            return Err(not_found::<Category>());
        }

        let page = self.crud.normalize_page(page, page_size);
        let (products, total) = self
            .crud
            .repository()
            .find_all_where(ctx, &page, &[], &Condition::eq("category_id", category_id))
            .await
            .map_err(|e| self.crud.surface(e, "list"))?;
        Ok(self.crud.map_page(&products, &page, total))
    }
}

impl ResourceService for ProductService {
    type Mapper = ProductMapper;

    fn crud(&self) -> &CrudService<ProductMapper> {
        &self.crud
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{CategoryService, CreateCategoryRequest};
    use crate::product::{CreateProductRequest, UpdateProductRequest};
    use crate::test_support::memory_db;
    use crate::validation::{EntityValidator, FailureKind, ValidationContext};
    use catalog_core::error::ErrorKind;

    struct Fixture {
        db: DatabasePool,
        products: ProductService,
        category_id: i64,
    }

    async fn fixture() -> Fixture {
        let db = memory_db().await;
        let categories = CategoryService::new(&db, PaginationConfig::default());
        let category = categories
            .create(
                &RequestContext::new(),
                CreateCategoryRequest {
                    name: "Eletrônicos".to_string(),
                    ..Default::default()
                },
            )
            .await
            .expect("create category");
        let products = ProductService::new(&db, PaginationConfig::default());
        Fixture {
            db,
            products,
            category_id: category.id,
        }
    }

    fn request(code: &str, category_id: i64) -> CreateProductRequest {
        CreateProductRequest {
            code: code.to_string(),
            description: "Notebook".to_string(),
            price: 3599.90,
            category_id,
        }
    }

    #[tokio::test]
    async fn test_create_returns_nested_category() {
        let fx = fixture().await;
        let created = fx
            .products
            .create(&RequestContext::new(), request("PROD001", fx.category_id))
            .await
            .expect("create");
        assert_eq!(created.category_id, fx.category_id);
        assert_eq!(
            created.category.as_ref().map(|c| c.name.as_str()),
            Some("Eletrônicos")
        );
    }

    #[tokio::test]
    async fn test_duplicate_code_conflicts_regardless_of_other_fields() {
        let fx = fixture().await;
        let ctx = RequestContext::new();
        fx.products
            .create(&ctx, request("PROD001", fx.category_id))
            .await
            .expect("create");

        let err = fx
            .products
            .create(
                &ctx,
                CreateProductRequest {
                    description: "Something else".to_string(),
                    price: 10.0,
                    ..request("PROD001", fx.category_id)
                },
            )
            .await
            .expect_err("duplicate");
        assert_eq!(err.kind, ErrorKind::Duplicate);

        let page = fx.products.get_all(&ctx, 1, 10).await.expect("list");
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn test_business_checks_stop_at_first_failure() {
        let fx = fixture().await;
        let pool = fx.db.pool().clone();
        let validator = ProductValidator::new(
            ProductRepository::new(pool.clone()),
            CategoryRepository::categories(pool),
        );
        let ctx = RequestContext::new();

        let result = validator
            .validate_create(
                &ValidationContext::create(&ctx),
                &CreateProductRequest {
                    code: String::new(),
                    price: -1.0,
                    ..request("", fx.category_id)
                },
            )
            .await
            .expect("validate");
        assert_eq!(result.errors().len(), 1);
        assert!(result.errors().contains_key("codigo"));
        assert_eq!(result.kind(), FailureKind::Invalid);
    }

    #[tokio::test]
    async fn test_unknown_and_inactive_category_are_rejected() {
        let fx = fixture().await;
        let ctx = RequestContext::new();

        let err = fx
            .products
            .create(&ctx, request("PROD001", fx.category_id + 100))
            .await
            .expect_err("unknown category");
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(
            err.details.as_ref().and_then(|d| d.get("categoria_id")).map(String::as_str),
            Some("Category not found")
        );

        let categories = CategoryService::new(&fx.db, PaginationConfig::default());
        let inactive = categories
            .create(
                &ctx,
                CreateCategoryRequest {
                    name: "Antigos".to_string(),
                    active: Some(false),
                    ..Default::default()
                },
            )
            .await
            .expect("create inactive");
        let err = fx
            .products
            .create(&ctx, request("PROD002", inactive.id))
            .await
            .expect_err("inactive category");
        assert!(err.details.is_some_and(|d| d.contains_key("categoria_id")));
    }

    #[tokio::test]
    async fn test_partial_update_changes_only_price() {
        let fx = fixture().await;
        let ctx = RequestContext::new();
        let created = fx
            .products
            .create(&ctx, request("PROD001", fx.category_id))
            .await
            .expect("create");

        let updated = fx
            .products
            .update(
                &ctx,
                created.id,
                UpdateProductRequest {
                    price: Some(150.0),
                    ..Default::default()
                },
            )
            .await
            .expect("update");
        assert_eq!(updated.price, 150.0);
        assert_eq!(updated.code, "PROD001");
        assert_eq!(updated.description, "Notebook");
        assert_eq!(updated.category_id, fx.category_id);
        assert!(updated.category.is_some());
    }

    #[tokio::test]
    async fn test_list_by_category() {
        let fx = fixture().await;
        let ctx = RequestContext::new();
        for code in ["A", "B", "C"] {
            fx.products
                .create(&ctx, request(code, fx.category_id))
                .await
                .expect("create");
        }

        let page = fx
            .products
            .list_by_category(&ctx, fx.category_id, 1, 2)
            .await
            .expect("list");
        assert_eq!(page.total, 3);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.total_pages, 2);

        let err = fx
            .products
            .list_by_category(&ctx, fx.category_id + 100, 1, 10)
            .await
            .expect_err("unknown category");
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "Category not found");
    }
}
