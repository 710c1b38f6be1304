//! Category routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use catalog_service::CategoryService;
use catalog_service::category::{CategoryResponse, CategoryWithProductsResponse};

use super::crud::crud_routes;
use crate::error::ApiError;
use crate::extractors::{RequestCtx, ResourceId};
use crate::state::AppState;

/// Standard CRUD plus the category-specific reads.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories/active", get(list_active))
        .route("/categories/{id}/products", get(get_with_products))
        .merge(crud_routes::<CategoryService>("/categories"))
}

/// GET /categories/active
pub async fn list_active(
    State(service): State<Arc<CategoryService>>,
    RequestCtx(ctx): RequestCtx,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    Ok(Json(service.list_active(&ctx).await?))
}

/// GET /categories/{id}/products
pub async fn get_with_products(
    State(service): State<Arc<CategoryService>>,
    RequestCtx(ctx): RequestCtx,
    ResourceId(id): ResourceId,
) -> Result<Json<CategoryWithProductsResponse>, ApiError> {
    Ok(Json(service.get_with_products(&ctx, id).await?))
}
