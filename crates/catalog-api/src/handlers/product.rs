//! Product routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use catalog_core::types::PageResponse;
use catalog_service::ProductService;
use catalog_service::product::ProductResponse;

use super::crud::crud_routes;
use crate::error::ApiError;
use crate::extractors::{PaginationParams, RequestCtx, ResourceId};
use crate::state::AppState;

/// Standard CRUD plus listing by category.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products/category/{categoria_id}", get(list_by_category))
        .merge(crud_routes::<ProductService>("/products"))
}

/// GET /products/category/{categoria_id}
pub async fn list_by_category(
    State(service): State<Arc<ProductService>>,
    RequestCtx(ctx): RequestCtx,
    ResourceId(category_id): ResourceId,
    params: PaginationParams,
) -> Result<Json<PageResponse<ProductResponse>>, ApiError> {
    let page = service
        .list_by_category(&ctx, category_id, params.page, params.page_size)
        .await?;
    Ok(Json(page))
}
