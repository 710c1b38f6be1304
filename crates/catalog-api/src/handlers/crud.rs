//! Generic CRUD handlers for any [`ResourceService`].
//!
//! The five standard routes share one implementation; a resource only
//! supplies its service type and base path.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::routing::{get, post};

use catalog_core::traits::Entity;
use catalog_core::types::PageResponse;
use catalog_service::{CreateRequestOf, Mapper, ResourceService, ResponseOf, UpdateRequestOf};

use crate::dto::MessageResponse;
use crate::error::ApiError;
use crate::extractors::{PaginationParams, Payload, RequestCtx, ResourceId};
use crate::state::AppState;

/// Display name of the entity behind `S`.
fn resource_name<S: ResourceService>() -> &'static str {
    <<S::Mapper as Mapper>::Entity as Entity>::RESOURCE_NAME
}

/// Registers `POST base`, `GET base`, `GET base/{id}`, `PUT base/{id}`
/// and `DELETE base/{id}` for `S`.
pub fn crud_routes<S>(base: &str) -> Router<AppState>
where
    S: ResourceService,
    Arc<S>: FromRef<AppState>,
{
    let item = format!("{base}/{{id}}");
    Router::new()
        .route(base, post(create::<S>).get(list::<S>))
        .route(
            &item,
            get(get_one::<S>).put(update::<S>).delete(remove::<S>),
        )
}

/// POST {base}
pub async fn create<S: ResourceService>(
    State(service): State<Arc<S>>,
    RequestCtx(ctx): RequestCtx,
    Payload(request): Payload<CreateRequestOf<S>>,
) -> Result<(StatusCode, Json<ResponseOf<S>>), ApiError> {
    let created = service.create(&ctx, request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET {base}
pub async fn list<S: ResourceService>(
    State(service): State<Arc<S>>,
    RequestCtx(ctx): RequestCtx,
    params: PaginationParams,
) -> Result<Json<PageResponse<ResponseOf<S>>>, ApiError> {
    let page = service.get_all(&ctx, params.page, params.page_size).await?;
    Ok(Json(page))
}

/// GET {base}/{id}
pub async fn get_one<S: ResourceService>(
    State(service): State<Arc<S>>,
    RequestCtx(ctx): RequestCtx,
    ResourceId(id): ResourceId,
) -> Result<Json<ResponseOf<S>>, ApiError> {
    Ok(Json(service.get_by_id(&ctx, id).await?))
}

/// PUT {base}/{id}
pub async fn update<S: ResourceService>(
    State(service): State<Arc<S>>,
    RequestCtx(ctx): RequestCtx,
    ResourceId(id): ResourceId,
    Payload(request): Payload<UpdateRequestOf<S>>,
) -> Result<Json<ResponseOf<S>>, ApiError> {
    Ok(Json(service.update(&ctx, id, request).await?))
}

/// DELETE {base}/{id}
pub async fn remove<S: ResourceService>(
    State(service): State<Arc<S>>,
    RequestCtx(ctx): RequestCtx,
    ResourceId(id): ResourceId,
) -> Result<Json<MessageResponse>, ApiError> {
    service.delete(&ctx, id).await?;
    Ok(Json(MessageResponse::new(format!(
        "{} deleted successfully",
        resource_name::<S>()
    ))))
}
