//! The service contract the generic HTTP handler is written against.

use async_trait::async_trait;

use catalog_core::context::RequestContext;
use catalog_core::result::AppResult;
use catalog_core::types::PageResponse;

use crate::crud::CrudService;
use crate::mapper::Mapper;

/// Create request body of resource service `S`.
pub type CreateRequestOf<S> = <<S as ResourceService>::Mapper as Mapper>::CreateRequest;
/// Update request body of resource service `S`.
pub type UpdateRequestOf<S> = <<S as ResourceService>::Mapper as Mapper>::UpdateRequest;
/// Response body of resource service `S`.
pub type ResponseOf<S> = <<S as ResourceService>::Mapper as Mapper>::Response;

/// A resource exposed through the standard five CRUD routes.
///
/// Every operation delegates to the embedded [`CrudService`]; a resource
/// overrides only the operations it needs to change.
#[async_trait]
pub trait ResourceService: Send + Sync + 'static {
    /// Conversions for this resource.
    type Mapper: Mapper;

    /// The embedded generic service.
    fn crud(&self) -> &CrudService<Self::Mapper>;

    /// Create an entity.
    async fn create(
        &self,
        ctx: &RequestContext,
        request: <Self::Mapper as Mapper>::CreateRequest,
    ) -> AppResult<<Self::Mapper as Mapper>::Response> {
        self.crud().create(ctx, request).await
    }

    /// Fetch one entity.
    async fn get_by_id(
        &self,
        ctx: &RequestContext,
        id: i64,
    ) -> AppResult<<Self::Mapper as Mapper>::Response> {
        self.crud().get_by_id(ctx, id).await
    }

    /// One page of entities.
    async fn get_all(
        &self,
        ctx: &RequestContext,
        page: i64,
        page_size: i64,
    ) -> AppResult<PageResponse<<Self::Mapper as Mapper>::Response>> {
        self.crud().get_all(ctx, page, page_size).await
    }

    /// Partially update an entity.
    async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        request: <Self::Mapper as Mapper>::UpdateRequest,
    ) -> AppResult<<Self::Mapper as Mapper>::Response> {
        self.crud().update(ctx, id, request).await
    }

    /// Delete an entity.
    async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        self.crud().delete(ctx, id).await
    }
}
