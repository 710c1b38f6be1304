//! Generic CRUD service: validation pipeline, mapping and persistence for
//! any resource described by a [`Mapper`].

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use catalog_core::config::PaginationConfig;
use catalog_core::context::RequestContext;
use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_core::traits::Entity;
use catalog_core::types::{PageRequest, PageResponse, SortField};
use catalog_database::Repository;

use crate::mapper::Mapper;
use crate::validation::{
    EntityValidator, NoOpValidator, Operation, ValidationContext, ValidationResult,
    validate_shape,
};

/// Business validator object for the resource handled by `M`.
pub type ValidatorFor<M> = Arc<
    dyn EntityValidator<
            <M as Mapper>::Entity,
            <M as Mapper>::CreateRequest,
            <M as Mapper>::UpdateRequest,
        >,
>;

/// CRUD use cases for one resource.
///
/// Every mutating call runs: shape validation, business validation,
/// mapping, persistence, mapping to the response. Failures of the two
/// validation stages are logged at `warn`; storage failures are logged in
/// full and returned unchanged so the HTTP layer can answer generically.
pub struct CrudService<M: Mapper> {
    repo: Arc<Repository<M::Entity>>,
    mapper: M,
    validator: ValidatorFor<M>,
    pagination: PaginationConfig,
    list_order: Vec<SortField>,
}

impl<M: Mapper> CrudService<M> {
    /// Create a service with no business rules.
    pub fn new(repo: Repository<M::Entity>, mapper: M, pagination: PaginationConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            mapper,
            validator: Arc::new(NoOpValidator),
            pagination,
            list_order: Vec::new(),
        }
    }

    /// Use `validator` for the business stage.
    pub fn with_validator<V>(mut self, validator: V) -> Self
    where
        V: EntityValidator<M::Entity, M::CreateRequest, M::UpdateRequest> + 'static,
    {
        self.validator = Arc::new(validator);
        self
    }

    /// Order used by [`CrudService::get_all`]; empty defers to the
    /// repository default.
    pub fn with_list_order(mut self, order: Vec<SortField>) -> Self {
        self.list_order = order;
        self
    }

    /// The underlying repository.
    pub fn repository(&self) -> &Repository<M::Entity> {
        &self.repo
    }

    /// The resource mapper.
    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    /// Clamp raw paging input to the configured limits.
    pub fn normalize_page(&self, page: i64, page_size: i64) -> PageRequest {
        PageRequest::normalize(page, page_size, &self.pagination)
    }

    /// Render a page of entities into the list envelope.
    pub fn map_page(
        &self,
        records: &[M::Entity],
        page: &PageRequest,
        total: u64,
    ) -> PageResponse<M::Response> {
        let data = records.iter().map(|e| self.mapper.to_response(e)).collect();
        PageResponse::new(data, page, total)
    }

    /// Validate, store and return a new entity with its default relations.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        request: M::CreateRequest,
    ) -> AppResult<M::Response> {
        let name = M::Entity::RESOURCE_NAME;
        debug!(entity = name, request_id = %ctx.request_id, "Create request received");

        checked(validate_shape(&request), name, Operation::Create, "shape")?;
        let verdict = self
            .validator
            .validate_create(&ValidationContext::create(ctx), &request)
            .await
            .map_err(|e| self.surface(e, "create"))?;
        checked(verdict, name, Operation::Create, "business")?;

        let draft = self.mapper.to_entity(request);
        let mut created = self
            .repo
            .create(ctx, &draft)
            .await
            .map_err(|e| self.surface(e, "create"))?;
        self.repo
            .load_relations(ctx, std::slice::from_mut(&mut created), self.repo.preloads())
            .await
            .map_err(|e| self.surface(e, "create"))?;

        info!(entity = name, id = created.id(), request_id = %ctx.request_id, "Entity created");
        Ok(self.mapper.to_response(&created))
    }

    /// Fetch one entity with its default relations.
    pub async fn get_by_id(&self, ctx: &RequestContext, id: i64) -> AppResult<M::Response> {
        let entity = self.fetch(ctx, id).await?;
        Ok(self.mapper.to_response(&entity))
    }

    /// One page of entities. Out-of-range paging input is clamped.
    pub async fn get_all(
        &self,
        ctx: &RequestContext,
        page: i64,
        page_size: i64,
    ) -> AppResult<PageResponse<M::Response>> {
        let page = self.normalize_page(page, page_size);
        debug!(
            entity = M::Entity::RESOURCE_NAME,
            page = page.page,
            page_size = page.page_size,
            "Listing entities"
        );

        let (records, total) = self
            .repo
            .find_all(ctx, &page, &self.list_order)
            .await
            .map_err(|e| self.surface(e, "list"))?;
        Ok(self.map_page(&records, &page, total))
    }

    /// Apply the fields present in `request` to entity `id`.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        request: M::UpdateRequest,
    ) -> AppResult<M::Response> {
        let name = M::Entity::RESOURCE_NAME;
        debug!(entity = name, id, request_id = %ctx.request_id, "Update request received");

        let mut entity = self.fetch(ctx, id).await?;

        checked(validate_shape(&request), name, Operation::Update, "shape")?;
        let verdict = self
            .validator
            .validate_update(&ValidationContext::update(ctx, id), &entity, &request)
            .await
            .map_err(|e| self.surface(e, "update"))?;
        checked(verdict, name, Operation::Update, "business")?;

        self.mapper.apply_update(&mut entity, request);
        let mut updated = self
            .repo
            .update(ctx, &entity)
            .await
            .map_err(|e| self.surface(e, "update"))?;
        self.repo
            .load_relations(ctx, std::slice::from_mut(&mut updated), self.repo.preloads())
            .await
            .map_err(|e| self.surface(e, "update"))?;

        info!(entity = name, id, request_id = %ctx.request_id, "Entity updated");
        Ok(self.mapper.to_response(&updated))
    }

    /// Remove entity `id` once its delete rules pass.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        let name = M::Entity::RESOURCE_NAME;
        let entity = self.fetch(ctx, id).await?;

        let verdict = self
            .validator
            .validate_delete(&ValidationContext::delete(ctx, id), &entity)
            .await
            .map_err(|e| self.surface(e, "delete"))?;
        checked(verdict, name, Operation::Delete, "business")?;

        self.repo
            .delete(ctx, id)
            .await
            .map_err(|e| self.not_found_or(e, "delete"))?;

        info!(entity = name, id, request_id = %ctx.request_id, "Entity deleted");
        Ok(())
    }

    /// Fetch entity `id`; a missing row becomes "<Resource> not found".
    pub async fn fetch(&self, ctx: &RequestContext, id: i64) -> AppResult<M::Entity> {
        self.repo
            .find_by_id(ctx, id)
            .await
            .map_err(|e| self.not_found_or(e, "fetch"))
    }

    pub(crate) fn not_found_or(&self, err: AppError, action: &'static str) -> AppError {
        if err.is_not_found() {
            return not_found::<M::Entity>();
        }
        self.surface(err, action)
    }

    pub(crate) fn surface(&self, err: AppError, action: &'static str) -> AppError {
        if !err.kind.is_classified() {
            error!(
                entity = M::Entity::RESOURCE_NAME,
                action,
                error = %err,
                source = ?err.source,
                "Storage operation failed"
            );
        }
        err
    }
}

/// Classified "<Resource> not found" error for `E`.
pub fn not_found<E: Entity>() -> AppError {
    AppError::not_found(format!("{} not found", E::RESOURCE_NAME))
}

fn checked(
    result: ValidationResult,
    entity: &'static str,
    operation: Operation,
    stage: &'static str,
) -> AppResult<()> {
    if result.has_errors() {
        warn!(
            entity,
            %operation,
            stage,
            fields = ?result.errors().keys().collect::<Vec<_>>(),
            "Validation failed"
        );
    }
    result.into_result()
}
