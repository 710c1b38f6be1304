//! Conversion between request DTOs, entities and response DTOs.

use serde::Serialize;
use serde::de::DeserializeOwned;

use catalog_database::Record;

use crate::validation::ShapeRules;

/// Per-resource conversions consumed by [`CrudService`](crate::crud::CrudService).
pub trait Mapper: Send + Sync + 'static {
    /// Stored entity.
    type Entity: Record;
    /// Body of a create request.
    type CreateRequest: ShapeRules + DeserializeOwned + Send + Sync + 'static;
    /// Body of an update request; every field is optional.
    type UpdateRequest: ShapeRules + DeserializeOwned + Send + Sync + 'static;
    /// Body returned to the caller.
    type Response: Serialize + Send + Sync + 'static;

    /// Build a not yet stored entity from a create request.
    fn to_entity(&self, request: Self::CreateRequest) -> Self::Entity;

    /// Render an entity, including any relations that were loaded.
    fn to_response(&self, entity: &Self::Entity) -> Self::Response;

    /// Copy the fields present in `request` onto `entity`.
    fn apply_update(&self, entity: &mut Self::Entity, request: Self::UpdateRequest);
}
