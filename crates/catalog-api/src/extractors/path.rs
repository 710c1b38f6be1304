//! Typed path parameter helpers.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use catalog_core::error::AppError;

use crate::error::ApiError;

/// Parses an entity id from a path segment.
///
/// Ids are unsigned and must fit the storage id range.
pub fn parse_id(s: &str) -> Result<i64, AppError> {
    s.parse::<u64>()
        .ok()
        .and_then(|id| i64::try_from(id).ok())
        .ok_or_else(|| AppError::bad_request("Invalid identifier"))
}

/// The single id segment of a resource route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceId(pub i64);

impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request("Invalid identifier"))?;
        Ok(Self(parse_id(&raw)?))
    }
}
