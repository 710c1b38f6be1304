//! JSON body extractor with shape validation.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use catalog_core::error::AppError;
use catalog_service::validation::{ShapeRules, validate_shape};

use crate::error::ApiError;

/// A decoded request body that has passed its declarative field rules.
///
/// Undecodable bodies are rejected with 400 "Could not process request";
/// rule violations with 400 "Validation failed" plus field details.
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: ShapeRules + DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                debug!(reason = %rejection.body_text(), "Request body rejected");
                AppError::bad_request("Could not process request")
            })?;

        let shape = validate_shape(&value);
        if shape.has_errors() {
            warn!(errors = ?shape.errors(), "Request body failed validation");
        }
        shape.into_result()?;

        Ok(Self(value))
    }
}
