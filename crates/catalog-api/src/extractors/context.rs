//! Per-request context extractor.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use catalog_core::context::RequestContext;

/// The [`RequestContext`] installed by the request context middleware.
///
/// Falls back to a fresh context when the middleware is not mounted.
#[derive(Debug, Clone)]
pub struct RequestCtx(pub RequestContext);

impl<S> FromRequestParts<S> for RequestCtx
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ctx = parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_default();
        Ok(Self(ctx))
    }
}
