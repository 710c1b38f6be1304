//! Pagination query parameter extractor.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

/// Raw query values; anything non-numeric is treated as absent.
#[derive(Debug, Default, Deserialize)]
struct RawPagination {
    page: Option<String>,
    page_size: Option<String>,
}

/// Query parameters for paginated endpoints.
///
/// Values are passed through unnormalized; `0` stands for "use the
/// default" and the service clamps the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationParams {
    /// Requested page (1-based).
    pub page: i64,
    /// Requested page size.
    pub page_size: i64,
}

fn lenient(value: Option<&str>) -> i64 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

impl<S> FromRequestParts<S> for PaginationParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = Query::<RawPagination>::try_from_uri(&parts.uri)
            .map(|Query(raw)| raw)
            .unwrap_or_default();
        Ok(Self {
            page: lenient(raw.page.as_deref()),
            page_size: lenient(raw.page_size.as_deref()),
        })
    }
}
