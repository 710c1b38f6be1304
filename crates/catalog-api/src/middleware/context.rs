//! Installs the per-request [`RequestContext`].

use std::time::Duration;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use catalog_core::context::RequestContext;

use super::request_id::REQUEST_ID_HEADER;
use crate::state::AppState;

/// Builds the request context from the `x-request-id` header and the
/// configured timeout, and stores it in the request extensions.
///
/// The context's token is cancelled if the request future is dropped
/// before the response is produced.
pub async fn request_context(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);
    let ctx = RequestContext::new()
        .with_request_id(request_id)
        .with_timeout(timeout);

    let guard = ctx.cancellation_token().clone().drop_guard();
    request.extensions_mut().insert(ctx);

    let response = next.run(request).await;
    let _ = guard.disarm();
    response
}
