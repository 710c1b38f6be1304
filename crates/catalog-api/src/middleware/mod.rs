//! Axum middleware stack.

pub mod context;
pub mod cors;
pub mod logging;
pub mod recovery;
pub mod request_id;
