//! Request/response bodies owned by the HTTP layer.
//!
//! Resource bodies live with their services; these are the envelopes the
//! API adds on top.

pub mod response;

pub use response::{HealthResponse, MessageResponse};
