//! Custom Axum extractors.

pub mod context;
pub mod pagination;
pub mod path;
pub mod payload;

pub use context::RequestCtx;
pub use pagination::PaginationParams;
pub use path::ResourceId;
pub use payload::Payload;
