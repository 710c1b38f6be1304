//! Query and paging types shared by repositories, services, and handlers.

pub mod filter;
pub mod pagination;
pub mod sorting;

pub use filter::{Condition, FilterField, FilterOp, FilterValue};
pub use pagination::{PageRequest, PageResponse};
pub use sorting::{SortDirection, SortField};
