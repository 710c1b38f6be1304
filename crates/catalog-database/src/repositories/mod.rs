//! Generic repository and per-entity persistence contracts.

pub mod base;
pub mod category;
pub mod product;
pub mod record;

pub use base::Repository;
pub use category::CategoryRepository;
pub use product::ProductRepository;
pub use record::Record;
