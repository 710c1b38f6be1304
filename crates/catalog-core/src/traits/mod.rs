//! Core traits defined in `catalog-core` and implemented by other crates.

pub mod entity;

pub use entity::Entity;
