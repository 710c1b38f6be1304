//! # catalog-entity
//!
//! Domain entity models for the product catalog. Each entity maps to a
//! table and implements [`catalog_core::traits::Entity`].

pub mod category;
pub mod product;

pub use category::Category;
pub use product::Product;
