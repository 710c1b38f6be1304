//! Route handlers organized by resource.

pub mod category;
pub mod crud;
pub mod health;
pub mod product;
