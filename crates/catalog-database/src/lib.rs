//! # catalog-database
//!
//! SQLite connection management, migrations, startup seed data, and the
//! generic entity repository used by every catalog resource.

pub mod connection;
pub mod error;
pub mod migration;
pub mod repositories;
pub mod seed;

pub use connection::DatabasePool;
pub use repositories::{Record, Repository};
