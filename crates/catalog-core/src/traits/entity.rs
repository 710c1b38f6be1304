//! The contract every persisted entity fulfils.

use std::fmt::Debug;

use chrono::{DateTime, Utc};

/// A storable record with a storage-assigned identifier and audit timestamps.
///
/// Identifiers are assigned by storage on insert and never change. An
/// entity that has not been stored yet reports id `0`. Timestamps are set
/// by the repository only.
pub trait Entity: Debug + Clone + Send + Sync + 'static {
    /// Name of the backing table.
    const TABLE: &'static str;
    /// Human name used in messages ("Category", "Product").
    const RESOURCE_NAME: &'static str;

    /// The storage-assigned identifier.
    fn id(&self) -> i64;

    /// When the record was first stored.
    fn created_at(&self) -> DateTime<Utc>;

    /// When the record was last stored.
    fn updated_at(&self) -> DateTime<Utc>;

    /// Whether the record has been stored.
    fn is_persisted(&self) -> bool {
        self.id() > 0
    }
}
