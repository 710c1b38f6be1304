//! Persistence contract binding an [`Entity`] to its table columns and relations.

use async_trait::async_trait;
use sqlx::query_builder::Separated;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Sqlite, SqlitePool};

use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_core::traits::Entity;

/// Separated value list used when binding a row for `INSERT`.
pub type RowValues<'qb, 'args> = Separated<'qb, 'args, Sqlite, &'static str>;

/// An entity the generic [`Repository`](super::Repository) can store.
///
/// `id`, `created_at` and `updated_at` are managed by the repository and
/// must not appear in [`Record::COLUMNS`].
#[async_trait]
pub trait Record: Entity + for<'r> FromRow<'r, SqliteRow> + Unpin {
    /// Writable columns, in the order [`Record::bind_columns`] binds them.
    const COLUMNS: &'static [&'static str];

    /// Bind one value per entry of [`Record::COLUMNS`].
    fn bind_columns<'args>(&self, row: &mut RowValues<'_, 'args>);

    /// Populate `relation` on every record with one batched query.
    async fn load_relation(
        pool: &SqlitePool,
        records: &mut [Self],
        relation: &str,
    ) -> AppResult<()>;
}

/// Error for a relation name the entity does not define.
pub fn unknown_relation<E: Entity>(relation: &str) -> AppError {
    AppError::internal(format!(
        "{} has no relation named '{relation}'",
        E::RESOURCE_NAME
    ))
}
