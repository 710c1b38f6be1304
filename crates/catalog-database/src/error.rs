//! Mapping of sqlx errors into [`AppError`].

use catalog_core::error::{AppError, ErrorKind};

/// Build a `map_err` adapter for storage failures.
///
/// Storage errors are never classified for the caller, including a unique
/// index rejecting a row that raced past the business pre-check; the
/// message only notes the constraint for the logs.
pub fn storage_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |err| {
        let message = match err {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                format!("{context}: unique constraint violated")
            }
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                format!("{context}: foreign key constraint violated")
            }
            _ => context.to_string(),
        };
        AppError::with_source(ErrorKind::Database, message, err)
    }
}
