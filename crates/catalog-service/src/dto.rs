//! Shared helpers for request and response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Timestamp layout used in every response body.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a stored timestamp for a response body.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Deserialize an optional patch field, treating the type's zero value
/// (`""`, `0`, `0.0`) the same as an absent field.
pub fn omit_empty<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default + PartialEq,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.filter(|v| *v != T::default()))
}
