//! Declarative request-shape validation on top of `validator`.
//!
//! Request DTOs derive [`Validate`]; [`validate_shape`] turns the raw
//! `validator` output into a [`ValidationResult`] keyed by wire field name,
//! with one message per field chosen by constraint code.

use serde_json::Value;
use validator::{Validate, ValidationError};

use super::result::ValidationResult;

/// A request DTO with declarative shape constraints.
pub trait ShapeRules: Validate {
    /// Map a struct field name to the name used on the wire.
    fn wire_name(field: &str) -> &str {
        field
    }
}

/// Run the declarative constraints of `request`. No storage access.
pub fn validate_shape<T: ShapeRules>(request: &T) -> ValidationResult {
    let mut result = ValidationResult::new();
    let Err(errors) = request.validate() else {
        return result;
    };

    for (field, field_errors) in errors.field_errors() {
        let field = field.to_string();
        let wire = T::wire_name(&field);
        let chosen = field_errors
            .iter()
            .find(|e| e.code == "required")
            .or_else(|| field_errors.first());
        if let Some(error) = chosen {
            result.add_error(wire, describe(wire, error));
        }
    }
    result
}

/// Custom rule: the string must contain something other than whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn describe(field: &str, error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    match error.code.as_ref() {
        "required" => format!("{field} is required"),
        "length" => describe_length(field, error),
        "range" => describe_range(field, error),
        _ => format!("{field} is invalid"),
    }
}

fn describe_length(field: &str, error: &ValidationError) -> String {
    let actual = error
        .params
        .get("value")
        .and_then(Value::as_str)
        .map(|s| s.chars().count() as f64);
    let min = error.params.get("min").and_then(Value::as_f64);
    let max = error.params.get("max").and_then(Value::as_f64);

    match (actual, min, max) {
        (Some(len), Some(min), _) if len < min => {
            format!("{field} must have at least {} characters", number(min))
        }
        (_, _, Some(max)) => format!("{field} must have at most {} characters", number(max)),
        (_, Some(min), None) => format!("{field} must have at least {} characters", number(min)),
        _ => format!("{field} is invalid"),
    }
}

fn describe_range(field: &str, error: &ValidationError) -> String {
    let actual = error.params.get("value").and_then(Value::as_f64);
    let bound = |name: &str| error.params.get(name).and_then(Value::as_f64);

    if let (Some(value), Some(limit)) = (actual, bound("exclusive_min")) {
        if value <= limit {
            return format!("{field} must be greater than {}", number(limit));
        }
    }
    if let (Some(value), Some(limit)) = (actual, bound("min")) {
        if value < limit {
            return format!("{field} must be greater than or equal to {}", number(limit));
        }
    }
    if let (Some(value), Some(limit)) = (actual, bound("exclusive_max")) {
        if value >= limit {
            return format!("{field} must be less than {}", number(limit));
        }
    }
    if let (Some(value), Some(limit)) = (actual, bound("max")) {
        if value > limit {
            return format!("{field} must be less than or equal to {}", number(limit));
        }
    }
    format!("{field} is invalid")
}

/// Render a bound without a trailing `.0` for whole numbers.
fn number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
