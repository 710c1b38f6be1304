//! Outcome of a validation stage.

use catalog_core::error::{AppError, ErrorKind, FieldErrors};
use catalog_core::result::AppResult;

/// How a failed validation is classified once it leaves the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureKind {
    /// Field rules were broken; answered with the full field map.
    #[default]
    Invalid,
    /// A uniqueness rule was broken.
    Duplicate,
    /// Dependent records still reference the entity.
    HasRelations,
    /// The operation is not allowed for this entity.
    Forbidden,
}

/// Field name to message map produced by shape or business validation.
///
/// Empty means the stage passed. Only the first message recorded for a
/// field is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    kind: FailureKind,
    errors: FieldErrors,
}

impl ValidationResult {
    /// A passing result.
    pub fn new() -> Self {
        Self::default()
    }

    /// A result failing on one field.
    pub fn fail(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::classified(FailureKind::Invalid, field, message)
    }

    /// A uniqueness failure on one field.
    pub fn duplicate(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::classified(FailureKind::Duplicate, field, message)
    }

    /// A failure caused by dependent records.
    pub fn has_relations(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::classified(FailureKind::HasRelations, field, message)
    }

    /// A failure for an operation that is not allowed.
    pub fn forbidden(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::classified(FailureKind::Forbidden, field, message)
    }

    fn classified(kind: FailureKind, field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut result = Self {
            kind,
            errors: FieldErrors::new(),
        };
        result.add_error(field, message);
        result
    }

    /// Record a message for `field` unless it already has one.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_insert_with(|| message.into());
    }

    /// Whether any field failed.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The recorded field messages.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The classification of this result.
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// `Ok` when the result passed, otherwise the classified error.
    pub fn into_result(self) -> AppResult<()> {
        if !self.has_errors() {
            return Ok(());
        }

        let kind = match self.kind {
            FailureKind::Invalid => {
                return Err(AppError::validation("Validation failed", self.errors));
            }
            FailureKind::Duplicate => ErrorKind::Duplicate,
            FailureKind::HasRelations => ErrorKind::HasRelations,
            FailureKind::Forbidden => ErrorKind::Forbidden,
        };
        let message = self
            .errors
            .values()
            .next()
            .cloned()
            .unwrap_or_else(|| "Validation failed".to_string());
        Err(AppError::with_details(kind, message, self.errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_passes() {
        assert!(ValidationResult::new().into_result().is_ok());
    }

    #[test]
    fn test_first_message_per_field_wins() {
        let mut result = ValidationResult::fail("nome", "nome is required");
        result.add_error("nome", "nome must have at least 2 characters");
        assert_eq!(result.errors()["nome"], "nome is required");
    }

    #[test]
    fn test_invalid_becomes_validation_error_with_details() {
        let err = ValidationResult::fail("preco", "Price must be greater than zero")
            .into_result()
            .expect_err("fails");
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Validation failed");
        assert!(err.details.is_some_and(|d| d.contains_key("preco")));
    }

    #[test]
    fn test_duplicate_keeps_message_and_kind() {
        let err = ValidationResult::duplicate("codigo", "A product with this code already exists")
            .into_result()
            .expect_err("fails");
        assert_eq!(err.kind, ErrorKind::Duplicate);
        assert_eq!(err.message, "A product with this code already exists");
    }
}
