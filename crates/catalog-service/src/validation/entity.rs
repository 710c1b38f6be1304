//! Business validation strategy.

use async_trait::async_trait;

use catalog_core::result::AppResult;

use super::context::ValidationContext;
use super::result::ValidationResult;

/// Entity- and operation-specific rules for `E`, created from `C` and
/// patched with `U`.
///
/// Checks run in a fixed order and return on the first failure. An `Err`
/// means a check could not be carried out (storage failure, cancellation)
/// and is propagated as is. Every method passes by default.
#[async_trait]
pub trait EntityValidator<E, C, U>: Send + Sync
where
    E: Send + Sync,
    C: Send + Sync,
    U: Send + Sync,
{
    /// Rules for a create request.
    async fn validate_create(
        &self,
        _ctx: &ValidationContext<'_>,
        _request: &C,
    ) -> AppResult<ValidationResult> {
        Ok(ValidationResult::new())
    }

    /// Rules for an update, given the stored entity.
    async fn validate_update(
        &self,
        _ctx: &ValidationContext<'_>,
        _existing: &E,
        _request: &U,
    ) -> AppResult<ValidationResult> {
        Ok(ValidationResult::new())
    }

    /// Rules for removing the stored entity.
    async fn validate_delete(
        &self,
        _ctx: &ValidationContext<'_>,
        _existing: &E,
    ) -> AppResult<ValidationResult> {
        Ok(ValidationResult::new())
    }
}

/// Validator for resources without business rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpValidator;

impl<E, C, U> EntityValidator<E, C, U> for NoOpValidator
where
    E: Send + Sync,
    C: Send + Sync,
    U: Send + Sync,
{
}
