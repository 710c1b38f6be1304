//! Two-stage validation: declarative shape rules, then business rules.

pub mod context;
pub mod entity;
pub mod result;
pub mod shape;

pub use context::{Operation, ValidationContext};
pub use entity::{EntityValidator, NoOpValidator};
pub use result::{FailureKind, ValidationResult};
pub use shape::{ShapeRules, not_blank, validate_shape};
