//! Context handed to business validators.

use std::fmt;

use catalog_core::context::RequestContext;

/// The mutating operation being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// A new entity is being created.
    Create,
    /// An existing entity is being changed.
    Update,
    /// An existing entity is being removed.
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Operation kind, target id and the caller's request context.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    /// The operation being validated.
    pub operation: Operation,
    /// Target entity id; `None` on create.
    pub entity_id: Option<i64>,
    /// Request context to thread into repository calls.
    pub request: &'a RequestContext,
}

impl<'a> ValidationContext<'a> {
    /// Context for a create.
    pub fn create(request: &'a RequestContext) -> Self {
        Self {
            operation: Operation::Create,
            entity_id: None,
            request,
        }
    }

    /// Context for an update of `id`.
    pub fn update(request: &'a RequestContext, id: i64) -> Self {
        Self {
            operation: Operation::Update,
            entity_id: Some(id),
            request,
        }
    }

    /// Context for a delete of `id`.
    pub fn delete(request: &'a RequestContext, id: i64) -> Self {
        Self {
            operation: Operation::Delete,
            entity_id: Some(id),
            request,
        }
    }
}
