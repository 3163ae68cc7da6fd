//! The shared error taxonomy.
//!
//! Expected failures (invalid transition, not found, duplicate, validation)
//! are values, never panics: every fallible operation in the core returns
//! `CoreResult` and callers fold the failure into screen state.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A lifecycle transition was requested that the table does not allow.
    #[error("invalid transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    /// An operation required a completed initialization first.
    #[error("application has not been initialized")]
    NotInitialized,

    /// Input failed a business validation rule.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The addressed entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// An entity with the same identity already exists.
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// An unexpected fault, caught at a stream or collaborator boundary.
    #[error("internal fault: {0}")]
    Internal(String),
}

impl CoreError {
    /// True for the `NotFound` variant.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// True for the `AlreadyExists` variant.
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists(_))
    }

    /// True for the `Validation` variant.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
