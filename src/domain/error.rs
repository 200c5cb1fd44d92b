//! Domain-level errors.
//!
//! These errors represent violated employee invariants. They are raised at the
//! point of violation and carried unchanged up to the HTTP boundary.

use thiserror::Error;

use crate::config::MIN_EMPLOYEE_AGE_YEARS;

/// Business rule violations on the employee aggregate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field failed a shape or presence check
    #[error("{0}")]
    Validation(String),

    #[error("Employee must be at least {} years old", MIN_EMPLOYEE_AGE_YEARS)]
    AgeViolation,

    #[error("Employee cannot be their own manager")]
    SelfManagement,

    #[error("Employee must have at least one phone")]
    MissingPhone,
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Stable error code exposed to clients
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation(_) => "VALIDATION_ERROR",
            DomainError::AgeViolation => "AGE_VIOLATION",
            DomainError::SelfManagement => "SELF_MANAGEMENT_VIOLATION",
            DomainError::MissingPhone => "MISSING_PHONE",
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
