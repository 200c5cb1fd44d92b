//! Repository layer - Data access abstraction
//!
//! Repositories hide SeaORM behind a trait so services can be exercised
//! against mocks or in-memory stores.

pub(crate) mod entities;
mod employee_repository;

pub use employee_repository::{EmployeeRepository, EmployeeStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use employee_repository::MockEmployeeRepository;
