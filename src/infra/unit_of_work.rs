//! Unit of Work - centralized repository access.
//!
//! Services depend on this trait rather than on concrete stores. The employee
//! aggregate is the only one, so each repository write is its own atomic unit
//! (see `EmployeeStore`).

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{EmployeeRepository, EmployeeStore};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Get employee repository
    fn employees(&self) -> Arc<dyn EmployeeRepository>;
}

/// Database-backed implementation of UnitOfWork
pub struct Persistence {
    employee_repo: Arc<EmployeeStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            employee_repo: Arc::new(EmployeeStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn employees(&self) -> Arc<dyn EmployeeRepository> {
        self.employee_repo.clone()
    }
}

/// Unit of Work over an arbitrary repository (in-memory stores, mocks).
pub struct RepositoryScope {
    employees: Arc<dyn EmployeeRepository>,
}

impl RepositoryScope {
    pub fn new(employees: Arc<dyn EmployeeRepository>) -> Self {
        Self { employees }
    }
}

impl UnitOfWork for RepositoryScope {
    fn employees(&self) -> Arc<dyn EmployeeRepository> {
        self.employees.clone()
    }
}
