//! Infrastructure layer - External systems integration
//!
//! - Database connection and migrations
//! - Employee repository (SeaORM)
//! - Unit of Work for repository access

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, HealthCheck, Migrator};
pub use repositories::{EmployeeRepository, EmployeeStore};
pub use unit_of_work::{Persistence, RepositoryScope, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockEmployeeRepository;
