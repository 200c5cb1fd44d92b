//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models;
//! the conversions live in the employee repository.

pub mod employee;
pub mod phone;

pub use employee::Entity as EmployeeEntity;
pub use phone::Entity as PhoneEntity;
