//! Domain layer - Core business entities and logic
//!
//! The employee aggregate with its phones, the role ladder and the RBAC
//! predicates built on it. Nothing here touches storage or HTTP.

pub mod employee;
mod error;
pub mod guard;
pub mod password;
pub mod phone;
pub mod rbac;
pub mod role;

pub use employee::{
    CreateEmployee, Employee, EmployeeParts, EmployeeResponse, NewEmployee, UpdateEmployee,
};
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use phone::{Phone, PhoneInput, PhoneResponse, PhoneType};
pub use rbac::{can_create, can_edit, Caller};
pub use role::Role;
