//! Application services layer - use cases over the employee aggregate.
//!
//! Services depend on the `UnitOfWork` and `IdentityProvider` abstractions,
//! so storage and token mechanics can be swapped without touching the rules.

mod auth_service;
pub mod container;
mod employee_service;
mod identity;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthResponse, AuthService, Authenticator};
pub use employee_service::{EmployeeManager, EmployeeService};
pub use identity::{Claims, IdentityProvider, JwtIdentity, TokenResponse};

#[cfg(any(test, feature = "test-utils"))]
pub use identity::MockIdentityProvider;
