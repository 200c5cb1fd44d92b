//! Service container - wires repositories, identity and services together.

use std::sync::Arc;

use super::{AuthService, Authenticator, EmployeeManager, EmployeeService, IdentityProvider, JwtIdentity};
use crate::config::Config;
use crate::infra::UnitOfWork;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get employee lifecycle service
    fn employees(&self) -> Arc<dyn EmployeeService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    employee_service: Arc<dyn EmployeeService>,
}

impl Services {
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        employee_service: Arc<dyn EmployeeService>,
    ) -> Self {
        Self {
            auth_service,
            employee_service,
        }
    }

    /// Build every service over one unit of work and one identity provider
    pub fn with_identity<U>(uow: Arc<U>, identity: Arc<dyn IdentityProvider>) -> Self
    where
        U: UnitOfWork + 'static,
    {
        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone(), identity.clone())),
            employee_service: Arc::new(EmployeeManager::new(uow, identity)),
        }
    }

    /// Build services with JWT identity settings taken from config
    pub fn from_config<U>(uow: Arc<U>, config: &Config) -> Self
    where
        U: UnitOfWork + 'static,
    {
        Self::with_identity(uow, Arc::new(JwtIdentity::from_config(config)))
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn employees(&self) -> Arc<dyn EmployeeService> {
        self.employee_service.clone()
    }
}
