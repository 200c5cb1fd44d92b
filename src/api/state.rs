//! Application state - services and infrastructure shared by handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, HealthCheck, Persistence};
use crate::services::{AuthService, EmployeeService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Employee lifecycle service
    pub employee_service: Arc<dyn EmployeeService>,
    /// Storage probe for the health endpoint
    pub health: Arc<dyn HealthCheck>,
}

impl AppState {
    /// Wire database-backed services using the given config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let uow = Arc::new(Persistence::new(database.get_connection()));
        let container = Services::from_config(uow, config);

        Self::from_container(&container, database)
    }

    /// Take services from any container.
    pub fn from_container(container: &dyn ServiceContainer, health: Arc<dyn HealthCheck>) -> Self {
        Self {
            auth_service: container.auth(),
            employee_service: container.employees(),
            health,
        }
    }

    /// Create application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        employee_service: Arc<dyn EmployeeService>,
        health: Arc<dyn HealthCheck>,
    ) -> Self {
        Self {
            auth_service,
            employee_service,
            health,
        }
    }
}
