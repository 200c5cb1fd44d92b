//! OpenAPI documentation configuration.
//!
//! Served through Swagger UI at `/swagger-ui`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, employee_handler};
use crate::domain::{
    CreateEmployee, EmployeeResponse, PhoneInput, PhoneResponse, PhoneType, Role, UpdateEmployee,
};
use crate::services::{AuthResponse, TokenResponse};
use crate::types::{PaginatedEmployees, PaginationMeta};

/// OpenAPI documentation for the employee directory
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Directory",
        version = "0.1.0",
        description = "Employee roster with a manager hierarchy and role-based access control",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        auth_handler::register,
        auth_handler::login,
        employee_handler::list_employees,
        employee_handler::get_current_employee,
        employee_handler::get_employee,
        employee_handler::create_employee,
        employee_handler::update_employee,
        employee_handler::delete_employee,
    ),
    components(
        schemas(
            Role,
            PhoneType,
            PhoneInput,
            PhoneResponse,
            CreateEmployee,
            UpdateEmployee,
            EmployeeResponse,
            PaginatedEmployees,
            PaginationMeta,
            auth_handler::LoginRequest,
            AuthResponse,
            TokenResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and login"),
        (name = "Employees", description = "Employee lifecycle under RBAC")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by /auth/login or /auth/register"))
                        .build(),
                ),
            );
        }
    }
}
