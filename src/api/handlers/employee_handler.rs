//! Employee handlers. Every route requires a bearer token.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Extension, Router,
};
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{CreateEmployee, EmployeeResponse, UpdateEmployee};
use crate::errors::AppResult;
use crate::services::AuthResponse;
use crate::types::{Created, NoContent, Paginated, PaginatedEmployees, PaginationParams};

/// Create employee routes
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route("/me", get(get_current_employee))
        .route(
            "/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

/// List employees, one page at a time
#[utoipa::path(
    get,
    path = "/employees",
    tag = "Employees",
    params(PaginationParams),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Page of employees", body = PaginatedEmployees),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_employees(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Paginated<EmployeeResponse>>> {
    let page = state.employee_service.list_employees(params).await?;
    Ok(Json(page.map(EmployeeResponse::from)))
}

/// Get the authenticated employee
#[utoipa::path(
    get,
    path = "/employees/me",
    tag = "Employees",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current employee", body = EmployeeResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Employee no longer exists")
    )
)]
pub async fn get_current_employee(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.employee_service.get_employee(current_user.id).await?;
    Ok(Json(employee.into()))
}

/// Get an employee by ID
#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "Employees",
    params(("id" = Uuid, Path, description = "Employee ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Employee found", body = EmployeeResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.employee_service.get_employee(id).await?;
    Ok(Json(employee.into()))
}

/// Create an employee at or below the caller's rank
#[utoipa::path(
    post,
    path = "/employees",
    tag = "Employees",
    request_body = CreateEmployee,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Employee created", body = AuthResponse),
        (status = 400, description = "Validation or domain rule error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Role above the caller's rank"),
        (status = 409, description = "Email or document number already in use")
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateEmployee>,
) -> AppResult<Created<AuthResponse>> {
    let response = state
        .employee_service
        .create_employee(payload, current_user.caller())
        .await?;
    Ok(Created(response))
}

/// Update an employee
#[utoipa::path(
    put,
    path = "/employees/{id}",
    tag = "Employees",
    params(("id" = Uuid, Path, description = "Employee ID")),
    request_body = UpdateEmployee,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Employee updated", body = EmployeeResponse),
        (status = 400, description = "Validation or domain rule error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Employee above the caller's rank"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateEmployee>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state
        .employee_service
        .update_employee(id, payload, current_user.caller())
        .await?;
    Ok(Json(employee.into()))
}

/// Delete an employee and its phones
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "Employees",
    params(("id" = Uuid, Path, description = "Employee ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Employee above the caller's rank"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state
        .employee_service
        .delete_employee(id, current_user.caller())
        .await?;
    Ok(NoContent)
}
