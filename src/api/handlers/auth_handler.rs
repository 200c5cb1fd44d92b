//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::CreateEmployee;
use crate::errors::AppResult;
use crate::services::AuthResponse;
use crate::types::Created;

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Document number the employee registered with
    #[validate(length(min = 1, max = 20, message = "Document number is required"))]
    #[schema(example = "12345678900")]
    pub doc_number: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new employee
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Authentication",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee registered", body = AuthResponse),
        (status = 400, description = "Validation or domain rule error"),
        (status = 409, description = "Email or document number already in use")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEmployee>,
) -> AppResult<Created<AuthResponse>> {
    let response = state.auth_service.register(payload).await?;
    Ok(Created(response))
}

/// Login with document number and password
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let response = state
        .auth_service
        .login(&payload.doc_number, &payload.password)
        .await?;

    Ok(Json(response))
}
