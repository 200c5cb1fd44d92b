//! Authentication service - registration, login and token verification.
//!
//! Registration is the unauthenticated create path; it shares the onboarding
//! workflow with the authenticated create endpoint but skips the RBAC gate.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::employee_service::onboard;
use super::identity::{Claims, IdentityProvider, TokenResponse};
use crate::domain::{CreateEmployee, EmployeeResponse, Password};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Verified when the document number is unknown, so both login failures cost
/// one hash computation.
static DUMMY_PASSWORD: Lazy<Option<Password>> =
    Lazy::new(|| Password::new("dummy-password-for-timing").ok());

/// Token plus the public projection of the authenticated employee
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: TokenResponse,
    pub employee: EmployeeResponse,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new employee without an authenticated caller
    async fn register(&self, input: CreateEmployee) -> AppResult<AuthResponse>;

    /// Exchange document number and password for a token
    async fn login(&self, doc_number: &str, password: &str) -> AppResult<AuthResponse>;

    /// Verify a bearer token and extract its claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    identity: Arc<dyn IdentityProvider>,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self { uow, identity }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(&self, input: CreateEmployee) -> AppResult<AuthResponse> {
        onboard(
            self.uow.employees().as_ref(),
            self.identity.as_ref(),
            input,
            None,
        )
        .await
    }

    async fn login(&self, doc_number: &str, password: &str) -> AppResult<AuthResponse> {
        let employee = self
            .uow
            .employees()
            .find_by_doc_number(doc_number.trim())
            .await?;

        let verified = match &employee {
            Some(employee) => Password::from_hash(employee.password_hash().to_string()).verify(password),
            None => {
                if let Some(dummy) = DUMMY_PASSWORD.as_ref() {
                    dummy.verify(password);
                }
                false
            }
        };

        let Some(employee) = employee.filter(|_| verified) else {
            tracing::info!("Rejected login attempt");
            return Err(AppError::InvalidCredentials);
        };

        let token = self.identity.issue(&employee)?;
        tracing::info!(employee_id = %employee.id(), "Employee logged in");

        Ok(AuthResponse {
            token,
            employee: employee.into(),
        })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        self.identity.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Employee, NewEmployee, Role};
    use crate::infra::{MockEmployeeRepository, RepositoryScope};
    use crate::services::JwtIdentity;
    use chrono::NaiveDate;

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

    fn stored(password: &str) -> Employee {
        Employee::new(NewEmployee {
            first_name: "Rui".into(),
            last_name: "Lima".into(),
            email: "rui@example.com".into(),
            doc_number: "4242".into(),
            birth_date: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
            role: Role::Director,
            password_hash: Password::new(password).unwrap().into_string(),
            manager_id: None,
        })
        .unwrap()
    }

    fn authenticator(repo: MockEmployeeRepository) -> Authenticator<RepositoryScope> {
        Authenticator::new(
            Arc::new(RepositoryScope::new(Arc::new(repo))),
            Arc::new(JwtIdentity::new(SECRET, "iss", "aud", 1)),
        )
    }

    #[tokio::test]
    async fn login_issues_token_with_stored_role() {
        let employee = stored("Admin@123");
        let id = employee.id();
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_doc_number()
            .withf(|doc| doc == "4242")
            .returning(move |_| Ok(Some(employee.clone())));

        let auth = authenticator(repo);
        let response = auth.login("4242", "Admin@123").await.unwrap();

        assert_eq!(response.employee.id, id);
        let claims = auth.verify_token(&response.token.access_token).unwrap();
        assert_eq!(claims.sub, id);
        assert_eq!(claims.role(), Role::Director);
    }

    #[tokio::test]
    async fn login_trims_document_number() {
        let employee = stored("Admin@123");
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_doc_number()
            .withf(|doc| doc == "4242")
            .times(1)
            .returning(move |_| Ok(Some(employee.clone())));

        let response = authenticator(repo).login(" 4242 ", "Admin@123").await;

        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_document_fail_alike() {
        let employee = stored("Admin@123");
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_doc_number()
            .returning(move |doc| Ok((doc == "4242").then(|| employee.clone())));

        let auth = authenticator(repo);

        let wrong = auth.login("4242", "Wrong@123").await.unwrap_err();
        let unknown = auth.login("0000", "Admin@123").await.unwrap_err();

        assert!(matches!(wrong, AppError::InvalidCredentials));
        assert!(matches!(unknown, AppError::InvalidCredentials));
        assert_eq!(wrong.to_string(), unknown.to_string());
    }

    #[test]
    fn garbage_token_is_rejected() {
        let auth = authenticator(MockEmployeeRepository::new());
        assert!(auth.verify_token("not.a.token").is_err());
    }
}
