//! Employee lifecycle service - RBAC-gated create, update and delete.
//!
//! Every mutating operation loads one aggregate, applies its invariants in
//! memory and flushes it through a single repository write.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::auth_service::AuthResponse;
use super::identity::IdentityProvider;
use crate::domain::{
    can_create, can_edit, Caller, CreateEmployee, DomainResult, Employee, NewEmployee, Password,
    PhoneInput, UpdateEmployee,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{EmployeeRepository, UnitOfWork};
use crate::types::{Paginated, PaginationParams};

/// Employee service trait for dependency injection.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// One page of employees ordered by creation time
    async fn list_employees(&self, params: PaginationParams) -> AppResult<Paginated<Employee>>;

    async fn get_employee(&self, id: Uuid) -> AppResult<Employee>;

    /// Create an employee on behalf of an authenticated caller
    async fn create_employee(&self, input: CreateEmployee, caller: Caller) -> AppResult<AuthResponse>;

    async fn update_employee(
        &self,
        id: Uuid,
        input: UpdateEmployee,
        caller: Caller,
    ) -> AppResult<Employee>;

    /// Hard delete; phones are removed with the employee
    async fn delete_employee(&self, id: Uuid, caller: Caller) -> AppResult<()>;
}

/// Concrete implementation of EmployeeService using Unit of Work.
pub struct EmployeeManager<U: UnitOfWork> {
    uow: Arc<U>,
    identity: Arc<dyn IdentityProvider>,
}

impl<U: UnitOfWork> EmployeeManager<U> {
    pub fn new(uow: Arc<U>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self { uow, identity }
    }
}

#[async_trait]
impl<U: UnitOfWork> EmployeeService for EmployeeManager<U> {
    async fn list_employees(&self, params: PaginationParams) -> AppResult<Paginated<Employee>> {
        let (employees, total) = self.uow.employees().list_paginated(&params).await?;
        Ok(Paginated::new(employees, &params, total))
    }

    async fn get_employee(&self, id: Uuid) -> AppResult<Employee> {
        self.uow.employees().find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_employee(&self, input: CreateEmployee, caller: Caller) -> AppResult<AuthResponse> {
        onboard(
            self.uow.employees().as_ref(),
            self.identity.as_ref(),
            input,
            Some(&caller),
        )
        .await
    }

    async fn update_employee(
        &self,
        id: Uuid,
        input: UpdateEmployee,
        caller: Caller,
    ) -> AppResult<Employee> {
        let repo = self.uow.employees();
        let mut employee = repo.find_by_id(id).await?.ok_or_not_found()?;

        if !caller.owns(id) && !can_edit(caller.role, employee.role()) {
            tracing::warn!(
                caller_id = %caller.id,
                employee_id = %id,
                "Denied update of a more senior employee"
            );
            return Err(AppError::Forbidden);
        }

        employee.change_manager(input.manager_id)?;

        if let Some(new_role) = input.new_role {
            if can_create(caller.role, new_role) {
                employee.change_role(new_role);
            } else {
                tracing::warn!(
                    caller_id = %caller.id,
                    employee_id = %id,
                    requested_role = %new_role,
                    "Ignored role change above caller's rank"
                );
            }
        }

        employee.change_birth_date(input.birth_date)?;
        employee.change_names(&input.first_name, &input.last_name)?;

        let phones = input
            .phones
            .into_iter()
            .map(PhoneInput::into_phone)
            .collect::<DomainResult<Vec<_>>>()?;
        employee.reset_phones();
        for phone in phones {
            employee.add_phone(phone);
        }
        employee.ensure_at_least_one_phone()?;

        repo.update(&employee).await?;
        tracing::info!(employee_id = %id, caller_id = %caller.id, "Employee updated");

        Ok(employee)
    }

    async fn delete_employee(&self, id: Uuid, caller: Caller) -> AppResult<()> {
        let repo = self.uow.employees();
        let employee = repo.find_by_id(id).await?.ok_or_not_found()?;

        if !can_edit(caller.role, employee.role()) {
            tracing::warn!(
                caller_id = %caller.id,
                employee_id = %id,
                "Denied deletion of a more senior employee"
            );
            return Err(AppError::Forbidden);
        }

        repo.delete(&employee).await?;
        tracing::info!(employee_id = %id, caller_id = %caller.id, "Employee deleted");

        Ok(())
    }
}

/// Create, persist and issue a token for a new employee.
///
/// `caller` is `None` on the registration path, which has no RBAC gate.
pub(crate) async fn onboard(
    repo: &dyn EmployeeRepository,
    identity: &dyn IdentityProvider,
    input: CreateEmployee,
    caller: Option<&Caller>,
) -> AppResult<AuthResponse> {
    if let Some(caller) = caller {
        if !can_create(caller.role, input.role) {
            tracing::warn!(
                caller_id = %caller.id,
                requested_role = %input.role,
                "Denied creation of a more senior employee"
            );
            return Err(AppError::Forbidden);
        }
    }

    // Stored values are trimmed, so the pre-checks must be too
    if repo.exists_by_email(input.email.trim()).await? {
        return Err(AppError::conflict("Email"));
    }
    if repo.exists_by_doc_number(input.doc_number.trim()).await? {
        return Err(AppError::conflict("Document number"));
    }
    if input.phones.is_empty() {
        return Err(AppError::validation("At least one phone is required"));
    }

    let password_hash = Password::new(&input.password)?.into_string();
    let mut employee = Employee::new(NewEmployee {
        first_name: input.first_name,
        last_name: input.last_name,
        email: input.email,
        doc_number: input.doc_number,
        birth_date: input.birth_date,
        role: input.role,
        password_hash,
        manager_id: input.manager_id,
    })?;
    for phone in input.phones {
        employee.add_phone(phone.into_phone()?);
    }
    employee.ensure_at_least_one_phone()?;

    repo.add(&employee).await?;
    tracing::info!(
        employee_id = %employee.id(),
        role = %employee.role(),
        "Employee created"
    );

    let token = identity.issue(&employee)?;
    Ok(AuthResponse {
        token,
        employee: employee.into(),
    })
}
