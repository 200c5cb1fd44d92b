//! Shared fixtures for integration tests: an in-memory repository and
//! services wired over it.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use employee_directory::api::{create_router, AppState};
use employee_directory::domain::{CreateEmployee, Employee, PhoneInput, PhoneType, Role};
use employee_directory::errors::{AppError, AppResult};
use employee_directory::infra::{EmployeeRepository, HealthCheck, RepositoryScope};
use employee_directory::services::{JwtIdentity, ServiceContainer, Services};
use employee_directory::types::PaginationParams;

pub const JWT_SECRET: &[u8] = b"integration-test-secret-32-bytes!";
pub const ISSUER: &str = "employee-directory";
pub const AUDIENCE: &str = "employee-directory-clients";

/// Vec-backed repository enforcing the same unique keys as the database.
#[derive(Default)]
pub struct InMemoryEmployees {
    rows: Mutex<Vec<Employee>>,
}

impl InMemoryEmployees {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn find(&self, predicate: impl Fn(&Employee) -> bool) -> Option<Employee> {
        self.rows.lock().unwrap().iter().find(|e| predicate(e)).cloned()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployees {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>> {
        Ok(self.find(|e| e.id() == id))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>> {
        Ok(self.find(|e| e.email() == email))
    }

    async fn find_by_doc_number(&self, doc_number: &str) -> AppResult<Option<Employee>> {
        Ok(self.find(|e| e.doc_number() == doc_number))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self.find(|e| e.email() == email).is_some())
    }

    async fn exists_by_doc_number(&self, doc_number: &str) -> AppResult<bool> {
        Ok(self.find(|e| e.doc_number() == doc_number).is_some())
    }

    async fn add(&self, employee: &Employee) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|e| e.email() == employee.email() || e.doc_number() == employee.doc_number())
        {
            return Err(AppError::conflict("Employee"));
        }
        rows.push(employee.clone());
        Ok(())
    }

    async fn update(&self, employee: &Employee) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let slot = rows
            .iter_mut()
            .find(|e| e.id() == employee.id())
            .ok_or(AppError::NotFound)?;
        *slot = employee.clone();
        Ok(())
    }

    async fn delete(&self, employee: &Employee) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| e.id() != employee.id());
        if rows.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn list_paginated(&self, params: &PaginationParams) -> AppResult<(Vec<Employee>, u64)> {
        let rows = self.rows.lock().unwrap();
        let page = rows
            .iter()
            .skip(params.offset() as usize)
            .take(params.limit() as usize)
            .cloned()
            .collect();
        Ok((page, rows.len() as u64))
    }
}

/// Health probe that always succeeds
pub struct AlwaysHealthy;

#[async_trait]
impl HealthCheck for AlwaysHealthy {
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

pub fn identity() -> JwtIdentity {
    JwtIdentity::new(JWT_SECRET, ISSUER, AUDIENCE, 1)
}

/// Services over a fresh in-memory store
pub fn services() -> (Services, Arc<InMemoryEmployees>) {
    let store = Arc::new(InMemoryEmployees::default());
    let uow = Arc::new(RepositoryScope::new(store.clone()));
    (Services::with_identity(uow, Arc::new(identity())), store)
}

/// Router over a fresh in-memory store
pub fn app() -> (axum::Router, Arc<InMemoryEmployees>) {
    let (services, store) = services();
    let state = AppState::from_container(&services as &dyn ServiceContainer, Arc::new(AlwaysHealthy));
    (create_router(state), store)
}

pub fn create_request(doc_number: &str, role: Role) -> CreateEmployee {
    CreateEmployee {
        first_name: "Maria".into(),
        last_name: "Silva".into(),
        email: format!("{}@example.com", doc_number),
        doc_number: doc_number.into(),
        birth_date: NaiveDate::from_ymd_opt(1988, 9, 30).unwrap(),
        role,
        password: "Admin@123".into(),
        manager_id: None,
        phones: vec![PhoneInput {
            number: "+55 11 98888-7777".into(),
            phone_type: PhoneType::Mobile,
        }],
    }
}
