//! Employee aggregate root and related types.

use chrono::{DateTime, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::error::{DomainError, DomainResult};
use super::guard;
use super::phone::{Phone, PhoneInput, PhoneResponse};
use super::Role;
use crate::config::MIN_EMPLOYEE_AGE_YEARS;

/// Validated input for [`Employee::new`]
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub doc_number: String,
    pub birth_date: NaiveDate,
    pub role: Role,
    pub password_hash: String,
    pub manager_id: Option<Uuid>,
}

/// Stored state used to rebuild an employee from persistence
#[derive(Debug, Clone)]
pub struct EmployeeParts {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub doc_number: String,
    pub birth_date: NaiveDate,
    pub role: Role,
    pub manager_id: Option<Uuid>,
    pub phones: Vec<Phone>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Employee aggregate root.
///
/// Fields are private so every mutation goes through a method that
/// re-checks the invariant it can break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    doc_number: String,
    birth_date: NaiveDate,
    role: Role,
    manager_id: Option<Uuid>,
    phones: Vec<Phone>,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl Employee {
    /// Create a new employee, validating every field at once.
    ///
    /// Phones are attached afterwards with [`Employee::add_phone`]; call
    /// [`Employee::ensure_at_least_one_phone`] before persisting.
    pub fn new(input: NewEmployee) -> DomainResult<Self> {
        let first_name = guard::required(&input.first_name, "first_name")?;
        let last_name = guard::required(&input.last_name, "last_name")?;
        let email = guard::email(&input.email, "email")?;
        let doc_number = guard::required(&input.doc_number, "doc_number")?;
        let password_hash = guard::required(&input.password_hash, "password_hash")?;
        ensure_adult(input.birth_date, today())?;

        Ok(Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            email,
            doc_number,
            birth_date: input.birth_date,
            role: input.role,
            manager_id: input.manager_id,
            phones: Vec::new(),
            password_hash,
            created_at: Utc::now(),
        })
    }

    /// Rebuild a stored employee without re-running validation.
    pub fn from_parts(parts: EmployeeParts) -> Self {
        Self {
            id: parts.id,
            first_name: parts.first_name,
            last_name: parts.last_name,
            email: parts.email,
            doc_number: parts.doc_number,
            birth_date: parts.birth_date,
            role: parts.role,
            manager_id: parts.manager_id,
            phones: parts.phones,
            password_hash: parts.password_hash,
            created_at: parts.created_at,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn doc_number(&self) -> &str {
        &self.doc_number
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn manager_id(&self) -> Option<Uuid> {
        self.manager_id
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // =========================================================================
    // Behaviour
    // =========================================================================

    /// Replace the manager reference. The target is not checked for existence.
    pub fn change_manager(&mut self, manager_id: Option<Uuid>) -> DomainResult<()> {
        if manager_id == Some(self.id) {
            return Err(DomainError::SelfManagement);
        }
        self.manager_id = manager_id;
        Ok(())
    }

    /// Replace the role. Permission checks belong to the caller.
    pub fn change_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn change_birth_date(&mut self, birth_date: NaiveDate) -> DomainResult<()> {
        ensure_adult(birth_date, today())?;
        self.birth_date = birth_date;
        Ok(())
    }

    pub fn change_names(&mut self, first_name: &str, last_name: &str) -> DomainResult<()> {
        let first_name = guard::required(first_name, "first_name")?;
        let last_name = guard::required(last_name, "last_name")?;
        self.first_name = first_name;
        self.last_name = last_name;
        Ok(())
    }

    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    pub fn reset_phones(&mut self) {
        self.phones.clear();
    }

    pub fn ensure_at_least_one_phone(&self) -> DomainResult<()> {
        if self.phones.is_empty() {
            return Err(DomainError::MissingPhone);
        }
        Ok(())
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Fails unless someone born on `birth_date` is of age on `today`.
pub(crate) fn ensure_adult(birth_date: NaiveDate, today: NaiveDate) -> DomainResult<()> {
    let limit = today
        .checked_sub_months(Months::new(12 * MIN_EMPLOYEE_AGE_YEARS))
        .unwrap_or(NaiveDate::MIN);
    if birth_date > limit {
        return Err(DomainError::AgeViolation);
    }
    Ok(())
}

/// Employee creation payload, shared by registration and the
/// authenticated create endpoint.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateEmployee {
    #[validate(length(max = 100, message = "First name must be at most 100 characters"))]
    #[schema(example = "Ana")]
    pub first_name: String,
    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    #[schema(example = "Souza")]
    pub last_name: String,
    #[validate(length(max = 255, message = "Email must be at most 255 characters"))]
    #[schema(example = "ana.souza@example.com")]
    pub email: String,
    #[validate(length(max = 20, message = "Document number must be at most 20 characters"))]
    #[schema(example = "12345678900")]
    pub doc_number: String,
    #[schema(example = "1990-04-12")]
    pub birth_date: NaiveDate,
    #[schema(example = "employee")]
    pub role: Role,
    /// Plain-text password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
    pub manager_id: Option<Uuid>,
    #[validate(nested)]
    #[serde(default)]
    pub phones: Vec<PhoneInput>,
}

/// Employee update payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateEmployee {
    #[validate(length(max = 100, message = "First name must be at most 100 characters"))]
    #[schema(example = "Ana")]
    pub first_name: String,
    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    #[schema(example = "Souza")]
    pub last_name: String,
    #[schema(example = "1990-04-12")]
    pub birth_date: NaiveDate,
    /// New manager; `null` clears it
    pub manager_id: Option<Uuid>,
    /// Requested role; ignored when the caller may not assign it
    #[schema(example = "leader")]
    pub new_role: Option<Role>,
    /// Replaces every existing phone
    #[validate(nested)]
    #[serde(default)]
    pub phones: Vec<PhoneInput>,
}

/// Public projection of an employee (never includes the password hash)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmployeeResponse {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "Ana Souza")]
    pub full_name: String,
    #[schema(example = "ana.souza@example.com")]
    pub email: String,
    #[schema(example = "12345678900")]
    pub doc_number: String,
    #[schema(example = "employee")]
    pub role: Role,
    pub manager_id: Option<Uuid>,
    pub phones: Vec<PhoneResponse>,
}

impl From<&Employee> for EmployeeResponse {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            full_name: employee.full_name(),
            email: employee.email.clone(),
            doc_number: employee.doc_number.clone(),
            role: employee.role,
            manager_id: employee.manager_id,
            phones: employee.phones.iter().map(PhoneResponse::from).collect(),
        }
    }
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self::from(&employee)
    }
}
