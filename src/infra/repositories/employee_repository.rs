//! Employee repository: lookups and whole-aggregate writes.
//!
//! Every write persists the employee row and its phones inside one database
//! transaction. Uniqueness of email and document number is enforced by unique
//! indexes; a violation is reported as a conflict.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, LoaderTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};
use uuid::Uuid;

use super::entities::{employee, phone, EmployeeEntity, PhoneEntity};
use crate::domain::{Employee, EmployeeParts, Phone, PhoneType, Role};
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find employee by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>>;

    /// Find employee by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>>;

    /// Find employee by document number
    async fn find_by_doc_number(&self, doc_number: &str) -> AppResult<Option<Employee>>;

    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    async fn exists_by_doc_number(&self, doc_number: &str) -> AppResult<bool>;

    /// Insert a new employee together with its phones
    async fn add(&self, employee: &Employee) -> AppResult<()>;

    /// Overwrite an employee and replace its phone set
    async fn update(&self, employee: &Employee) -> AppResult<()>;

    /// Hard delete; phones go with it
    async fn delete(&self, employee: &Employee) -> AppResult<()>;

    /// List every employee
    async fn list(&self) -> AppResult<Vec<Employee>>;

    /// List one page of employees, ordered by creation time, with the total count
    async fn list_paginated(&self, params: &PaginationParams) -> AppResult<(Vec<Employee>, u64)>;
}

/// SeaORM-backed implementation of EmployeeRepository
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attach phones to a single loaded employee row
    async fn hydrate(&self, model: Option<employee::Model>) -> AppResult<Option<Employee>> {
        let Some(model) = model else {
            return Ok(None);
        };
        let phones = PhoneEntity::find()
            .filter(phone::Column::EmployeeId.eq(model.id))
            .all(&self.db)
            .await?;
        Ok(Some(to_domain(model, phones)))
    }

    /// Attach phones to many rows with one extra query
    async fn hydrate_all(&self, models: Vec<employee::Model>) -> AppResult<Vec<Employee>> {
        let phones = models.load_many(PhoneEntity, &self.db).await?;
        Ok(models
            .into_iter()
            .zip(phones)
            .map(|(model, phones)| to_domain(model, phones))
            .collect())
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>> {
        let model = EmployeeEntity::find_by_id(id).one(&self.db).await?;
        self.hydrate(model).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>> {
        let model = EmployeeEntity::find()
            .filter(employee::Column::Email.eq(email))
            .one(&self.db)
            .await?;
        self.hydrate(model).await
    }

    async fn find_by_doc_number(&self, doc_number: &str) -> AppResult<Option<Employee>> {
        let model = EmployeeEntity::find()
            .filter(employee::Column::DocNumber.eq(doc_number))
            .one(&self.db)
            .await?;
        self.hydrate(model).await
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let count = EmployeeEntity::find()
            .filter(employee::Column::Email.eq(email))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn exists_by_doc_number(&self, doc_number: &str) -> AppResult<bool> {
        let count = EmployeeEntity::find()
            .filter(employee::Column::DocNumber.eq(doc_number))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn add(&self, employee: &Employee) -> AppResult<()> {
        let txn = self.db.begin().await?;

        employee_row(employee)
            .insert(&txn)
            .await
            .map_err(write_error)?;
        insert_phones(&txn, employee).await?;

        txn.commit().await?;
        Ok(())
    }

    async fn update(&self, employee: &Employee) -> AppResult<()> {
        let txn = self.db.begin().await?;

        employee_row(employee).update(&txn).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => AppError::NotFound,
            other => write_error(other),
        })?;
        PhoneEntity::delete_many()
            .filter(phone::Column::EmployeeId.eq(employee.id()))
            .exec(&txn)
            .await?;
        insert_phones(&txn, employee).await?;

        txn.commit().await?;
        Ok(())
    }

    async fn delete(&self, employee: &Employee) -> AppResult<()> {
        let txn = self.db.begin().await?;

        let result = EmployeeEntity::delete_by_id(employee.id()).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        txn.commit().await?;
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .order_by_asc(employee::Column::CreatedAt)
            .all(&self.db)
            .await?;
        self.hydrate_all(models).await
    }

    async fn list_paginated(&self, params: &PaginationParams) -> AppResult<(Vec<Employee>, u64)> {
        let paginator = EmployeeEntity::find()
            .order_by_asc(employee::Column::CreatedAt)
            .paginate(&self.db, params.limit());
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(params.page_index()).await?;
        Ok((self.hydrate_all(models).await?, total))
    }
}

async fn insert_phones<C>(conn: &C, employee: &Employee) -> AppResult<()>
where
    C: sea_orm::ConnectionTrait,
{
    if employee.phones().is_empty() {
        return Ok(());
    }
    let rows = employee.phones().iter().map(|p| phone::ActiveModel {
        id: Set(p.id()),
        employee_id: Set(employee.id()),
        number: Set(p.number().to_string()),
        phone_type: Set(p.phone_type().to_string()),
    });
    PhoneEntity::insert_many(rows).exec(conn).await?;
    Ok(())
}

fn employee_row(employee: &Employee) -> employee::ActiveModel {
    employee::ActiveModel {
        id: Set(employee.id()),
        first_name: Set(employee.first_name().to_string()),
        last_name: Set(employee.last_name().to_string()),
        email: Set(employee.email().to_string()),
        doc_number: Set(employee.doc_number().to_string()),
        birth_date: Set(employee.birth_date()),
        role: Set(employee.role().to_string()),
        manager_id: Set(employee.manager_id()),
        password_hash: Set(employee.password_hash().to_string()),
        created_at: Set(employee.created_at()),
    }
}

/// Translate constraint violations into client errors
fn write_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!("Unique constraint violated: {}", detail);
            AppError::conflict("Employee")
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            tracing::debug!("Foreign key violated: {}", detail);
            AppError::validation("Manager does not exist")
        }
        _ => AppError::Database(err),
    }
}

/// Convert database rows to the domain aggregate
fn to_domain(model: employee::Model, phones: Vec<phone::Model>) -> Employee {
    Employee::from_parts(EmployeeParts {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        doc_number: model.doc_number,
        birth_date: model.birth_date,
        role: Role::parse_or_lowest(Some(&model.role)),
        manager_id: model.manager_id,
        phones: phones
            .into_iter()
            .map(|p| Phone::from_parts(p.id, p.number, PhoneType::from(p.phone_type.as_str())))
            .collect(),
        password_hash: model.password_hash,
        created_at: model.created_at,
    })
}
