//! Migration: Create phones table owned by employees.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_employees_table::Employees;
use crate::config::MAX_PHONE_NUMBER_LENGTH;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Phones::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Phones::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Phones::EmployeeId).uuid().not_null())
                    .col(
                        ColumnDef::new(Phones::Number)
                            .string_len(MAX_PHONE_NUMBER_LENGTH)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Phones::PhoneType).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_phones_employee_id")
                            .from(Phones::Table, Phones::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_phones_employee_id")
                    .table(Phones::Table)
                    .col(Phones::EmployeeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Phones::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Phones {
    Table,
    Id,
    EmployeeId,
    Number,
    PhoneType,
}
