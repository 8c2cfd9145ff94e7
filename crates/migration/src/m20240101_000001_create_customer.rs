//! Create `customer` table.
//!
//! Single entity of the service; the id is assigned by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(big_integer(Customer::Id).primary_key().auto_increment())
                    .col(string_len(Customer::Name, 128).not_null())
                    .col(integer(Customer::Age).not_null())
                    .col(string_len(Customer::MobileNumber, 32).not_null())
                    .col(string_len(Customer::EmailAddress, 255).not_null())
                    .col(string_len(Customer::Address, 255).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Customer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Customer { Table, Id, Name, Age, MobileNumber, EmailAddress, Address }
