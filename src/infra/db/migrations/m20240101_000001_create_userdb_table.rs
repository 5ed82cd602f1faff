//! Migration: create the `userdb` table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Userdb::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Userdb::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Userdb::Name).string().not_null())
                    .col(ColumnDef::new(Userdb::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Userdb::PasswordHash).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Userdb::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Userdb {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
}
