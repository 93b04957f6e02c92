//! Create `item` table.
//!
//! `AUTOINCREMENT` keeps ids unique for the lifetime of the database, even after deletes.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .if_not_exists()
                    .col(pk_auto(Item::Id))
                    .col(string_len(Item::Name, 80).not_null())
                    .col(string_len(Item::Description, 200).not_null().default(""))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Item::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Item { Table, Id, Name, Description }
