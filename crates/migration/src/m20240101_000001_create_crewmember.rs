//! Create `crewmember` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Crewmember::Table)
                    .if_not_exists()
                    .col(big_integer(Crewmember::Id).auto_increment().primary_key())
                    .col(string(Crewmember::Name).not_null())
                    .col(integer(Crewmember::Morale).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Crewmember::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Crewmember { Table, Id, Name, Morale }
