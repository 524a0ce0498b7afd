use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bakery::Table)
                    .if_not_exists()
                    .col(pk_auto(Bakery::Id))
                    .col(string_len(Bakery::Name, 100).not_null())
                    .col(string_len(Bakery::Location, 50).not_null())
                    .col(integer(Bakery::Rating).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Bakery::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Bakery {
    Table,
    Id,
    Name,
    Location,
    Rating,
}
