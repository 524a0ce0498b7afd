use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cake::Table)
                    .if_not_exists()
                    .col(pk_auto(Cake::Id))
                    .col(string_len(Cake::Name, 100).not_null())
                    .col(string_len(Cake::Flavor, 50).not_null())
                    .col(double(Cake::Price).not_null())
                    .col(boolean(Cake::Available).not_null().default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Cake::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Cake {
    Table,
    Id,
    Name,
    Flavor,
    Price,
    Available,
}
