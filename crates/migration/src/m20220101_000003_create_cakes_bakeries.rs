use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CakesBakeries::Table)
                    .if_not_exists()
                    .col(integer(CakesBakeries::CakeId).not_null())
                    .col(integer(CakesBakeries::BakeryId).not_null())
                    .primary_key(
                        Index::create()
                            .col(CakesBakeries::CakeId)
                            .col(CakesBakeries::BakeryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cakes_bakeries_cake")
                            .from(CakesBakeries::Table, CakesBakeries::CakeId)
                            .to(Cake::Table, Cake::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cakes_bakeries_bakery")
                            .from(CakesBakeries::Table, CakesBakeries::BakeryId)
                            .to(Bakery::Table, Bakery::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CakesBakeries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CakesBakeries {
    Table,
    CakeId,
    BakeryId,
}

#[derive(DeriveIden)]
enum Cake { Table, Id }

#[derive(DeriveIden)]
enum Bakery { Table, Id }
