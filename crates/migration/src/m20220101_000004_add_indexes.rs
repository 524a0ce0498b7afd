use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_cake_flavor")
                    .table(Cake::Table)
                    .col(Cake::Flavor)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_cake_price")
                    .table(Cake::Table)
                    .col(Cake::Price)
                    .to_owned(),
            )
            .await?;
        // Reverse lookups (cakes of a bakery) scan by bakery_id
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_cakes_bakeries_bakery")
                    .table(CakesBakeries::Table)
                    .col(CakesBakeries::BakeryId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_cake_flavor").table(Cake::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_cake_price").table(Cake::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_cakes_bakeries_bakery")
                    .table(CakesBakeries::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Cake {
    Table,
    Flavor,
    Price,
}

#[derive(DeriveIden)]
enum CakesBakeries {
    Table,
    BakeryId,
}
