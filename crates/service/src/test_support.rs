#![cfg(test)]
use migration::MigratorTrait;
use models::{bakery, cake};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Fresh in-memory database per test, schema applied via the migrator.
/// The pool is capped at one connection so the memory database is shared
/// by every statement of the test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub async fn seed_cake(
    db: &DatabaseConnection,
    name: &str,
    flavor: &str,
    price: f64,
) -> Result<cake::Model, anyhow::Error> {
    let new = crate::validate::NewCake {
        name: name.into(),
        flavor: flavor.into(),
        price,
        available: true,
    };
    Ok(crate::cakes::create_cake(db, new).await?)
}

pub async fn seed_bakery(
    db: &DatabaseConnection,
    name: &str,
    location: &str,
    rating: i32,
) -> Result<bakery::Model, anyhow::Error> {
    let new = crate::validate::NewBakery {
        name: name.into(),
        location: location.into(),
        rating,
    };
    Ok(crate::bakeries::create_bakery(db, new).await?)
}
