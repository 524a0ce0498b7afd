use models::{cake, cake_bakery};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
    TransactionTrait, TryIntoModel,
};
use tracing::debug;

use crate::errors::ServiceError;
use crate::query::{self, CakeFilter, CakeListing};
use crate::validate::{CakePatch, NewCake};

pub async fn get_cake(db: &DatabaseConnection, id: i32) -> Result<cake::Model, ServiceError> {
    cake::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("cake"))
}

pub async fn create_cake(db: &DatabaseConnection, new: NewCake) -> Result<cake::Model, ServiceError> {
    let am = cake::ActiveModel {
        name: Set(new.name),
        flavor: Set(new.flavor),
        price: Set(new.price),
        available: Set(new.available),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Merge only the supplied fields into the stored record.
pub async fn update_cake(
    db: &DatabaseConnection,
    id: i32,
    patch: CakePatch,
) -> Result<cake::Model, ServiceError> {
    let mut am: cake::ActiveModel = get_cake(db, id).await?.into();
    if let Some(name) = patch.name {
        am.name = Set(name);
    }
    if let Some(flavor) = patch.flavor {
        am.flavor = Set(flavor);
    }
    if let Some(price) = patch.price {
        am.price = Set(price);
    }
    if let Some(available) = patch.available {
        am.available = Set(available);
    }
    if !am.is_changed() {
        return Ok(am.try_into_model()?);
    }
    Ok(am.update(db).await?)
}

/// Remove the cake and every bakery link referencing it, atomically.
pub async fn delete_cake(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let model = get_cake(db, id).await?;
    let txn = db.begin().await?;
    cake_bakery::Entity::delete_many()
        .filter(cake_bakery::Column::CakeId.eq(id))
        .exec(&txn)
        .await?;
    model.delete(&txn).await?;
    txn.commit().await?;
    debug!(cake_id = id, "deleted cake and its bakery links");
    Ok(())
}

pub async fn list_cakes(
    db: &DatabaseConnection,
    filter: &CakeFilter,
) -> Result<CakeListing, ServiceError> {
    query::run(db, cake::Entity::find(), filter).await
}

/// Cakes linked to the given bakery, with the same filter/pagination
/// semantics as the unscoped listing. 404s when the bakery itself is absent.
pub async fn list_cakes_by_bakery(
    db: &DatabaseConnection,
    bakery_id: i32,
    filter: &CakeFilter,
) -> Result<CakeListing, ServiceError> {
    let bakery = crate::bakeries::get_bakery(db, bakery_id).await?;
    query::run(db, bakery.find_related(cake::Entity), filter).await
}
