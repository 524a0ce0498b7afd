use models::{bakery, cake_bakery};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
    TransactionTrait, TryIntoModel,
};
use tracing::debug;

use crate::errors::ServiceError;
use crate::validate::{BakeryPatch, NewBakery};

pub async fn get_bakery(db: &DatabaseConnection, id: i32) -> Result<bakery::Model, ServiceError> {
    bakery::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("bakery"))
}

pub async fn create_bakery(
    db: &DatabaseConnection,
    new: NewBakery,
) -> Result<bakery::Model, ServiceError> {
    let am = bakery::ActiveModel {
        name: Set(new.name),
        location: Set(new.location),
        rating: Set(new.rating),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Merge only the supplied fields into the stored record.
pub async fn update_bakery(
    db: &DatabaseConnection,
    id: i32,
    patch: BakeryPatch,
) -> Result<bakery::Model, ServiceError> {
    let mut am: bakery::ActiveModel = get_bakery(db, id).await?.into();
    if let Some(name) = patch.name {
        am.name = Set(name);
    }
    if let Some(location) = patch.location {
        am.location = Set(location);
    }
    if let Some(rating) = patch.rating {
        am.rating = Set(rating);
    }
    if !am.is_changed() {
        return Ok(am.try_into_model()?);
    }
    Ok(am.update(db).await?)
}

/// Remove the bakery and every cake link referencing it, atomically.
pub async fn delete_bakery(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let model = get_bakery(db, id).await?;
    let txn = db.begin().await?;
    cake_bakery::Entity::delete_many()
        .filter(cake_bakery::Column::BakeryId.eq(id))
        .exec(&txn)
        .await?;
    model.delete(&txn).await?;
    txn.commit().await?;
    debug!(bakery_id = id, "deleted bakery and its cake links");
    Ok(())
}

pub async fn list_bakeries(db: &DatabaseConnection) -> Result<Vec<bakery::Model>, ServiceError> {
    Ok(bakery::Entity::find().all(db).await?)
}
