//! Association management between cakes and bakeries. Links are
//! existence-only; add and remove are both idempotent, but both endpoints
//! must exist.

use models::cake_bakery;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::errors::ServiceError;
use crate::{bakeries, cakes};

pub async fn link_exists(
    db: &DatabaseConnection,
    cake_id: i32,
    bakery_id: i32,
) -> Result<bool, ServiceError> {
    Ok(cake_bakery::Entity::find_by_id((cake_id, bakery_id))
        .one(db)
        .await?
        .is_some())
}

/// No-op when the pair is already linked.
pub async fn add_link(
    db: &DatabaseConnection,
    cake_id: i32,
    bakery_id: i32,
) -> Result<(), ServiceError> {
    cakes::get_cake(db, cake_id).await?;
    bakeries::get_bakery(db, bakery_id).await?;
    if !link_exists(db, cake_id, bakery_id).await? {
        let am = cake_bakery::ActiveModel {
            cake_id: Set(cake_id),
            bakery_id: Set(bakery_id),
        };
        am.insert(db).await?;
    }
    Ok(())
}

/// No-op when the pair is not linked.
pub async fn remove_link(
    db: &DatabaseConnection,
    cake_id: i32,
    bakery_id: i32,
) -> Result<(), ServiceError> {
    cakes::get_cake(db, cake_id).await?;
    bakeries::get_bakery(db, bakery_id).await?;
    cake_bakery::Entity::delete_by_id((cake_id, bakery_id))
        .exec(db)
        .await?;
    Ok(())
}
