use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cake")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub flavor: String,
    pub price: f64,
    pub available: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::bakery::Entity> for Entity {
    fn to() -> RelationDef {
        super::cake_bakery::Relation::Bakery.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::cake_bakery::Relation::Cake.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
