//! `SeaORM` Entity, postal address

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "adress_entity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub city: Option<String>,
    pub street: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
