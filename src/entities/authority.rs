//! `SeaORM` Entity, granted authority (role name)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "jhi_authority")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_authority::Entity")]
    UserAuthority,
}

impl Related<super::user_authority::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserAuthority.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_authority::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_authority::Relation::Authority.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
