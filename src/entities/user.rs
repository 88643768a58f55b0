//! `SeaORM` Entity, application user

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "jhi_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub login: String,
    pub password_hash: String,
    pub email: Option<String>,
    pub activated: bool,
    pub created_date: DateTimeWithTimeZone,
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

impl Related<super::authority::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_authority::Relation::Authority.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_authority::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
