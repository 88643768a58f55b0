use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};
use tracing::{debug, info};

use crate::entities::{authority, prelude::*};

#[derive(Clone)]
pub struct AuthorityService {
    db: DatabaseConnection,
}

impl AuthorityService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<authority::Model>, DbErr> {
        debug!("Request to get all Authorities");
        Authority::find()
            .order_by_asc(authority::Column::Name)
            .all(&self.db)
            .await
    }

    pub async fn find_one(&self, name: &str) -> Result<Option<authority::Model>, DbErr> {
        Authority::find_by_id(name.to_string()).one(&self.db).await
    }

    pub async fn exists(&self, name: &str) -> Result<bool, DbErr> {
        Ok(self.find_one(name).await?.is_some())
    }

    pub async fn create(&self, name: &str) -> Result<authority::Model, DbErr> {
        let created = authority::ActiveModel {
            name: Set(name.to_string()),
        }
        .insert(&self.db)
        .await?;

        info!("Created Authority {}", created.name);
        Ok(created)
    }

    /// Returns whether a row was removed. Grants of the authority go with it.
    pub async fn delete(&self, name: &str) -> Result<bool, DbErr> {
        let result = Authority::delete_by_id(name.to_string())
            .exec(&self.db)
            .await?;
        if result.rows_affected > 0 {
            info!("Deleted Authority {}", name);
        }
        Ok(result.rows_affected > 0)
    }
}
