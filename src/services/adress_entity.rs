use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Set,
};
use tracing::{debug, info};

use crate::entities::{adress_entity, prelude::*};
use crate::error::AppResult;
use crate::pagination::{Page, PageRequest};
use crate::rest::types::AdressEntityDto;

#[derive(Clone)]
pub struct AdressEntityService {
    db: DatabaseConnection,
}

impl AdressEntityService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Properties a listing may be sorted by.
    pub fn sort_column(property: &str) -> Option<adress_entity::Column> {
        match property {
            "id" => Some(adress_entity::Column::Id),
            "city" => Some(adress_entity::Column::City),
            "street" => Some(adress_entity::Column::Street),
            _ => None,
        }
    }

    pub async fn find_all(&self, request: &PageRequest) -> AppResult<Page<adress_entity::Model>> {
        debug!("Request to get all AdressEntities: {:?}", request);

        let select = request.apply_sort(
            AdressEntity::find(),
            Self::sort_column,
            adress_entity::Column::Id,
        )?;

        let page = match request.paging {
            Some(paging) => {
                let paginator = select.paginate(&self.db, paging.size);
                let total = paginator.num_items().await?;
                let items = paginator.fetch_page(paging.page).await?;
                Page {
                    items,
                    total,
                    paging: Some(paging),
                }
            }
            None => {
                let items = select.all(&self.db).await?;
                Page {
                    total: items.len() as u64,
                    items,
                    paging: None,
                }
            }
        };

        Ok(page)
    }

    pub async fn find_one(&self, id: i64) -> Result<Option<adress_entity::Model>, DbErr> {
        debug!("Request to get AdressEntity {}", id);
        AdressEntity::find_by_id(id).one(&self.db).await
    }

    /// Inserts a new row; any id carried by `dto` is ignored.
    pub async fn create(&self, dto: &AdressEntityDto) -> Result<adress_entity::Model, DbErr> {
        let new_adress = adress_entity::ActiveModel {
            city: Set(dto.city.clone()),
            street: Set(dto.street.clone()),
            ..Default::default()
        };

        let created = new_adress.insert(&self.db).await?;
        info!("Created AdressEntity {}", created.id);
        Ok(created)
    }

    /// Replaces every field of row `id`. `None` when the row does not exist.
    pub async fn update(
        &self,
        id: i64,
        dto: &AdressEntityDto,
    ) -> Result<Option<adress_entity::Model>, DbErr> {
        let Some(existing) = self.find_one(id).await? else {
            return Ok(None);
        };

        let mut adress_active: adress_entity::ActiveModel = existing.into();
        adress_active.city = Set(dto.city.clone());
        adress_active.street = Set(dto.street.clone());

        let updated = adress_active.update(&self.db).await?;
        info!("Updated AdressEntity {}", updated.id);
        Ok(Some(updated))
    }

    /// Applies only the fields present in `dto`.
    pub async fn partial_update(
        &self,
        id: i64,
        dto: &AdressEntityDto,
    ) -> Result<Option<adress_entity::Model>, DbErr> {
        let Some(existing) = self.find_one(id).await? else {
            return Ok(None);
        };
        if dto.city.is_none() && dto.street.is_none() {
            return Ok(Some(existing));
        }

        let mut adress_active: adress_entity::ActiveModel = existing.into();
        if let Some(city) = &dto.city {
            adress_active.city = Set(Some(city.clone()));
        }
        if let Some(street) = &dto.street {
            adress_active.street = Set(Some(street.clone()));
        }

        let updated = adress_active.update(&self.db).await?;
        info!("Partially updated AdressEntity {}", updated.id);
        Ok(Some(updated))
    }

    /// Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> Result<bool, DbErr> {
        let result = AdressEntity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected > 0 {
            info!("Deleted AdressEntity {}", id);
        }
        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        AdressEntity::find().count(&self.db).await
    }
}
