use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdressEntity::Table)
                    .if_not_exists()
                    .col(big_integer(AdressEntity::Id).auto_increment().primary_key())
                    .col(string_null(AdressEntity::City))
                    .col(string_null(AdressEntity::Street))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdressEntity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AdressEntity {
    Table,
    Id,
    City,
    Street,
}
