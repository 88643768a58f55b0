use sea_orm_migration::{prelude::*, schema::*};

use crate::m20200101_000001_create_authority_table::Authority;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(big_integer(User::Id).auto_increment().primary_key())
                    .col(ColumnDef::new(User::Login).string_len(50).not_null().unique_key())
                    .col(ColumnDef::new(User::PasswordHash).string_len(60).not_null())
                    .col(string_null(User::Email))
                    .col(boolean(User::Activated).default(false))
                    .col(
                        timestamp_with_time_zone(User::CreatedDate)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Join table between users and their granted authorities
        manager
            .create_table(
                Table::create()
                    .table(UserAuthority::Table)
                    .if_not_exists()
                    .col(big_integer(UserAuthority::UserId))
                    .col(ColumnDef::new(UserAuthority::AuthorityName).string_len(50).not_null())
                    .primary_key(
                        Index::create()
                            .col(UserAuthority::UserId)
                            .col(UserAuthority::AuthorityName),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user-authority-user")
                            .from(UserAuthority::Table, UserAuthority::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user-authority-authority")
                            .from(UserAuthority::Table, UserAuthority::AuthorityName)
                            .to(Authority::Table, Authority::Name)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserAuthority::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum User {
    #[sea_orm(iden = "jhi_user")]
    Table,
    Id,
    Login,
    PasswordHash,
    Email,
    Activated,
    CreatedDate,
}

#[derive(DeriveIden)]
pub(crate) enum UserAuthority {
    #[sea_orm(iden = "jhi_user_authority")]
    Table,
    UserId,
    AuthorityName,
}
