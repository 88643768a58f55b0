use sea_orm_migration::prelude::*;

/// Authorities every installation starts with.
pub const DEFAULT_AUTHORITIES: [&str; 2] = ["ROLE_ADMIN", "ROLE_USER"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Authority::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Authority::Name)
                            .string_len(50)
                            .not_null()
                            .primary_key(),
                    )
                    .to_owned(),
            )
            .await?;

        let mut seed = Query::insert();
        seed.into_table(Authority::Table).columns([Authority::Name]);
        for name in DEFAULT_AUTHORITIES {
            seed.values_panic([name.into()]);
        }
        manager.exec_stmt(seed).await?;

        println!("🌱 Seeded authorities: {}", DEFAULT_AUTHORITIES.join(", "));
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Authority::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Authority {
    #[sea_orm(iden = "jhi_authority")]
    Table,
    Name,
}
