pub use sea_orm_migration::prelude::*;

mod m20200101_000001_create_authority_table;
mod m20200101_000002_create_user_tables;
mod m20200101_000003_create_adress_entity_table;
mod m20200101_000004_seed_admin_user;

pub use m20200101_000001_create_authority_table::DEFAULT_AUTHORITIES;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20200101_000001_create_authority_table::Migration),
            Box::new(m20200101_000002_create_user_tables::Migration),
            Box::new(m20200101_000003_create_adress_entity_table::Migration),
            Box::new(m20200101_000004_seed_admin_user::Migration),
        ]
    }
}
