use std::env;

use bcrypt::{hash, DEFAULT_COST};
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

use crate::m20200101_000001_create_authority_table::DEFAULT_AUTHORITIES;
use crate::m20200101_000002_create_user_tables::{User, UserAuthority};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Only seed admin user if environment variables are set
        let admin_login = match env::var("ADMIN_LOGIN") {
            Ok(login) => login.to_lowercase(),
            Err(_) => {
                println!("⚠️  ADMIN_LOGIN not set, skipping admin user creation");
                return Ok(());
            }
        };

        let admin_password = match env::var("ADMIN_PASSWORD") {
            Ok(password) => password,
            Err(_) => {
                println!("⚠️  ADMIN_PASSWORD not set, skipping admin user creation");
                return Ok(());
            }
        };

        let admin_email = env::var("ADMIN_EMAIL").ok();

        if find_user_id(manager, &admin_login).await?.is_some() {
            println!("✅ Admin user already exists, skipping creation");
            return Ok(());
        }

        println!("🌱 Seeding admin user: {}", admin_login);

        let password_hash = hash(&admin_password, DEFAULT_COST)
            .map_err(|e| DbErr::Custom(format!("Failed to hash password: {}", e)))?;

        manager
            .exec_stmt(
                Query::insert()
                    .into_table(User::Table)
                    .columns([
                        User::Login,
                        User::PasswordHash,
                        User::Email,
                        User::Activated,
                        User::CreatedDate,
                    ])
                    .values_panic([
                        admin_login.clone().into(),
                        password_hash.into(),
                        admin_email.into(),
                        true.into(),
                        Expr::current_timestamp().into(),
                    ])
                    .to_owned(),
            )
            .await?;

        let user_id = find_user_id(manager, &admin_login)
            .await?
            .ok_or_else(|| DbErr::Custom("Admin user was not persisted".to_string()))?;

        let mut grants = Query::insert();
        grants
            .into_table(UserAuthority::Table)
            .columns([UserAuthority::UserId, UserAuthority::AuthorityName]);
        for authority in DEFAULT_AUTHORITIES {
            grants.values_panic([user_id.into(), authority.into()]);
        }
        manager.exec_stmt(grants).await?;

        println!("✅ Admin user created successfully: {}", admin_login);
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let admin_login = match env::var("ADMIN_LOGIN") {
            Ok(login) => login.to_lowercase(),
            Err(_) => {
                println!("⚠️  ADMIN_LOGIN not set, cannot remove admin user");
                return Ok(());
            }
        };

        // Authority grants go with the user through the cascading foreign key
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(User::Table)
                    .and_where(Expr::col(User::Login).eq(admin_login.as_str()))
                    .to_owned(),
            )
            .await?;

        println!("🗑️  Admin user removed: {}", admin_login);
        Ok(())
    }
}

async fn find_user_id(manager: &SchemaManager<'_>, login: &str) -> Result<Option<i64>, DbErr> {
    let db = manager.get_connection();
    let select = Query::select()
        .column(User::Id)
        .from(User::Table)
        .and_where(Expr::col(User::Login).eq(login))
        .to_owned();

    match db.query_one(db.get_database_backend().build(&select)).await? {
        Some(row) => Ok(Some(row.try_get::<i64>("", "id")?)),
        None => Ok(None),
    }
}
