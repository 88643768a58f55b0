use anyhow::Context;
use bcrypt::{hash, verify};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use tokio::task;
use tracing::{info, warn};

use crate::entities::{prelude::*, user, user_authority};
use crate::error::{AppError, AppResult};

const ENTITY_NAME: &str = "userManagement";

#[derive(Debug, Clone)]
pub struct UserWithAuthorities {
    pub user: user::Model,
    /// Sorted authority names.
    pub authorities: Vec<String>,
}

#[derive(Clone)]
pub struct UserService {
    db: DatabaseConnection,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(db: DatabaseConnection, bcrypt_cost: u32) -> Self {
        Self { db, bcrypt_cost }
    }

    /// Creates an activated user holding `authorities`, all of which must exist.
    ///
    /// No HTTP route registers users. Library callers and tests seed accounts
    /// here; a deployment gets its admin from the `ADMIN_LOGIN` migration.
    pub async fn create_user(
        &self,
        login: &str,
        password: &str,
        email: Option<String>,
        authorities: &[&str],
    ) -> AppResult<UserWithAuthorities> {
        let login = login.trim().to_lowercase();
        if login.is_empty() || login.chars().count() > 50 {
            return Err(AppError::bad_request_alert(
                "Login must be between 1 and 50 characters",
                ENTITY_NAME,
                "loginsize",
            ));
        }

        if self.find_by_login(&login).await?.is_some() {
            return Err(AppError::bad_request_alert(
                "Login name already used",
                ENTITY_NAME,
                "userexists",
            ));
        }

        let mut authorities: Vec<String> = authorities.iter().map(|a| a.to_string()).collect();
        authorities.sort();
        authorities.dedup();

        for name in &authorities {
            if Authority::find_by_id(name.clone())
                .one(&self.db)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(format!("unknown authority '{}'", name)));
            }
        }

        let password_hash = self.hash_password(password).await?;

        let tx = self.db.begin().await?;

        let new_user = user::ActiveModel {
            login: Set(login.clone()),
            password_hash: Set(password_hash),
            email: Set(email),
            activated: Set(true),
            created_date: Set(Utc::now().into()),
            ..Default::default()
        };
        let user = new_user.insert(&tx).await?;

        for name in &authorities {
            user_authority::ActiveModel {
                user_id: Set(user.id),
                authority_name: Set(name.clone()),
            }
            .insert(&tx)
            .await?;
        }

        tx.commit().await?;
        info!("Created user {} with authorities {:?}", user.login, authorities);

        Ok(UserWithAuthorities { user, authorities })
    }

    /// Checks credentials. Unknown logins, wrong passwords and deactivated
    /// accounts are all reported as `Unauthorized`.
    pub async fn authenticate(
        &self,
        login: &str,
        password: &str,
    ) -> AppResult<UserWithAuthorities> {
        let login = login.trim().to_lowercase();

        let Some(found) = self.find_with_authorities(&login).await? else {
            warn!("Authentication failed for unknown login {}", login);
            return Err(AppError::Unauthorized);
        };

        if !found.user.activated {
            warn!("Authentication refused for deactivated user {}", login);
            return Err(AppError::Unauthorized);
        }

        let password = password.to_string();
        let password_hash = found.user.password_hash.clone();
        let matches = task::spawn_blocking(move || verify(password, &password_hash))
            .await
            .context("password verification task failed")?
            .context("stored password hash is malformed")?;

        if !matches {
            warn!("Authentication failed for {}: bad credentials", login);
            return Err(AppError::Unauthorized);
        }

        Ok(found)
    }

    pub async fn find_by_login(&self, login: &str) -> Result<Option<user::Model>, DbErr> {
        User::find()
            .filter(user::Column::Login.eq(login))
            .one(&self.db)
            .await
    }

    pub async fn find_with_authorities(
        &self,
        login: &str,
    ) -> Result<Option<UserWithAuthorities>, DbErr> {
        let found = User::find()
            .filter(user::Column::Login.eq(login))
            .find_with_related(Authority)
            .all(&self.db)
            .await?;

        Ok(found.into_iter().next().map(|(user, authorities)| {
            let mut authorities: Vec<String> =
                authorities.into_iter().map(|authority| authority.name).collect();
            authorities.sort();
            UserWithAuthorities { user, authorities }
        }))
    }

    async fn hash_password(&self, password: &str) -> AppResult<String> {
        let password = password.to_string();
        let cost = self.bcrypt_cost;
        let hashed = task::spawn_blocking(move || hash(password, cost))
            .await
            .context("password hashing task failed")?
            .context("failed to hash password")?;
        Ok(hashed)
    }
}
