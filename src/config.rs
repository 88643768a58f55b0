use std::env;

use anyhow::{Context, Result, bail};
use axum::http::HeaderName;
use tracing::warn;

const DEFAULT_JWT_SECRET: &str = "default-secret-change-in-production";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub jwt_remember_me_hours: i64,
    pub bcrypt_cost: u32,
    pub cors_origins: String,
    /// Prefix of the alert message keys and of the alert header names.
    pub application_name: String,
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET not set, using default (not secure for production)");
            DEFAULT_JWT_SECRET.to_string()
        });

        let config = Self {
            database_url,
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT", 8080)?,
            jwt_secret,
            jwt_expiration_hours: parse_var("JWT_EXPIRATION_HOURS", 24)?,
            jwt_remember_me_hours: parse_var("JWT_REMEMBER_ME_HOURS", 24 * 30)?,
            bcrypt_cost: parse_var("BCRYPT_COST", bcrypt::DEFAULT_COST)?,
            cors_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:9000,http://localhost:4200".to_string()),
            application_name: env::var("APPLICATION_NAME")
                .unwrap_or_else(|_| "shopapiApp".to_string()),
            run_migrations: parse_var("RUN_MIGRATIONS", true)?,
        };
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(4..=31).contains(&self.bcrypt_cost) {
            bail!("BCRYPT_COST must be between 4 and 31, got {}", self.bcrypt_cost);
        }
        if self.jwt_expiration_hours <= 0 || self.jwt_remember_me_hours <= 0 {
            bail!("JWT validity must be a positive number of hours");
        }
        self.alert_header_names()?;
        Ok(())
    }

    /// Names of the alert and alert-params headers, e.g. `x-shopapiapp-alert`.
    pub fn alert_header_names(&self) -> Result<(HeaderName, HeaderName)> {
        let prefix = self.application_name.to_ascii_lowercase();
        let not_header_safe =
            || format!("APPLICATION_NAME '{}' is not header safe", self.application_name);
        let alert =
            HeaderName::try_from(format!("x-{}-alert", prefix)).with_context(not_header_safe)?;
        let params =
            HeaderName::try_from(format!("x-{}-params", prefix)).with_context(not_header_safe)?;
        Ok((alert, params))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value '{}'", key, raw)),
        Err(_) => Ok(default),
    }
}
