use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub const ROLE_ADMIN: &str = "ROLE_ADMIN";
pub const ROLE_USER: &str = "ROLE_USER";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // login
    pub auth: String, // comma separated authorities
    pub exp: i64,   // expiration timestamp
    pub iat: i64,   // issued at timestamp
}

#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub login: String,
    pub authorities: Vec<String>,
}

impl AuthenticatedUser {
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|granted| granted == authority)
    }

    pub fn require_authority(&self, authority: &str) -> AppResult<()> {
        if self.has_authority(authority) {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            login: claims.sub,
            authorities: claims
                .auth
                .split(',')
                .map(str::trim)
                .filter(|authority| !authority.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}
