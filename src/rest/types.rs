use std::hash::{Hash, Hasher};
use std::ptr;

use serde::{Deserialize, Serialize};

use crate::entities::{adress_entity, authority};
use crate::services::UserWithAuthorities;

/// Wire form of an address. `id` is absent on create and required on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdressEntityDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
}

impl AdressEntityDto {
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }
}

/// Identity equality: equal ids that are set, regardless of other fields.
impl PartialEq for AdressEntityDto {
    fn eq(&self, other: &Self) -> bool {
        if ptr::eq(self, other) {
            return true;
        }
        self.id.is_some() && self.id == other.id
    }
}

impl Eq for AdressEntityDto {}

impl Hash for AdressEntityDto {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl From<adress_entity::Model> for AdressEntityDto {
    fn from(model: adress_entity::Model) -> Self {
        Self {
            id: Some(model.id),
            city: model.city,
            street: model.street,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorityDto {
    pub name: String,
}

impl From<authority::Model> for AuthorityDto {
    fn from(model: authority::Model) -> Self {
        Self { name: model.name }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtToken {
    pub id_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountDto {
    pub id: i64,
    pub login: String,
    pub email: Option<String>,
    pub activated: bool,
    pub authorities: Vec<String>,
}

impl From<UserWithAuthorities> for AccountDto {
    fn from(found: UserWithAuthorities) -> Self {
        Self {
            id: found.user.id,
            login: found.user.login,
            email: found.user.email,
            activated: found.user.activated,
            authorities: found.authorities,
        }
    }
}
