//! `SeaORM` entities

pub mod prelude;

pub mod adress_entity;
pub mod authority;
pub mod user;
pub mod user_authority;
