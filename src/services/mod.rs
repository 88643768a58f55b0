pub mod adress_entity;
pub mod authority;
pub mod user;

pub use adress_entity::*;
pub use authority::*;
pub use user::*;
