pub use super::adress_entity::Entity as AdressEntity;
pub use super::authority::Entity as Authority;
pub use super::user::Entity as User;
pub use super::user_authority::Entity as UserAuthority;
