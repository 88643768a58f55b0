pub mod jwt;
pub mod middleware;
pub mod types;

pub use jwt::*;
pub use middleware::*;
pub use types::*;
