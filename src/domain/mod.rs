//! Domain layer - Core business entities and logic
//!
//! Records held by the store, independent of the SeaORM entities that
//! persist them.

pub mod password;
pub mod product;
pub mod user;

pub use password::Password;
pub use product::{NewProduct, Product};
pub use user::{NewUser, User, UserResponse};
