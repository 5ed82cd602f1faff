//! Infrastructure layer - External systems integration
//!
//! - Database connection and migrations
//! - Repositories over the `userdb` and `products` tables
//! - Unit of Work bundling the repositories behind one injected handle

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{ProductRepository, ProductStore, UserRepository, UserStore};
pub use unit_of_work::{Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockProductRepository, MockUserRepository};
