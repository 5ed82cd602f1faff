//! Unit of Work - the single store handle shared by every service.
//!
//! Built once at startup from one [`DatabaseConnection`] and passed to the
//! services explicitly, so tests can substitute their own repositories.
//! Operations are single statements; no transactions are opened.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{ProductRepository, ProductStore, UserRepository, UserStore};

/// Centralized access to all repositories.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get product repository
    fn products(&self) -> Arc<dyn ProductRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    user_repo: Arc<dyn UserRepository>,
    product_repo: Arc<dyn ProductRepository>,
}

impl Persistence {
    /// Build store-backed repositories sharing `db`
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            product_repo: Arc::new(ProductStore::new(db)),
        }
    }

    /// Assemble from arbitrary repositories (mocks in tests)
    pub fn from_repositories(
        user_repo: Arc<dyn UserRepository>,
        product_repo: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            user_repo,
            product_repo,
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.product_repo.clone()
    }
}
