//! Service Container - Centralized service access.
//!
//! All services share one [`Persistence`] built from a single store
//! connection.

use std::sync::Arc;

use super::{AuthService, ProductService, UserService};
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn users(&self) -> Arc<dyn UserService>;

    fn products(&self) -> Arc<dyn ProductService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    product_service: Arc<dyn ProductService>,
}

impl Services {
    /// Create the store-backed services from one database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        Self::from_persistence(Arc::new(Persistence::new(db)))
    }

    /// Create services over an existing Unit of Work
    pub fn from_persistence(uow: Arc<Persistence>) -> Self {
        use super::{Authenticator, ProductManager, UserManager};

        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone())),
            user_service: Arc::new(UserManager::new(uow.clone())),
            product_service: Arc::new(ProductManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn products(&self) -> Arc<dyn ProductService> {
        self.product_service.clone()
    }
}
