//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{AuthService, ProductService, ServiceContainer, Services, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Registration and login
    pub auth_service: Arc<dyn AuthService>,
    /// Student reads, updates and deletes
    pub user_service: Arc<dyn UserService>,
    /// Product catalog
    pub product_service: Arc<dyn ProductService>,
    /// Database connection, for health checks
    pub database: Arc<Database>,
}

impl AppState {
    /// Build store-backed services over `database`.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());
        Self::from_container(&container, database)
    }

    /// Take services from any container.
    pub fn from_container(container: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            auth_service: container.auth(),
            user_service: container.users(),
            product_service: container.products(),
            database,
        }
    }
}
