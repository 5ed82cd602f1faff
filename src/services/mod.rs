//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on the Unit of Work abstraction,
//! never on a concrete store.

mod auth_service;
pub mod container;
mod product_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator};
pub use product_service::{ProductManager, ProductService};
pub use user_service::{UserManager, UserService};
