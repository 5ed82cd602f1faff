//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Response Messages
// =============================================================================

/// Returned after a student record is inserted
pub const MSG_STUDENT_ADDED: &str = "Student Added";

/// Returned after a product record is inserted
pub const MSG_PRODUCT_ADDED: &str = "Product Added";

/// Returned after a successful credential check
pub const MSG_LOGIN_SUCCESSFUL: &str = "Login Successful";

/// Returned when no record matches the supplied credentials
pub const MSG_WRONG_CREDENTIALS: &str = "Wrong email or password";

/// Returned after a student record is updated
pub const MSG_UPDATED: &str = "Updated";

/// Returned after a student record is removed
pub const MSG_DELETED: &str = "Deleted";

/// Body of the catch-all 404 handler
pub const MSG_PAGE_NOT_FOUND: &str = "Page not found";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "mysql://root:@localhost:3306/main";

/// Default upper bound on pooled store connections
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Longest accepted `name`/`email`; both are `VARCHAR(255)` columns
pub const MAX_FIELD_LENGTH: u64 = 255;
