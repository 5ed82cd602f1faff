//! Product record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A row of the `products` table.
///
/// `email` names the owning student but is not a foreign key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Desk lamp")]
    pub name: String,
    #[schema(example = 19.99)]
    pub price: f64,
    #[schema(example = "Adjustable LED lamp")]
    pub description: String,
    #[schema(example = "https://example.com/lamp.png")]
    pub image: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub email: String,
}
