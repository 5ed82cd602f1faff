use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message-only response, the shape every write endpoint returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Updated")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Message plus the id the store assigned to the new record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(example = "Student Added")]
    pub message: String,
    #[schema(example = 1)]
    pub id: i32,
}

impl CreatedResponse {
    pub fn new(message: impl Into<String>, id: i32) -> Self {
        Self {
            message: message.into(),
            id,
        }
    }
}
