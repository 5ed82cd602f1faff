//! Shared response types.

mod response;

pub use response::{CreatedResponse, MessageResponse};
