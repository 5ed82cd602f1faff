//! Record id path segment extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::errors::AppError;

/// The `:id` segment of a route, parsed as a store id.
///
/// A non-numeric segment rejects with [`AppError::Validation`] instead of
/// axum's plain-text rejection.
pub struct IdPath(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::validation("id must be an integer"))?;

        Ok(IdPath(id))
    }
}
