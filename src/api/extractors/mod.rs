//! Request extractors that reject with [`AppError`](crate::errors::AppError).

mod id_path;
mod validated_body;

pub use id_path::IdPath;
pub use validated_body::ValidatedBody;
