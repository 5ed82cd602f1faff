//! User service - read, update and delete of student records.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::User;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Replace name and email; `NotFound` if no record has `id`
    async fn update_user(&self, id: i32, name: String, email: String) -> AppResult<User>;

    /// Physically delete; `NotFound` if no record has `id`
    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.uow.users().find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_user(&self, id: i32, name: String, email: String) -> AppResult<User> {
        self.uow.users().find_by_id(id).await?.ok_or_not_found()?;

        let taken = self
            .uow
            .users()
            .find_by_email(&email)
            .await?
            .iter()
            .any(|other| other.id != id);
        if taken {
            return Err(AppError::conflict("User"));
        }

        let user = self.uow.users().update(id, name, email).await?;
        tracing::info!(user_id = id, "Student updated");
        Ok(user)
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.uow.users().delete(id).await?;
        tracing::info!(user_id = id, "Student deleted");
        Ok(())
    }
}
