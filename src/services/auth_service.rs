//! Authentication service - student registration and credential checks.
//!
//! Passwords are hashed with the domain [`Password`] value object before they
//! reach the store, and compared only through hash verification.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewUser, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new student
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User>;

    /// Check credentials; returns the matching record
    async fn login(&self, email: String, password: String) -> AppResult<User>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User> {
        // Field formats are validated by the handler's ValidatedBody extractor
        if !self.uow.users().find_by_email(&email).await?.is_empty() {
            return Err(AppError::conflict("User"));
        }

        let password_hash = Password::new(&password)?.into_string();
        let user = self
            .uow
            .users()
            .create(NewUser {
                name,
                email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = user.id, "Student added");
        Ok(user)
    }

    async fn login(&self, email: String, password: String) -> AppResult<User> {
        let candidates = self.uow.users().find_by_email(&email).await?;

        if candidates.is_empty() {
            // Same hashing cost as a wrong password, so timing does not reveal the email
            Password::dummy().verify(&password);
            tracing::warn!("Login failed: unknown email");
            return Err(AppError::InvalidCredentials);
        }

        // Lowest id whose hash verifies wins
        let matched = candidates
            .into_iter()
            .find(|user| Password::from_hash(user.password_hash.clone()).verify(&password));

        match matched {
            Some(user) => {
                tracing::info!(user_id = user.id, "Login successful");
                Ok(user)
            }
            None => {
                tracing::warn!("Login failed: password mismatch");
                Err(AppError::InvalidCredentials)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{MockProductRepository, MockUserRepository, Persistence};
    use sea_orm::{ConnAcquireErr, DbErr};

    fn service(users: MockUserRepository) -> Authenticator<Persistence> {
        let uow = Persistence::from_repositories(
            Arc::new(users),
            Arc::new(MockProductRepository::new()),
        );
        Authenticator::new(Arc::new(uow))
    }

    fn stored_user(id: i32, password: &str) -> User {
        User {
            id,
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password_hash: Password::new(password).unwrap().into_string(),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password_before_store() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(vec![]));
        repo.expect_create()
            .withf(|new| {
                new.password_hash != "Password123"
                    && Password::from_hash(new.password_hash.clone()).verify("Password123")
            })
            .times(1)
            .returning(|new| {
                Ok(User {
                    id: 1,
                    name: new.name,
                    email: new.email,
                    password_hash: new.password_hash,
                })
            });

        let user = service(repo)
            .register(
                "Jane".to_string(),
                "jane@example.com".to_string(),
                "Password123".to_string(),
            )
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.email, "jane@example.com");
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(vec![stored_user(1, "Password123")]));
        repo.expect_create().never();

        let result = service(repo)
            .register(
                "Jane".to_string(),
                "test@example.com".to_string(),
                "Password123".to_string(),
            )
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_register_short_password_never_reaches_store() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(vec![]));
        repo.expect_create().never();

        let result = service(repo)
            .register("Jane".into(), "jane@example.com".into(), "short".into())
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_login_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(vec![stored_user(5, "Password123")]));

        let user = service(repo)
            .login("test@example.com".into(), "Password123".into())
            .await
            .unwrap();

        assert_eq!(user.id, 5);
    }

    #[tokio::test]
    async fn test_login_first_verified_match_wins() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| {
            Ok(vec![
                stored_user(1, "OtherPassword1"),
                stored_user(2, "Password123"),
                stored_user(3, "Password123"),
            ])
        });

        let user = service(repo)
            .login("test@example.com".into(), "Password123".into())
            .await
            .unwrap();

        assert_eq!(user.id, 2);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(vec![stored_user(1, "Password123")]));

        let result = service(repo)
            .login("test@example.com".into(), "WrongPassword".into())
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(vec![]));

        let result = service(repo)
            .login("nobody@example.com".into(), "Password123".into())
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_store_outage_is_not_auth_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| {
            Err(AppError::from(DbErr::ConnectionAcquire(
                ConnAcquireErr::Timeout,
            )))
        });

        let result = service(repo)
            .login("test@example.com".into(), "Password123".into())
            .await;

        assert!(matches!(result, Err(AppError::StoreUnavailable(_))));
    }
}
