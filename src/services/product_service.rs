//! Product service - catalog entries owned by students.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewProduct, Product};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait ProductService: Send + Sync {
    /// Add a product; the owner email is not checked against `userdb`
    async fn create_product(&self, product: NewProduct) -> AppResult<Product>;

    async fn get_product(&self, id: i32) -> AppResult<Product>;

    /// List products, optionally only those owned by `email`
    async fn list_products(&self, email: Option<String>) -> AppResult<Vec<Product>>;
}

pub struct ProductManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ProductManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ProductService for ProductManager<U> {
    async fn create_product(&self, product: NewProduct) -> AppResult<Product> {
        let product = self.uow.products().create(product).await?;
        tracing::info!(product_id = product.id, "Product added");
        Ok(product)
    }

    async fn get_product(&self, id: i32) -> AppResult<Product> {
        self.uow.products().find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_products(&self, email: Option<String>) -> AppResult<Vec<Product>> {
        self.uow.products().list(email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::{MockProductRepository, MockUserRepository, Persistence};
    use mockall::predicate::eq;

    fn service(products: MockProductRepository) -> ProductManager<Persistence> {
        let uow = Persistence::from_repositories(
            Arc::new(MockUserRepository::new()),
            Arc::new(products),
        );
        ProductManager::new(Arc::new(uow))
    }

    fn lamp() -> NewProduct {
        NewProduct {
            name: "Lamp".to_string(),
            price: 12.5,
            description: "Desk lamp".to_string(),
            image: "https://example.com/lamp.png".to_string(),
            email: "owner@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_product_passes_fields_through() {
        let mut repo = MockProductRepository::new();
        repo.expect_create()
            .with(eq(lamp()))
            .times(1)
            .returning(|p| {
                Ok(Product {
                    id: 10,
                    name: p.name,
                    price: p.price,
                    description: p.description,
                    image: p.image,
                    email: p.email,
                })
            });

        let product = service(repo).create_product(lamp()).await.unwrap();
        assert_eq!(product.id, 10);
        assert_eq!(product.price, 12.5);
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(repo).get_product(1).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_products_forwards_owner_filter() {
        let mut repo = MockProductRepository::new();
        repo.expect_list()
            .with(eq(Some("owner@example.com".to_string())))
            .returning(|_| Ok(vec![]));

        let products = service(repo)
            .list_products(Some("owner@example.com".to_string()))
            .await
            .unwrap();
        assert!(products.is_empty());
    }
}
