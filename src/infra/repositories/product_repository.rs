//! `products` repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use crate::domain::{NewProduct, Product};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product; the store assigns the id
    async fn create(&self, product: NewProduct) -> AppResult<Product>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Product>>;

    /// Products ordered by id, optionally only those owned by `email`
    async fn list(&self, email: Option<String>) -> AppResult<Vec<Product>>;
}

pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn create(&self, product: NewProduct) -> AppResult<Product> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(product.name),
            price: Set(product.price),
            description: Set(product.description),
            image: Set(product.image),
            email: Set(product.email),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Product::from(model))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Product>> {
        let result = ProductEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Product::from))
    }

    async fn list(&self, email: Option<String>) -> AppResult<Vec<Product>> {
        let mut query = ProductEntity::find().order_by_asc(product::Column::Id);
        if let Some(email) = email {
            query = query.filter(product::Column::Email.eq(email));
        }

        let models = query.all(&self.db).await.map_err(AppError::from)?;
        Ok(models.into_iter().map(Product::from).collect())
    }
}
