//! Product Service - Business logic layer

use mongodb::bson::oid::ObjectId;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Wall-clock bound applied to every storage call
pub const DEFAULT_STORAGE_TIMEOUT: Duration = Duration::from_secs(10);

/// Product service providing business logic operations
///
/// Validates input, bounds each repository call with the storage timeout and
/// turns absent results into [`ProductError::NotFound`].
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    storage_timeout: Duration,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the default storage timeout
    pub fn new(repository: R) -> Self {
        Self::with_timeout(repository, DEFAULT_STORAGE_TIMEOUT)
    }

    /// Create a new ProductService with a custom storage timeout
    pub fn with_timeout(repository: R, storage_timeout: Duration) -> Self {
        Self {
            repository: Arc::new(repository),
            storage_timeout,
        }
    }

    pub fn storage_timeout(&self) -> Duration {
        self.storage_timeout
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = ProductResult<T>>,
    ) -> ProductResult<T> {
        tokio::time::timeout(self.storage_timeout, call)
            .await
            .map_err(|_| {
                tracing::warn!(operation, timeout = ?self.storage_timeout, "Storage call timed out");
                ProductError::Timeout {
                    operation,
                    timeout: self.storage_timeout,
                }
            })?
    }

    /// List all products
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.bounded("list", self.repository.list()).await
    }

    /// Get a product by ID
    #[instrument(skip(self, id), fields(product_id = %id))]
    pub async fn get_product(&self, id: ObjectId) -> ProductResult<Product> {
        self.bounded("get", self.repository.get_by_id(id))
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input.validate()?;
        self.bounded("create", self.repository.create(input)).await
    }

    /// Replace an existing product's business fields
    #[instrument(skip(self, id, input), fields(product_id = %id))]
    pub async fn update_product(&self, id: ObjectId, input: UpdateProduct) -> ProductResult<Product> {
        input.validate()?;
        self.bounded("update", self.repository.update(id, input))
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Delete a product
    #[instrument(skip(self, id), fields(product_id = %id))]
    pub async fn delete_product(&self, id: ObjectId) -> ProductResult<()> {
        if self.bounded("delete", self.repository.delete(id)).await? {
            Ok(())
        } else {
            Err(ProductError::NotFound(id))
        }
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            storage_timeout: self.storage_timeout,
        }
    }
}
