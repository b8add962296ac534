use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// Every method maps to exactly one storage call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product with a fresh identifier and timestamps
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>>;

    /// List every product, unfiltered and unpaginated
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Replace the business fields of a product; `None` when absent
    async fn update(&self, id: ObjectId, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Delete a product by ID; `false` when nothing was deleted
    async fn delete(&self, id: ObjectId) -> ProductResult<bool>;
}
