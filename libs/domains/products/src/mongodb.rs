//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::ReturnDocument,
    Collection, Database,
};
use tracing::instrument;

use crate::codec::{self, ProductDocument};
use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Default collection name
pub const COLLECTION_NAME: &str = "products";

/// MongoDB implementation of the ProductRepository
///
/// Holds one `Collection` handle shared by every request; the driver's pool
/// provides concurrency.
#[derive(Clone)]
pub struct MongoProductRepository {
    collection: Collection<ProductDocument>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository on the `products` collection
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, COLLECTION_NAME)
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<ProductDocument>(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let document = ProductDocument::new(input, codec::now());

        self.collection.insert_one(&document).await?;

        tracing::info!(product_id = %document.id, "Product created successfully");
        Ok(document.into())
    }

    #[instrument(skip(self, id), fields(product_id = %id))]
    async fn get_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>> {
        let document = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(document.map(Product::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<ProductDocument> = cursor.try_collect().await?;

        tracing::debug!(count = documents.len(), "Listed products");
        Ok(documents.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self, id, input), fields(product_id = %id))]
    async fn update(&self, id: ObjectId, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let update = codec::replacement_update(input, codec::now())?;

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": id }, update)
            .return_document(ReturnDocument::After)
            .await?;

        if updated.is_some() {
            tracing::info!(product_id = %id, "Product updated successfully");
        }
        Ok(updated.map(Product::from))
    }

    #[instrument(skip(self, id), fields(product_id = %id))]
    async fn delete(&self, id: ObjectId) -> ProductResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        let deleted = result.deleted_count > 0;
        if deleted {
            tracing::info!(product_id = %id, "Product deleted successfully");
        }
        Ok(deleted)
    }
}
