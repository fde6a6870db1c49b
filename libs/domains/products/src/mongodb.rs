//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::{Bson, doc, to_bson},
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("mydb");
    /// let repo = MongoProductRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Product>("products");
        Self { collection }
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }

    fn id_filter(id: &Uuid) -> mongodb::bson::Document {
        doc! { "_id": to_bson(id).unwrap_or(Bson::Null) }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, input))]
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product::new(input);

        self.collection.insert_one(&product).await?;

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        // The raw path value is cast to the store id type here, inside the
        // lookup: a malformed id is a failed lookup, not a rejected request
        let id: Uuid = id
            .parse()
            .map_err(|e| ProductError::Database(format!("cannot cast '{}' to a product id: {}", id, e)))?;

        let product = self.collection.find_one(Self::id_filter(&id)).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> ProductResult<Vec<Product>> {
        use futures_util::TryStreamExt;

        let cursor = self.collection.find(doc! {}).await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: Uuid, changes: UpdateProduct) -> ProductResult<Option<Product>> {
        let filter = Self::id_filter(&id);
        let Some(mut product) = self.collection.find_one(filter.clone()).await? else {
            return Ok(None);
        };

        product.apply_update(changes);
        self.collection.replace_one(filter, &product).await?;

        tracing::info!(product_id = %id, "Product updated successfully");
        Ok(Some(product))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ProductResult<()> {
        // delete_one of an absent id succeeds with deleted_count == 0, so
        // delete stays idempotent for callers
        self.collection.delete_one(Self::id_filter(&id)).await?;

        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::Client;

    async fn lazy_repository() -> MongoProductRepository {
        // The driver connects lazily, so building a client performs no I/O
        let client = Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        MongoProductRepository::new(client.database("products_test"))
    }

    #[tokio::test]
    async fn test_find_by_id_rejects_malformed_id_as_store_error() {
        let repo = lazy_repository().await;

        let result = repo.find_by_id("not-a-valid-id").await;
        assert!(matches!(result, Err(ProductError::Database(_))));
    }

    #[tokio::test]
    async fn test_id_filter_serializes_uuid() {
        let id = Uuid::now_v7();
        let filter = MongoProductRepository::id_filter(&id);
        assert_eq!(filter.get_str("_id").unwrap(), id.to_string());
    }
}
