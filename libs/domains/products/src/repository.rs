use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends (MongoDB in
/// production, doubles in tests).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product, assigning its identifier and timestamps
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Find a product by its raw path identifier.
    ///
    /// Takes the unparsed string: casting to the store's identifier type
    /// happens inside the lookup, so a malformed id surfaces as a store
    /// error rather than a rejected request.
    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// List every product, in store order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Apply a partial update, returning the post-update record.
    ///
    /// Returns `None` when no record matches the identifier.
    async fn update(&self, id: Uuid, changes: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Delete a product by identifier.
    ///
    /// Whether deleting an absent record is an error is up to the backend;
    /// MongoDB treats it as a no-op success.
    async fn delete(&self, id: Uuid) -> ProductResult<()>;
}
