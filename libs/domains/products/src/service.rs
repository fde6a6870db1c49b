//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business rules over a repository.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every product, in store order
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Fetch a single product by its raw path identifier
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound)
    }

    /// Create a new product.
    ///
    /// Required fields follow the wire contract's notion of "missing":
    /// absent, null, empty string and zero all reject the payload.
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        // A zero price counts as missing, same as an absent field
        if input.price == Some(0.0) {
            return Err(ProductError::Validation("price must be non-zero".to_string()));
        }

        self.repository.create(input).await
    }

    /// Apply a partial update to a product.
    ///
    /// Returns `None` when no record matches the identifier; required
    /// fields are not re-validated on this path.
    #[instrument(skip(self, changes))]
    pub async fn update_product(
        &self,
        id: Uuid,
        changes: UpdateProduct,
    ) -> ProductResult<Option<Product>> {
        self.repository.update(id, changes).await
    }

    /// Delete a product.
    ///
    /// Any store failure on this path is reported as the record not being
    /// there; the underlying error is logged before the mapping.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<()> {
        self.repository.delete(id).await.map_err(|err| {
            tracing::error!(product_id = %id, error = %err, "Product delete failed");
            ProductError::NotFound
        })
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
