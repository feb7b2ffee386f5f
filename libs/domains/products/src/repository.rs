use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductFilter, UpdateProduct};

/// Repository trait for Product persistence
///
/// Defines the data access interface for products. The production
/// implementation is PostgreSQL; tests use a generated mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product, returning it with its assigned id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by id
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// List products matching the filter
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// Replace an existing product's fields
    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product>;

    /// Delete a product by id, returning whether a row was removed
    async fn delete(&self, id: i32) -> ProductResult<bool>;

    /// Check whether a product with the given sku exists
    async fn exists_by_sku(&self, sku: &str) -> ProductResult<bool>;
}
