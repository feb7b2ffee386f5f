//! Product Service - business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductFilter, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations.
///
/// Handles validation and sku uniqueness, and orchestrates repository
/// operations.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(sku = %input.sku))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        if self.repository.exists_by_sku(&input.sku).await? {
            return Err(ProductError::DuplicateSku(input.sku.clone()));
        }

        self.repository.create(input).await
    }

    /// Get a product by id
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// List products matching the filter, order unspecified
    #[instrument(skip(self))]
    pub async fn list_products(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        self.repository.list(filter).await
    }

    /// Replace an existing product's fields
    #[instrument(skip(self, input), fields(sku = %input.sku))]
    pub async fn update_product(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        // The product keeps its own sku without tripping the uniqueness check
        if input.sku != existing.sku && self.repository.exists_by_sku(&input.sku).await? {
            return Err(ProductError::DuplicateSku(input.sku.clone()));
        }

        self.repository.update(id, input).await
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn create_input() -> CreateProduct {
        CreateProduct {
            name: "Widget".to_string(),
            kind: "Tool".to_string(),
            sku: "W-1".to_string(),
            image_url: None,
            description: String::new(),
            quantity: 5,
            price: Decimal::from_str("9.99").unwrap(),
        }
    }

    fn update_input() -> UpdateProduct {
        UpdateProduct {
            name: "Widget v2".to_string(),
            kind: "Tool".to_string(),
            sku: "W-1".to_string(),
            image_url: None,
            description: "improved".to_string(),
            quantity: 9,
            price: Decimal::from_str("12.50").unwrap(),
        }
    }

    fn stored(id: i32, input: &CreateProduct) -> Product {
        Product {
            id,
            name: input.name.clone(),
            kind: input.kind.clone(),
            sku: input.sku.clone(),
            image_url: input.image_url.clone(),
            description: input.description.clone(),
            quantity: input.quantity,
            price: input.price,
        }
    }

    #[tokio::test]
    async fn test_create_product_assigns_id() {
        let mut mock_repo = MockProductRepository::new();
        let input = create_input();
        let expected = stored(1, &input);

        mock_repo
            .expect_exists_by_sku()
            .with(eq("W-1"))
            .returning(|_| Ok(false));
        let returned = expected.clone();
        mock_repo
            .expect_create()
            .returning(move |_| Ok(returned.clone()));

        let service = ProductService::new(mock_repo);
        let product = service.create_product(input).await.unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(product, expected);
    }

    #[tokio::test]
    async fn test_create_product_rejects_duplicate_sku() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_exists_by_sku()
            .with(eq("W-1"))
            .returning(|_| Ok(true));
        mock_repo.expect_create().never();

        let service = ProductService::new(mock_repo);
        let err = service.create_product(create_input()).await.unwrap_err();

        assert!(matches!(err, ProductError::DuplicateSku(sku) if sku == "W-1"));
    }

    #[tokio::test]
    async fn test_create_product_rejects_invalid_price() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_exists_by_sku().never();
        mock_repo.expect_create().never();

        let mut input = create_input();
        input.price = Decimal::from_str("9.999").unwrap();

        let service = ProductService::new(mock_repo);
        let err = service.create_product(input).await.unwrap_err();

        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(404))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let err = service.get_product(404).await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound(404)));
    }

    #[tokio::test]
    async fn test_get_product_returns_stored_fields() {
        let mut mock_repo = MockProductRepository::new();
        let expected = stored(3, &create_input());
        let returned = expected.clone();
        mock_repo
            .expect_get_by_id()
            .with(eq(3))
            .returning(move |_| Ok(Some(returned.clone())));

        let service = ProductService::new(mock_repo);
        let product = service.get_product(3).await.unwrap();

        assert_eq!(product, expected);
    }

    #[tokio::test]
    async fn test_update_product_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));
        mock_repo.expect_update().never();

        let service = ProductService::new(mock_repo);
        let err = service.update_product(5, update_input()).await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound(5)));
    }

    #[tokio::test]
    async fn test_update_product_rejects_stolen_sku() {
        let mut mock_repo = MockProductRepository::new();
        let existing = stored(5, &create_input());
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo
            .expect_exists_by_sku()
            .with(eq("OTHER-1"))
            .returning(|_| Ok(true));
        mock_repo.expect_update().never();

        let mut input = update_input();
        input.sku = "OTHER-1".to_string();

        let service = ProductService::new(mock_repo);
        let err = service.update_product(5, input).await.unwrap_err();

        assert!(matches!(err, ProductError::DuplicateSku(sku) if sku == "OTHER-1"));
    }

    #[tokio::test]
    async fn test_update_product_keeps_own_sku() {
        let mut mock_repo = MockProductRepository::new();
        let existing = stored(5, &create_input());
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        // Same sku as the stored product: no uniqueness lookup
        mock_repo.expect_exists_by_sku().never();
        mock_repo.expect_update().returning(|id, input| {
            Ok(Product {
                id,
                name: input.name,
                kind: input.kind,
                sku: input.sku,
                image_url: input.image_url,
                description: input.description,
                quantity: input.quantity,
                price: input.price,
            })
        });

        let service = ProductService::new(mock_repo);
        let product = service.update_product(5, update_input()).await.unwrap();

        assert_eq!(product.name, "Widget v2");
        assert_eq!(product.quantity, 9);
        assert_eq!(product.price, Decimal::from_str("12.50").unwrap());
    }

    #[tokio::test]
    async fn test_delete_product_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_delete()
            .with(eq(9))
            .returning(|_| Ok(false));

        let service = ProductService::new(mock_repo);
        let err = service.delete_product(9).await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound(9)));
    }

    #[tokio::test]
    async fn test_delete_product_succeeds() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_delete().with(eq(9)).returning(|_| Ok(true));

        let service = ProductService::new(mock_repo);
        assert!(service.delete_product(9).await.is_ok());
    }
}
