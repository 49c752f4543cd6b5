//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductQuery, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Handlers call this layer after the request has passed its validation
/// gates. DTOs are validated again here so the service is safe to call from
/// anywhere, not only from HTTP.
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

    /// List products matching the query
    #[instrument(skip(self))]
    pub async fn find(&self, query: ProductQuery) -> ProductResult<Vec<Product>> {
        query.validate()?;
        self.repository.list(query).await
    }

    /// Get a single product. Blocked products are refused.
    #[instrument(skip(self))]
    pub async fn find_one(&self, id: Uuid) -> ProductResult<Product> {
        let product = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::not_found(id))?;

        if product.is_blocked {
            return Err(ProductError::Blocked(id));
        }

        Ok(product)
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        input.validate()?;
        self.repository.insert(Product::new(input)).await
    }

    /// Update an existing product
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product> {
        input.validate()?;
        self.repository
            .update(id, input)
            .await?
            .ok_or_else(|| ProductError::not_found(id))
    }

    /// Delete a product and return it.
    ///
    /// The id is taken as received; a string that is not a UUID cannot
    /// name a stored product and is reported as not found.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> ProductResult<Product> {
        let uuid = Uuid::parse_str(id).map_err(|_| ProductError::not_found(id))?;
        self.repository
            .delete(uuid)
            .await?
            .ok_or_else(|| ProductError::not_found(id))
    }

    /// Number of stored products, used by readiness checks
    #[instrument(skip(self))]
    pub async fn count(&self) -> ProductResult<usize> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate;

    fn sample(price: i64) -> Product {
        Product::new(CreateProduct {
            name: "Chair".to_string(),
            price,
            image: None,
        })
    }

    #[tokio::test]
    async fn test_find_passes_query_to_repository() {
        let query = ProductQuery {
            limit: Some(5),
            ..Default::default()
        };
        let products = vec![sample(20), sample(30)];
        let returned = products.clone();

        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .with(predicate::eq(query.clone()))
            .times(1)
            .returning(move |_| Ok(returned.clone()));

        let service = ProductService::new(mock_repo);
        assert_eq!(service.find(query).await.unwrap(), products);
    }

    #[tokio::test]
    async fn test_find_rejects_invalid_query() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_list().never();

        let service = ProductService::new(mock_repo);
        let result = service
            .find(ProductQuery {
                price_min: Some(20),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_find_one_returns_product() {
        let product = sample(50);
        let id = product.id;
        let returned = product.clone();

        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(predicate::eq(id))
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = ProductService::new(mock_repo);
        assert_eq!(service.find_one(id).await.unwrap(), product);
    }

    #[tokio::test]
    async fn test_find_one_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.find_one(Uuid::now_v7()).await;

        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_find_one_blocked_product_is_refused() {
        let mut product = sample(50);
        product.is_blocked = true;
        let id = product.id;

        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(Some(product.clone())));

        let service = ProductService::new(mock_repo);
        let result = service.find_one(id).await;

        assert!(matches!(result, Err(ProductError::Blocked(blocked)) if blocked == id));
    }

    #[tokio::test]
    async fn test_create_stores_new_product() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_insert()
            .withf(|p| p.name == "Chair" && p.price == 50 && !p.is_blocked)
            .times(1)
            .returning(|p| Ok(p));

        let service = ProductService::new(mock_repo);
        let product = service
            .create(CreateProduct {
                name: "Chair".to_string(),
                price: 50,
                image: None,
            })
            .await
            .unwrap();

        assert_eq!(product.name, "Chair");
        assert_eq!(product.created_at, product.updated_at);
    }

    #[tokio::test]
    async fn test_create_invalid_input_never_reaches_repository() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_insert().never();

        let service = ProductService::new(mock_repo);
        let result = service
            .create(CreateProduct {
                name: "ab".to_string(),
                price: 1,
                image: None,
            })
            .await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_missing_product() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_update().returning(|_, _| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service
            .update(
                Uuid::now_v7(),
                UpdateProduct {
                    price: Some(60),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_returns_removed_product() {
        let product = sample(40);
        let id = product.id;
        let returned = product.clone();

        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_delete()
            .with(predicate::eq(id))
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = ProductService::new(mock_repo);
        assert_eq!(service.delete(&id.to_string()).await.unwrap(), product);
    }

    #[tokio::test]
    async fn test_delete_non_uuid_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_delete().never();

        let service = ProductService::new(mock_repo);
        let result = service.delete("42").await;

        assert!(matches!(result, Err(ProductError::NotFound(id)) if id == "42"));
    }
}
