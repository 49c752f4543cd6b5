use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductQuery, UpdateProduct};

/// Repository trait for Product persistence
///
/// The service only depends on this trait; storage backends plug in behind it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List products matching the query filters, oldest first, paginated
    async fn list(&self, query: ProductQuery) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Store a new product
    async fn insert(&self, product: Product) -> ProductResult<Product>;

    /// Apply a partial update. `None` if the product does not exist.
    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Remove a product and return it. `None` if the product does not exist.
    async fn delete(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Number of stored products
    async fn count(&self) -> ProductResult<usize>;
}

/// In-memory repository implementation
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-filled with `count` generated sample products.
    ///
    /// Prices are spread over 10..=999 and every tenth product is blocked.
    pub fn seeded(count: usize) -> Self {
        let products = (1..=count)
            .map(|i| {
                let mut product = Product::new(CreateProduct {
                    name: format!("Product {}", i),
                    price: 10 + (i as i64 * 37) % 990,
                    image: Some(format!("https://picsum.photos/seed/{}/400", i)),
                });
                product.is_blocked = i % 10 == 0;
                (product.id, product)
            })
            .collect();

        tracing::info!(count, "Seeded product store");

        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self, query: ProductQuery) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products
            .values()
            .filter(|p| query.matches(p))
            .cloned()
            .collect();

        // UUIDv7 ids are time-ordered, so this is insertion order
        result.sort_by_key(|p| p.id);

        let result = result
            .into_iter()
            .skip(query.offset.unwrap_or(0))
            .take(query.limit.unwrap_or(usize::MAX))
            .collect();

        Ok(result)
    }

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn insert(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        products.insert(product.id, product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;

        let Some(product) = products.get_mut(&id) else {
            return Ok(None);
        };
        product.apply_update(input);

        tracing::info!(product_id = %id, "Updated product");
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;

        let removed = products.remove(&id);
        if removed.is_some() {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(removed)
    }

    async fn count(&self) -> ProductResult<usize> {
        Ok(self.products.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, price: i64) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            price,
            image: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_get_product() {
        let repo = InMemoryProductRepository::new();

        let product = repo.insert(Product::new(input("Chair", 50))).await.unwrap();
        assert_eq!(product.name, "Chair");

        let fetched = repo.get_by_id(product.id).await.unwrap();
        assert_eq!(fetched, Some(product));
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order_and_paginates() {
        let repo = InMemoryProductRepository::new();
        for name in ["One", "Two", "Three", "Four"] {
            repo.insert(Product::new(input(name, 20))).await.unwrap();
        }

        let all = repo.list(ProductQuery::default()).await.unwrap();
        let names: Vec<_> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["One", "Two", "Three", "Four"]);

        let page = repo
            .list(ProductQuery {
                limit: Some(2),
                offset: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();
        let names: Vec<_> = page.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Two", "Three"]);
    }

    #[tokio::test]
    async fn test_list_applies_price_range() {
        let repo = InMemoryProductRepository::new();
        for price in [10, 25, 40, 90] {
            repo.insert(Product::new(input("Item", price))).await.unwrap();
        }

        let result = repo
            .list(ProductQuery {
                price_min: Some(20),
                price_max: Some(40),
                ..Default::default()
            })
            .await
            .unwrap();

        let prices: Vec<_> = result.iter().map(|p| p.price).collect();
        assert_eq!(prices, [25, 40]);
    }

    #[tokio::test]
    async fn test_update_missing_product_returns_none() {
        let repo = InMemoryProductRepository::new();
        let result = repo
            .update(Uuid::now_v7(), UpdateProduct::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_returns_removed_product() {
        let repo = InMemoryProductRepository::new();
        let product = repo.insert(Product::new(input("Desk", 80))).await.unwrap();

        let removed = repo.delete(product.id).await.unwrap();
        assert_eq!(removed, Some(product.clone()));
        assert!(repo.get_by_id(product.id).await.unwrap().is_none());
        assert!(repo.delete(product.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_seeded_store() {
        let repo = InMemoryProductRepository::seeded(20);
        assert_eq!(repo.count().await.unwrap(), 20);

        let products = repo.list(ProductQuery::default()).await.unwrap();
        assert_eq!(products.iter().filter(|p| p.is_blocked).count(), 2);
        assert!(products.iter().all(|p| p.price >= 10));
    }
}
