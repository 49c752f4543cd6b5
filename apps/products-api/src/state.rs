//! Application state management

use domain_products::{InMemoryProductRepository, ProductService};
use std::sync::Arc;

use crate::config::Config;

pub type Products = ProductService<InMemoryProductRepository>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub products: Arc<Products>,
}

impl AppState {
    /// Build the state, seeding the product store per configuration.
    pub fn new(config: Config) -> Self {
        let repository = InMemoryProductRepository::seeded(config.products.seed_count);
        Self {
            products: Arc::new(ProductService::new(repository)),
            config,
        }
    }
}
