//! Products Domain
//!
//! CRUD over a products catalogue, layered the same way as the other domains:
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints + validation gates
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business rules (blocked products, pagination)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, schemas
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use domain_products::{
//!     handlers::{self, RouterOptions},
//!     InMemoryProductRepository, ProductService,
//! };
//!
//! let service = Arc::new(ProductService::new(InMemoryProductRepository::seeded(10)));
//! let router = handlers::router(service, RouterOptions::default());
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::{ApiDoc, RouterOptions};
pub use models::{CreateProduct, Product, ProductQuery, UpdateProduct};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
