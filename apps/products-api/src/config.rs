//! Configuration for Products API

use axum::http::StatusCode;
use core_config::{
    app_info, cors::CorsConfig, env_parse_or, server::ServerConfig, AppInfo, ConfigError,
    FromEnv,
};

pub use core_config::Environment;

/// Products-specific settings
#[derive(Clone, Debug)]
pub struct ProductsConfig {
    /// Sample products generated into the store at startup
    pub seed_count: usize,
    /// Status answered by a successful `GET /api/products/{id}`
    pub find_one_status: StatusCode,
}

impl FromEnv for ProductsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let seed_count = env_parse_or("PRODUCTS_SEED_COUNT", 100usize)?;

        let find_one_status = match env_parse_or("PRODUCTS_FIND_ONE_STATUS", 302u16)? {
            200 => StatusCode::OK,
            302 => StatusCode::FOUND,
            other => {
                return Err(ConfigError::ParseError {
                    key: "PRODUCTS_FIND_ONE_STATUS".to_string(),
                    details: format!("expected 200 or 302, got {}", other),
                })
            }
        };

        Ok(Self {
            seed_count,
            find_one_status,
        })
    }
}

impl Default for ProductsConfig {
    fn default() -> Self {
        Self {
            seed_count: 100,
            find_one_status: StatusCode::FOUND,
        }
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
    pub products: ProductsConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let cors = CorsConfig::from_env()?;
        let products = ProductsConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            cors,
            environment,
            products,
        })
    }
}
