//! Products API routes

use axum::Router;
use domain_products::{handlers, RouterOptions};
use std::sync::Arc;

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    let options = RouterOptions {
        find_one_status: state.config.products.find_one_status,
    };
    handlers::router(Arc::clone(&state.products), options)
}
