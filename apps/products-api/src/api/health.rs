//! Health and readiness endpoints

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use axum_helpers::server::{health_router, run_health_checks, HealthCheckFuture};

use crate::state::AppState;

/// Readiness: the product store answers.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "store",
        Box::pin(async {
            state
                .products
                .count()
                .await
                .map(|_| ())
                .map_err(|e| format!("Product store check failed: {}", e))
        }),
    )];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}

/// `/health` and `/ready`, mounted at the root
pub fn router(state: AppState) -> Router {
    let app_info = state.config.app;
    Router::new()
        .route("/ready", get(ready_handler))
        .with_state(state)
        .merge(health_router(app_info))
}
