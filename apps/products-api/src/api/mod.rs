//! API routes module

pub mod health;
pub mod products;

use axum::Router;
use axum_helpers::server::create_router;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create all API routes, nested under `/api` by the server builder
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// Full application: API, docs, health and shared middleware
pub async fn app(state: &AppState) -> std::io::Result<Router> {
    let root = health::router(state.clone());
    create_router::<ApiDoc>(routes(state), root, &state.config.cors).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment, ProductsConfig};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, cors::CorsConfig, server::ServerConfig};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_config(seed_count: usize) -> Config {
        Config {
            app: app_info!(),
            server: ServerConfig::default(),
            cors: CorsConfig::new(["http://localhost:3000"]),
            environment: Environment::Development,
            products: ProductsConfig {
                seed_count,
                ..Default::default()
            },
        }
    }

    async fn test_app(seed_count: usize) -> Router {
        app(&AppState::new(test_config(seed_count))).await.unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_seeded_products_are_listed() {
        let response = test_app(12)
            .await
            .oneshot(get("/api/products"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body.as_array().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn test_create_then_fetch_through_full_stack() {
        let app = test_app(0).await;

        let request = Request::builder()
            .method("POST")
            .uri("/api/products")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "name": "Chair", "price": 50 }).to_string()))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = json_body(response).await;

        let id = created["id"].as_str().unwrap();
        let response = app
            .oneshot(get(&format!("/api/products/{}", id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(json_body(response).await, created);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let response = test_app(0)
            .await
            .oneshot(get("/api/orders"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_health_and_ready() {
        let app = test_app(3).await;

        let response = app.clone().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["name"], "products_api");

        let response = app.oneshot(get("/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ready");
        assert_eq!(body["store"], "connected");
    }

    #[tokio::test]
    async fn test_health_wrong_method_is_json_405() {
        let request = Request::builder()
            .method("POST")
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = test_app(0).await.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response.headers().get("x-content-type-options").unwrap(),
            "nosniff"
        );
        assert_eq!(json_body(response).await["error"], "METHOD_NOT_ALLOWED");
    }

    #[tokio::test]
    async fn test_openapi_lists_product_paths() {
        let response = test_app(0)
            .await
            .oneshot(get("/api-docs/openapi.json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert!(body["paths"]["/api/products/{id}"].is_object());
    }
}
