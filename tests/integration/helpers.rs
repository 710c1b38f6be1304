//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use catalog_api::AppState;
use catalog_core::config::{AppConfig, DatabaseConfig, SeedConfig};
use catalog_database::DatabasePool;
use catalog_database::migration::run_migrations;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db: DatabasePool,
}

impl TestApp {
    /// Create a new test application over a fresh in-memory database
    pub async fn new() -> Self {
        let config = AppConfig {
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                ..DatabaseConfig::default()
            },
            seed: SeedConfig {
                enabled: false,
                ..SeedConfig::default()
            },
            ..AppConfig::default()
        };

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let router = catalog_api::build_app(AppState::new(config, db.clone()));

        Self { router, db }
    }

    /// Send a JSON request
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.request_raw(method, path, body_str).await
    }

    /// Send a request with an arbitrary body
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        body: impl Into<Body>,
    ) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(body.into())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Create a category and return its id
    pub async fn create_category(&self, name: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/v1/categories",
                Some(json!({ "nome": name, "descricao": "Categoria de teste" })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.id()
    }

    /// Create a product and return its id
    pub async fn create_product(&self, code: &str, category_id: i64) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/v1/products",
                Some(json!({
                    "codigo": code,
                    "descricao": "Produto de teste",
                    "preco": 99.9,
                    "categoria_id": category_id,
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.id()
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `id` field of the body
    pub fn id(&self) -> i64 {
        self.body["id"].as_i64().expect("response has an id")
    }

    /// The `error` field of the body
    pub fn error(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}
