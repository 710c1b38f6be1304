//! Integration tests for product endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_product_returns_nested_category() {
    let app = helpers::TestApp::new().await;
    let category_id = app.create_category("Eletrônicos").await;

    let response = app
        .request(
            "POST",
            "/api/v1/products",
            Some(json!({
                "codigo": "PROD001",
                "descricao": "Notebook Dell",
                "preco": 3599.90,
                "categoria_id": category_id,
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["codigo"], "PROD001");
    assert_eq!(response.body["preco"], 3599.9);
    assert_eq!(response.body["categoria_id"], category_id);
    assert_eq!(response.body["categoria"]["nome"], "Eletrônicos");
}

#[tokio::test]
async fn test_duplicate_code_conflicts_and_is_not_stored() {
    let app = helpers::TestApp::new().await;
    let category_id = app.create_category("Eletrônicos").await;
    app.create_product("PROD001", category_id).await;

    let response = app
        .request(
            "POST",
            "/api/v1/products",
            Some(json!({
                "codigo": "PROD001",
                "descricao": "Outro produto qualquer",
                "preco": 10.0,
                "categoria_id": category_id,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let list = app.request("GET", "/api/v1/products", None).await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body["total"], 1);
}

#[tokio::test]
async fn test_create_product_shape_errors_use_wire_names() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/products",
            Some(json!({
                "codigo": "",
                "descricao": "ab",
                "preco": 0,
                "categoria_id": 0,
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Validation failed");
    let details = response.body["details"].as_object().expect("details");
    for field in ["codigo", "descricao", "preco", "categoria_id"] {
        assert!(details.contains_key(field), "missing {field}");
    }
}

#[tokio::test]
async fn test_create_product_unknown_category() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/products",
            Some(json!({
                "codigo": "PROD001",
                "descricao": "Notebook",
                "preco": 10.5,
                "categoria_id": 4242,
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["details"]["categoria_id"], "Category not found");
}

#[tokio::test]
async fn test_update_product_partial_keeps_other_fields() {
    let app = helpers::TestApp::new().await;
    let category_id = app.create_category("Eletrônicos").await;
    let id = app.create_product("PROD001", category_id).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/products/{id}"),
            Some(json!({ "preco": 150.0 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["preco"], 150.0);
    assert_eq!(response.body["codigo"], "PROD001");
    assert_eq!(response.body["descricao"], "Produto de teste");
    assert_eq!(response.body["categoria_id"], category_id);
}

#[tokio::test]
async fn test_update_product_blank_code_rejected() {
    let app = helpers::TestApp::new().await;
    let category_id = app.create_category("Eletrônicos").await;
    let id = app.create_product("PROD001", category_id).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/products/{id}"),
            Some(json!({ "codigo": "  ", "descricao": "    " })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["details"]["codigo"].is_string());
    assert!(response.body["details"]["descricao"].is_string());

    let response = app
        .request("GET", &format!("/api/v1/products/{id}"), None)
        .await;
    assert_eq!(response.body["codigo"], "PROD001");
}

#[tokio::test]
async fn test_update_product_moves_category() {
    let app = helpers::TestApp::new().await;
    let from = app.create_category("Origem").await;
    let to = app.create_category("Destino").await;
    let id = app.create_product("MOVE-1", from).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/products/{id}"),
            Some(json!({ "categoria_id": to })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["categoria_id"], to);
    assert_eq!(response.body["categoria"]["nome"], "Destino");

    let response = app
        .request("DELETE", &format!("/api/v1/categories/{from}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_missing_product() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("PUT", "/api/v1/products/77", Some(json!({ "preco": 1.0 })))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error(), "Product not found");
}

#[tokio::test]
async fn test_list_products_by_category() {
    let app = helpers::TestApp::new().await;
    let books = app.create_category("Livros").await;
    let toys = app.create_category("Brinquedos").await;
    app.create_product("L-1", books).await;
    app.create_product("L-2", books).await;
    app.create_product("B-1", toys).await;

    let response = app
        .request("GET", &format!("/api/v1/products/category/{books}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 2);
    assert_eq!(response.body["data"].as_array().map(Vec::len), Some(2));

    let response = app
        .request("GET", "/api/v1/products/category/9999", None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("GET", "/api/v1/products/category/livros", None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_product_twice() {
    let app = helpers::TestApp::new().await;
    let category_id = app.create_category("Eletrônicos").await;
    let id = app.create_product("PROD001", category_id).await;

    let response = app
        .request("DELETE", &format!("/api/v1/products/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Product deleted successfully");

    let response = app
        .request("DELETE", &format!("/api/v1/products/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let app = helpers::TestApp::new().await;
    let category_id = app.create_category("Eletrônicos").await;
    let first = app.create_product("A-1", category_id).await;
    app.request("DELETE", &format!("/api/v1/products/{first}"), None)
        .await;

    let second = app.create_product("A-2", category_id).await;
    assert!(second > first);

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(app.db.pool())
        .await
        .expect("count");
    assert_eq!(stored, 1);
}

#[tokio::test]
async fn test_storage_unique_violation_surfaces_as_generic_500() {
    use axum::response::IntoResponse;
    use catalog_api::ApiError;
    use catalog_core::config::PaginationConfig;
    use catalog_core::context::RequestContext;
    use catalog_database::repositories::ProductRepository;
    use catalog_service::CrudService;
    use catalog_service::product::{CreateProductRequest, ProductMapper};

    let app = helpers::TestApp::new().await;
    let category_id = app.create_category("Eletrônicos").await;

    // No business validator, so the duplicate reaches the unique index.
    let unchecked = CrudService::new(
        ProductRepository::products(app.db.pool().clone()),
        ProductMapper,
        PaginationConfig::default(),
    );
    let ctx = RequestContext::new();
    let request = CreateProductRequest {
        code: "RACE-1".to_string(),
        description: "Produto disputado".to_string(),
        price: 10.0,
        category_id,
    };
    unchecked.create(&ctx, request.clone()).await.expect("first insert");

    let err = unchecked
        .create(&ctx, request)
        .await
        .expect_err("unique index");
    let response = ApiError::from(err).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body");
    assert_eq!(&body[..], br#"{"error":"Internal server error"}"#);

    let list = app.request("GET", "/api/v1/products", None).await;
    assert_eq!(list.body["total"], 1);
}
