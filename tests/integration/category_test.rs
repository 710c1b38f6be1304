//! Integration tests for category endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_category_defaults_to_active() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/categories",
            Some(json!({ "nome": "Eletrônicos", "descricao": "Produtos eletrônicos" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["nome"], "Eletrônicos");
    assert_eq!(response.body["descricao"], "Produtos eletrônicos");
    assert_eq!(response.body["ativo"], true);
    assert!(response.body["created_at"].is_string());
}

#[tokio::test]
async fn test_create_category_shape_errors() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("POST", "/api/v1/categories", Some(json!({ "nome": "" })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Validation failed");
    assert!(response.body["details"]["nome"].is_string());
}

#[tokio::test]
async fn test_create_category_malformed_body() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request_raw("POST", "/api/v1/categories", "{\"nome\": ")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Could not process request");
}

#[tokio::test]
async fn test_duplicate_category_name_conflicts() {
    let app = helpers::TestApp::new().await;
    app.create_category("Livros").await;

    let response = app
        .request("POST", "/api/v1/categories", Some(json!({ "nome": "Livros" })))
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error(), "A category with this name already exists");
}

#[tokio::test]
async fn test_get_category_not_found_and_invalid_id() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/v1/categories/999", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error(), "Category not found");

    let response = app.request("GET", "/api/v1/categories/abc", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Invalid identifier");

    let response = app.request("DELETE", "/api/v1/categories/-4", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_categories_pages_do_not_overlap() {
    let app = helpers::TestApp::new().await;
    for name in ["Bebidas", "Brinquedos", "Calçados", "Ferramentas", "Jardim"] {
        app.create_category(name).await;
    }

    let first = app
        .request("GET", "/api/v1/categories?page=1&page_size=2", None)
        .await;
    let second = app
        .request("GET", "/api/v1/categories?page=2&page_size=2", None)
        .await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["total"], 5);
    assert_eq!(first.body["page"], 1);
    assert_eq!(first.body["page_size"], 2);
    assert_eq!(first.body["total_pages"], 3);

    let ids = |body: &serde_json::Value| -> Vec<i64> {
        body["data"]
            .as_array()
            .expect("data array")
            .iter()
            .filter_map(|c| c["id"].as_i64())
            .collect()
    };
    let (a, b) = (ids(&first.body), ids(&second.body));
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 2);
    assert!(a.iter().all(|id| !b.contains(id)));
}

#[tokio::test]
async fn test_list_categories_lenient_query() {
    let app = helpers::TestApp::new().await;
    app.create_category("Papelaria").await;

    let response = app
        .request("GET", "/api/v1/categories?page=abc&page_size=-3", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["page"], 1);
    assert_eq!(response.body["page_size"], 10);
    assert_eq!(response.body["total"], 1);
}

#[tokio::test]
async fn test_list_categories_page_beyond_range() {
    let app = helpers::TestApp::new().await;
    app.create_category("Papelaria").await;

    let response = app
        .request(
            "GET",
            "/api/v1/categories?page=9223372036854775807&page_size=10",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"], json!([]));
    assert_eq!(response.body["total"], 1);
    assert_eq!(response.body["page"], 9223372036854775807_u64);
}

#[tokio::test]
async fn test_update_category_blank_name_rejected() {
    let app = helpers::TestApp::new().await;
    let id = app.create_category("Esportes").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/categories/{id}"),
            Some(json!({ "nome": "   " })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Validation failed");
    assert!(response.body["details"]["nome"].is_string());

    let response = app
        .request("GET", &format!("/api/v1/categories/{id}"), None)
        .await;
    assert_eq!(response.body["nome"], "Esportes");
}

#[tokio::test]
async fn test_update_category_partial() {
    let app = helpers::TestApp::new().await;
    let id = app.create_category("Esportes").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/categories/{id}"),
            Some(json!({ "ativo": false })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["nome"], "Esportes");
    assert_eq!(response.body["descricao"], "Categoria de teste");
    assert_eq!(response.body["ativo"], false);
}

#[tokio::test]
async fn test_list_active_categories() {
    let app = helpers::TestApp::new().await;
    app.create_category("Música").await;
    let hidden = app.create_category("Arquivo").await;
    app.request(
        "PUT",
        &format!("/api/v1/categories/{hidden}"),
        Some(json!({ "ativo": false })),
    )
    .await;

    let response = app.request("GET", "/api/v1/categories/active", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<&str> = response
        .body
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|c| c["nome"].as_str())
        .collect();
    assert_eq!(names, vec!["Música"]);
}

#[tokio::test]
async fn test_category_with_products() {
    let app = helpers::TestApp::new().await;
    let category_id = app.create_category("Informática").await;
    app.create_product("NB-01", category_id).await;
    app.create_product("NB-02", category_id).await;

    let response = app
        .request("GET", &format!("/api/v1/categories/{category_id}/products"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["nome"], "Informática");
    assert_eq!(response.body["produtos"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_delete_referenced_category_conflicts_until_product_removed() {
    let app = helpers::TestApp::new().await;
    let category_id = app.create_category("Games").await;
    let product_id = app.create_product("CONSOLE-1", category_id).await;

    let response = app
        .request("DELETE", &format!("/api/v1/categories/{category_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error(), "Cannot delete a category that has products");

    let response = app
        .request("DELETE", &format!("/api/v1/products/{product_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("DELETE", &format!("/api/v1/categories/{category_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Category deleted successfully");

    let response = app
        .request("DELETE", &format!("/api/v1/categories/{category_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "healthy");
    assert_eq!(response.body["database"], "connected");
    assert!(response.headers.contains_key("x-request-id"));
}
