//! Client tests against local axum servers on ephemeral ports

use admin_client::{ClientConfig, ClientError, FilterDescriptor, LoadStatus, ProductsPage};
use admin_server::db::DbService;
use admin_server::{Config, ServerState, build_app};
use axum::{Json, Router, http::StatusCode, routing::get};
use serde_json::{Value, json};
use shared::fixtures::product_rows;
use tempfile::TempDir;

/// Serve `router` on 127.0.0.1 and return its base URL
async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Real admin server with the demo menu
async fn spawn_admin_server() -> (String, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(tmp.path().to_string_lossy(), 0);
    let service = DbService::open(&config.database_dir()).await.unwrap();
    service.seed_demo_catalog().await.unwrap();
    let url = spawn(build_app(ServerState::new(config, service.db))).await;
    (url, tmp)
}

#[tokio::test]
async fn fetch_skips_malformed_rows() {
    async fn menu() -> Json<Value> {
        let mut rows = serde_json::to_value(product_rows()).unwrap();
        let list = rows.as_array_mut().unwrap();
        list.insert(1, json!({ "id": 42, "name": null }));
        Json(rows)
    }

    let url = spawn(Router::new().route("/menu", get(menu))).await;
    let client = ClientConfig::new(url).build_http_client().unwrap();

    let records = client.fetch_products().await.unwrap();
    assert_eq!(records, product_rows());
}

#[tokio::test]
async fn server_error_is_retryable_and_keeps_rows() {
    async fn broken() -> (StatusCode, Json<Value>) {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "code": 9002, "message": "Database error: disk full" })),
        )
    }

    let url = spawn(Router::new().route("/menu", get(broken))).await;
    let client = ClientConfig::new(url).build_http_client().unwrap();

    let mut page = ProductsPage::with_records(product_rows());
    page.reload(&client).await;

    match page.status() {
        LoadStatus::Failed { message, retryable } => {
            assert!(*retryable);
            assert!(message.contains("disk full"));
        }
        other => panic!("unexpected status {other:?}"),
    }
    assert_eq!(page.visible_rows().len(), 4);
}

#[tokio::test]
async fn unreachable_server_is_retryable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ClientConfig::new(format!("http://{}", addr))
        .with_timeout(2)
        .build_http_client()
        .unwrap();
    let err = client.fetch_products().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn products_page_against_admin_server() {
    let (url, _tmp) = spawn_admin_server().await;
    let client = ClientConfig::new(url).build_http_client().unwrap();

    let mut page = ProductsPage::new();
    assert_eq!(page.status(), &LoadStatus::Idle);
    page.reload(&client).await;
    assert_eq!(page.status(), &LoadStatus::Loaded);
    assert_eq!(page.visible_rows().len(), 4);

    page.set_search("mint");
    assert_eq!(page.visible_rows().len(), 1);
    assert_eq!(page.visible_rows()[0].id, "SP000018");

    let detail = page.select("SP000018").unwrap();
    assert_eq!(detail.entry("Loại hàng").unwrap().value, "Chế biến");
}

#[tokio::test]
async fn server_side_query_matches_local_filtering() {
    let (url, _tmp) = spawn_admin_server().await;
    let client = ClientConfig::new(url).build_http_client().unwrap();

    let descriptor = FilterDescriptor::new().with_search("thuốc lá");
    let remote = client.query_products(&descriptor).await.unwrap();

    let mut page = ProductsPage::new();
    page.reload(&client).await;
    page.set_search("thuốc lá");

    assert_eq!(remote.as_slice(), page.visible_rows());
    assert_eq!(remote.len(), 3);
}

#[tokio::test]
async fn detail_and_filter_config() {
    let (url, _tmp) = spawn_admin_server().await;
    let client = ClientConfig::new(url).build_http_client().unwrap();

    let config = client.filter_config().await.unwrap();
    assert_eq!(config, admin_client::FilterConfig::products());

    let detail = client.product_detail("SP000023").await.unwrap();
    assert_eq!(detail.product_name, "Thuốc lá Vinataba");

    let err = client.product_detail("SP404").await.unwrap_err();
    match err {
        ClientError::NotFound(message) => assert!(message.contains("SP404")),
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn non_json_success_body_is_invalid_response() {
    async fn html() -> &'static str {
        "<html>maintenance</html>"
    }

    let url = spawn(Router::new().route("/menu/filters", get(html))).await;
    let client = ClientConfig::new(url).build_http_client().unwrap();

    let err = client.filter_config().await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)), "{err:?}");
    assert!(!err.is_retryable());
}
