//! Integration tests for `ProductSource`: merge order, supplemental
//! fallback, and lookups.

use rust_decimal::Decimal;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shophub_catalog::{CatalogClient, ProductSource};
use shophub_core::{CategoryFilter, Product, Rating, SortKey};

fn supplemental() -> Vec<Product> {
    vec![
        Product {
            id: 21,
            title: "Apple MacBook Air M2".to_string(),
            price: Decimal::new(119_999, 2),
            description: String::new(),
            category: "electronics".to_string(),
            image: String::new(),
            rating: Rating { rate: 4.8, count: 1250 },
        },
        Product {
            id: 25,
            title: "Zara Floral Summer Dress".to_string(),
            price: Decimal::new(4995, 2),
            description: String::new(),
            category: "women's clothing".to_string(),
            image: String::new(),
            rating: Rating { rate: 4.2, count: 1450 },
        },
    ]
}

fn source_for(base_url: &str) -> ProductSource {
    let client = CatalogClient::new(base_url, 5, "shophub-test/0.1").expect("client");
    ProductSource::new(client, supplemental())
}

fn catalog_json() -> serde_json::Value {
    json!([
        {"id": 1, "title": "Backpack", "price": 109.95, "description": "",
         "category": "men's clothing", "image": "", "rating": {"rate": 3.9, "count": 120}},
        {"id": 9, "title": "Portable External Hard Drive", "price": 64, "description": "",
         "category": "electronics", "image": "", "rating": {"rate": 3.3, "count": 203}}
    ])
}

async fn mount_catalog(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_json()))
        .mount(server)
        .await;
}

fn ids(products: &[Product]) -> Vec<u64> {
    products.iter().map(|p| p.id).collect()
}

#[tokio::test]
async fn all_products_appends_supplemental_after_catalog() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;

    let products = source_for(&server.uri()).all_products().await;
    assert_eq!(ids(&products), vec![1, 9, 21, 25]);
}

#[tokio::test]
async fn all_products_falls_back_to_supplemental_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let products = source_for(&server.uri()).all_products().await;
    assert_eq!(ids(&products), vec![21, 25]);
}

#[tokio::test]
async fn all_products_falls_back_when_catalog_unreachable() {
    let products = source_for("http://127.0.0.1:1").all_products().await;
    assert_eq!(ids(&products), vec![21, 25]);
}

#[tokio::test]
async fn all_products_falls_back_on_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let products = source_for(&server.uri()).all_products().await;
    assert_eq!(ids(&products), vec![21, 25]);
}

#[tokio::test]
async fn categories_from_catalog() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["electronics", "jewelery"])))
        .mount(&server)
        .await;

    let categories = source_for(&server.uri()).categories().await;
    assert_eq!(categories, vec!["electronics", "jewelery"]);
}

#[tokio::test]
async fn categories_fall_back_to_supplemental_labels() {
    let categories = source_for("http://127.0.0.1:1").categories().await;
    assert_eq!(categories, vec!["electronics", "women's clothing"]);
}

#[tokio::test]
async fn products_by_category_spans_catalog_and_supplemental() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;

    let electronics = source_for(&server.uri())
        .products_by_category("electronics")
        .await;
    assert_eq!(ids(&electronics), vec![9, 21]);
}

#[tokio::test]
async fn search_matches_title_or_category_case_insensitively() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;

    let source = source_for(&server.uri());
    assert_eq!(ids(&source.search("DRIVE").await), vec![9]);
    assert_eq!(ids(&source.search("clothing").await), vec![1, 25]);
}

#[tokio::test]
async fn browse_applies_filter_and_sort() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;

    let source = source_for(&server.uri());
    let cheapest_first = source
        .browse("", &CategoryFilter::All, SortKey::PriceLow)
        .await;
    assert_eq!(ids(&cheapest_first), vec![25, 9, 1, 21]);

    let electronics_by_rating = source
        .browse(
            "",
            &CategoryFilter::Only("electronics".to_string()),
            SortKey::Rating,
        )
        .await;
    assert_eq!(ids(&electronics_by_rating), vec![21, 9]);
}

#[tokio::test]
async fn product_by_id_resolves_supplemental_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let product = source_for(&server.uri())
        .product_by_id(25)
        .await
        .unwrap()
        .expect("supplemental product");
    assert_eq!(product.title, "Zara Floral Summer Dress");
}

#[tokio::test]
async fn product_by_id_fetches_catalog_product() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&catalog_json()[0]))
        .mount(&server)
        .await;

    let product = source_for(&server.uri())
        .product_by_id(1)
        .await
        .unwrap()
        .expect("catalog product");
    assert_eq!(product.title, "Backpack");
}

#[tokio::test]
async fn product_by_id_unknown_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = source_for(&server.uri()).product_by_id(404).await;
    assert!(matches!(result, Ok(None)), "expected Ok(None), got: {result:?}");
}
