//! End-to-end tests running the client against a live server on a random port.

use std::sync::Arc;

use exchange_rates::{MemoryRateCache, StaticRateSource};
use products_client::{ClientError, ProductsClient};
use products_hex::{ProductService, RateRefresher, inbound::HttpServer};
use products_repo::InMemoryProductRepo;
use products_types::ExchangeRate;
use rust_decimal_macros::dec;
use tokio::net::TcpListener;

/// Starts a server with GBP->EUR loaded and returns a client pointed at it.
async fn start_server() -> ProductsClient {
    let cache = Arc::new(MemoryRateCache::new());
    RateRefresher::new(
        StaticRateSource::new(vec![ExchangeRate::new("GBP", "EUR", dec!(1.1))]),
        cache.clone(),
    )
    .refresh_once()
    .unwrap();

    let service = ProductService::new(InMemoryProductRepo::with_catalogue(), cache);
    let router = HttpServer::new(service).router();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    ProductsClient::new(format!("http://{addr}/"))
}

#[tokio::test]
async fn test_health() {
    let client = start_server().await;
    assert!(client.health().await.unwrap());
}

#[tokio::test]
async fn test_list_products_in_euros() {
    let client = start_server().await;

    let results = client
        .list_products(Some(2), Some(3), Some("EUR"))
        .await
        .unwrap()
        .expect("page should not be empty");

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.currency, "EUR");
    assert_eq!(result.product_count, 3);
    assert_eq!(result.products[0].name, "Steak Bake");
    assert_eq!(result.products[0].price, dec!(1.32));
}

#[tokio::test]
async fn test_list_products_uses_server_defaults() {
    let client = start_server().await;

    let results = client.list_products(None, None, None).await.unwrap().unwrap();

    assert_eq!(results[0].currency, "GBP");
    assert_eq!(results[0].product_count, 5);
}

#[tokio::test]
async fn test_empty_page_is_none() {
    let client = start_server().await;

    let results = client.list_products(Some(8), Some(8), None).await.unwrap();
    assert!(results.is_none());
}

#[tokio::test]
async fn test_unknown_currency_is_api_error() {
    let client = start_server().await;

    let err = client
        .list_products(None, None, Some("JPY"))
        .await
        .unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Invalid currency value");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_bad_page_is_api_error() {
    let client = start_server().await;

    let err = client
        .list_products(Some(6), Some(5), None)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Api { status: 400, .. }));
}
