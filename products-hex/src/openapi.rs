//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use products_types::{ConversionResult, ProductPrice, ProductQuery};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// List products with prices in the requested currency
#[utoipa::path(
    get,
    path = "/Product",
    tag = "products",
    params(ProductQuery),
    responses(
        (status = 200, description = "A single-element list holding the priced page", body = Vec<ConversionResult>),
        (status = 204, description = "No products on the requested page"),
        (status = 400, description = "Invalid page size or page start", body = String, example = json!("Invalid page size or page start")),
        (status = 404, description = "Unknown target currency", body = String, example = json!("Invalid currency value")),
        (status = 500, description = "Unexpected server fault")
    )
)]
async fn get_products() {}

/// OpenAPI documentation for the Products API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "1.0.0",
        description = "Paginated product listing with prices converted from GBP using periodically refreshed exchange rates.",
        license(name = "MIT"),
    ),
    paths(health, get_products),
    components(schemas(ConversionResult, ProductPrice)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "products", description = "Product listing and price conversion"),
    )
)]
pub struct ApiDoc;
