//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use utoipa::OpenApi;

use products_types::constants::{INVALID_CURRENCY, INVALID_PAGE_REQUEST};
use products_types::{AppError, ProductQuery, ProductRepository, RateCache};

use crate::ProductService;
use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState<R: ProductRepository, C: RateCache> {
    pub service: ProductService<R, C>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            // Caller errors carry their fixed message as a plain-text body.
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            AppError::Internal(msg) => {
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = serde_json::json!({
                    "error": msg,
                    "code": status.as_u16()
                });
                (status, Json(body)).into_response()
            }
        }
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// OpenAPI document.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// List a page of products, optionally priced in another currency.
///
/// Validation order matters: pagination, then currency, then the page itself,
/// so an empty page is only reported for a currency already known to be valid.
#[tracing::instrument(skip(state))]
pub async fn get_products<R: ProductRepository, C: RateCache>(
    State(state): State<Arc<AppState<R, C>>>,
    Query(query): Query<ProductQuery>,
) -> Result<Response, ApiError> {
    tracing::info!(
        "Called GET /Product for params pageStart: {}, pageSize: {}, toCurrency: {}",
        query.page_start,
        query.page_size,
        query.to_currency
    );

    if !query.has_valid_page() {
        return Err(AppError::BadRequest(INVALID_PAGE_REQUEST.into()).into());
    }

    if !state.service.is_valid_currency(&query.to_currency) {
        return Err(AppError::NotFound(INVALID_CURRENCY.into()).into());
    }

    let products = state
        .service
        .get_products(
            Some(query.page_start),
            Some(query.page_size),
            &query.to_currency,
        )
        .await
        .inspect_err(|e| {
            tracing::error!(
                error = %e,
                "Error occurred for GET /Product for params pageStart: {}, pageSize: {}, toCurrency: {}",
                query.page_start,
                query.page_size,
                query.to_currency
            )
        })?;

    match products {
        Some(products) => Ok(Json(products).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
