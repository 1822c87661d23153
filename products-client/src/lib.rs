//! # Products Client SDK
//!
//! A typed Rust client for the Products API.

use products_types::ConversionResult;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Products API client.
pub struct ProductsClient {
    base_url: String,
    http: Client,
}

impl ProductsClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Lists a page of products priced in `to_currency`.
    ///
    /// Returns `None` when the server answers 204 (the page is empty).
    /// Parameters left as `None` fall back to the server defaults.
    pub async fn list_products(
        &self,
        page_start: Option<i32>,
        page_size: Option<i32>,
        to_currency: Option<&str>,
    ) -> Result<Option<Vec<ConversionResult>>, ClientError> {
        let query = product_query(page_start, page_size, to_currency);
        let resp = self
            .http
            .get(format!("{}/Product", self.base_url))
            .query(&query)
            .send()
            .await?;

        if resp.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        self.handle_response(resp).await.map(Some)
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            // 400/404 carry a plain-text message, 500 a JSON object with `error`.
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

fn product_query(
    page_start: Option<i32>,
    page_size: Option<i32>,
    to_currency: Option<&str>,
) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(start) = page_start {
        query.push(("pageStart", start.to_string()));
    }
    if let Some(size) = page_size {
        query.push(("pageSize", size.to_string()));
    }
    if let Some(currency) = to_currency {
        query.push(("toCurrency", currency.to_string()));
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ProductsClient::new("http://localhost:3000");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = ProductsClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_query_omits_unset_params() {
        assert!(product_query(None, None, None).is_empty());

        let query = product_query(Some(2), None, Some("EUR"));
        assert_eq!(
            query,
            vec![("pageStart", "2".to_string()), ("toCurrency", "EUR".to_string())]
        );
    }
}
