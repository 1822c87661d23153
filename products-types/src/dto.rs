//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::constants::{BASE_CURRENCY, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_START};

// ─────────────────────────────────────────────────────────────────────────────
// Product DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Query string for `GET /Product`.
#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Number of products to skip
    #[serde(default = "default_page_start")]
    #[param(default = 0)]
    pub page_start: i32,
    /// Maximum number of products to return
    #[serde(default = "default_page_size")]
    #[param(default = 5)]
    pub page_size: i32,
    /// Target currency for prices
    #[serde(default = "default_currency")]
    #[param(default = "GBP")]
    pub to_currency: String,
}

impl ProductQuery {
    /// Whether the pagination parameters are acceptable.
    ///
    /// `page_start == page_size` is allowed; a start past the size or any
    /// negative value is not.
    pub fn has_valid_page(&self) -> bool {
        !(self.page_start > self.page_size || self.page_start < 0 || self.page_size < 0)
    }
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            page_start: DEFAULT_PAGE_START,
            page_size: DEFAULT_PAGE_SIZE,
            to_currency: default_currency(),
        }
    }
}

fn default_page_start() -> i32 {
    DEFAULT_PAGE_START
}

fn default_page_size() -> i32 {
    DEFAULT_PAGE_SIZE
}

fn default_currency() -> String {
    BASE_CURRENCY.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page_start: i32, page_size: i32) -> ProductQuery {
        ProductQuery {
            page_start,
            page_size,
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let q: ProductQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.page_start, 0);
        assert_eq!(q.page_size, 5);
        assert_eq!(q.to_currency, "GBP");
    }

    #[test]
    fn test_start_equal_to_size_is_accepted() {
        assert!(query(5, 5).has_valid_page());
    }

    #[test]
    fn test_start_past_size_is_rejected() {
        assert!(!query(6, 5).has_valid_page());
    }

    #[test]
    fn test_negative_values_are_rejected() {
        assert!(!query(-1, 5).has_valid_page());
        assert!(!query(-2, -1).has_valid_page());
    }
}
