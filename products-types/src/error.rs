//! Error types for the products service.

/// Failures reading exchange rates from configuration.
#[derive(Debug, thiserror::Error)]
pub enum RateSourceError {
    #[error("Failed to read rate configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed rate configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Repository-level errors (product data source failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Data source error: {0}")]
    DataSource(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::DataSource(e) => AppError::Internal(e),
        }
    }
}
