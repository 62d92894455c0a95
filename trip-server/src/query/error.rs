//! Query encoding error types.

/// Errors raised while building a query string.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("query encoding failed: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}
