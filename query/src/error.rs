//! Error type for query rehydration and serialization
//!
//! Paging and sorting parameters never fail: malformed values degrade to
//! absent/empty. Only the filter axis carries structured data that can be
//! rejected, besides a query string that cannot be split at all.

use thiserror::Error;

use crate::core::constants::MAX_FILTER_JSON_SIZE;

pub type Result<T> = std::result::Result<T, QueryError>;

#[derive(Error, Debug)]
pub enum QueryError {
    /// The `filter` URL parameter could not be decoded or parsed
    #[error("Invalid filter parameter: {0}")]
    InvalidFilterParam(String),

    /// The `filter` JSON exceeds the accepted size
    #[error("Filter JSON is {size} bytes, maximum is {max} bytes")]
    FilterTooLarge { size: usize, max: usize },

    /// The current filter could not be serialized
    #[error("Failed to serialize filter: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A query string could not be split into key/value pairs
    #[error("Invalid query string: {0}")]
    QueryString(#[from] serde_urlencoded::de::Error),
}

impl QueryError {
    pub fn invalid_filter_param(message: impl Into<String>) -> Self {
        Self::InvalidFilterParam(message.into())
    }

    pub fn filter_too_large(size: usize) -> Self {
        Self::FilterTooLarge {
            size,
            max: MAX_FILTER_JSON_SIZE,
        }
    }
}
