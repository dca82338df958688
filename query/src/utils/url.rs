//! URI component helpers

use std::borrow::Cow;

use crate::error::{QueryError, Result};

/// Percent-encode a query-string value (everything but unreserved characters).
pub fn encode_component(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Reverse [`encode_component`].
pub fn decode_component(value: &str) -> Result<Cow<'_, str>> {
    urlencoding::decode(value).map_err(|e| QueryError::invalid_filter_param(e.to_string()))
}
