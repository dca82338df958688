//! Filter parsing
//!
//! Parses filter JSON (optionally URI-encoded, as carried in the `filter` URL
//! parameter) with a size limit.

use std::borrow::Cow;

use serde::de::{DeserializeOwned, IgnoredAny};

use crate::core::constants::MAX_FILTER_JSON_SIZE;
use crate::error::{QueryError, Result};
use crate::utils::url::decode_component;

/// Parse filter JSON. The literal `null` parses to `None`.
pub fn parse_filter_json<S: DeserializeOwned>(json: &str) -> Result<Option<S>> {
    if json.len() > MAX_FILTER_JSON_SIZE {
        return Err(QueryError::filter_too_large(json.len()));
    }

    serde_json::from_str(json).map_err(|e| QueryError::invalid_filter_param(e.to_string()))
}

/// Recover filter JSON from a `filter` URL parameter value.
///
/// The value is normally URI-encoded JSON. A value that is already valid JSON
/// of any kind (because a web framework decoded the query string before
/// handing it over) is returned as is. Encoded objects, arrays and strings
/// start with `%` and never parse as JSON; encoded numbers, booleans and
/// `null` are identical to their plain form.
pub fn decode_filter_param(param: &str) -> Result<Cow<'_, str>> {
    let trimmed = param.trim();
    if is_plain_json(trimmed) {
        return Ok(Cow::Borrowed(trimmed));
    }
    decode_component(trimmed)
}

fn is_plain_json(value: &str) -> bool {
    value.len() <= MAX_FILTER_JSON_SIZE && serde_json::from_str::<IgnoredAny>(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::types::{FilterNode, FilterNodeOrGroup, FilterOperator};
    use crate::utils::url::encode_component;

    #[test]
    fn test_parse_filter_json_valid() {
        let json = r#"{"field": "trace_id", "operator": "equals", "value": "abc123"}"#;
        let parsed: Option<FilterNodeOrGroup> = parse_filter_json(json).unwrap();
        assert_eq!(
            parsed,
            Some(FilterNodeOrGroup::Node(FilterNode::new(
                "trace_id",
                FilterOperator::Equals,
                "abc123"
            )))
        );
    }

    #[test]
    fn test_parse_filter_json_null() {
        let parsed: Option<FilterNodeOrGroup> = parse_filter_json("null").unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_parse_filter_json_invalid() {
        let result = parse_filter_json::<FilterNodeOrGroup>("not valid json");
        assert!(matches!(result, Err(QueryError::InvalidFilterParam(_))));
    }

    #[test]
    fn test_parse_filter_json_too_large() {
        let json = format!(
            r#"{{"field": "{}", "operator": "equals"}}"#,
            "a".repeat(MAX_FILTER_JSON_SIZE)
        );
        let result = parse_filter_json::<FilterNodeOrGroup>(&json);
        assert!(matches!(result, Err(QueryError::FilterTooLarge { .. })));
    }

    #[test]
    fn test_decode_filter_param_encoded() {
        let json = r#"{"field":"name","operator":"like","value":"%ann%"}"#;
        let encoded = encode_component(json);
        assert_eq!(decode_filter_param(&encoded).unwrap(), json);
    }

    #[test]
    fn test_decode_filter_param_plain_json_passthrough() {
        let json = r#"{"field":"name","operator":"like","value":"%ann%"}"#;
        assert_eq!(decode_filter_param(json).unwrap(), json);
    }

    #[test]
    fn test_decode_filter_param_plain_scalar_passthrough() {
        assert_eq!(decode_filter_param(r#""a%20b""#).unwrap(), r#""a%20b""#);
        assert_eq!(decode_filter_param(r#""50%""#).unwrap(), r#""50%""#);
        assert_eq!(decode_filter_param("42").unwrap(), "42");
        assert_eq!(decode_filter_param("null").unwrap(), "null");
    }

    #[test]
    fn test_decode_filter_param_encoded_scalar() {
        let encoded = encode_component(r#""a%20b""#);
        assert_eq!(encoded, "%22a%2520b%22");
        assert_eq!(decode_filter_param(&encoded).unwrap(), r#""a%20b""#);
    }
}
