//! Composition of the per-axis SQL fragments

use serde::Serialize;

use crate::core::constants::SQL_WHERE_PREFIX;
use crate::utils::sql::join_or_none;

/// SQL fragments rendered from a data query.
///
/// Every field follows the same rule: empty pieces are dropped, survivors
/// are joined by a single space, and nothing left means `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQuerySql {
    /// `where <expr>` (or the bare expression when the where word is off)
    #[serde(rename = "where")]
    pub where_clause: Option<String>,
    /// `order by ... limit ... offset ...`
    pub order_by_limit_offset: Option<String>,
    /// The two above joined
    pub where_order_by_limit_offset: Option<String>,
}

impl DataQuerySql {
    pub(crate) fn compose(
        filter_expr: Option<String>,
        order_by: Option<String>,
        limit_offset: Option<String>,
        include_where_word: bool,
    ) -> Self {
        let where_clause = filter_expr
            .filter(|expr| !expr.is_empty())
            .map(|expr| {
                if include_where_word {
                    format!("{}{}", SQL_WHERE_PREFIX, expr)
                } else {
                    expr
                }
            });
        let order_by_limit_offset = join_or_none([order_by, limit_offset], " ");
        let where_order_by_limit_offset = join_or_none(
            [where_clause.as_deref(), order_by_limit_offset.as_deref()],
            " ",
        );

        Self {
            where_clause,
            order_by_limit_offset,
            where_order_by_limit_offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_all_empty() {
        assert_eq!(
            DataQuerySql::compose(None, None, None, true),
            DataQuerySql::default()
        );
    }

    #[test]
    fn test_compose_where_only() {
        let sql = DataQuerySql::compose(Some("a = 1".to_string()), None, None, true);
        assert_eq!(sql.where_clause.as_deref(), Some("where a = 1"));
        assert_eq!(sql.order_by_limit_offset, None);
        assert_eq!(sql.where_order_by_limit_offset.as_deref(), Some("where a = 1"));
    }

    #[test]
    fn test_compose_without_where_word() {
        let sql = DataQuerySql::compose(
            Some("a = 1".to_string()),
            None,
            Some("limit 5".to_string()),
            false,
        );
        assert_eq!(sql.where_clause.as_deref(), Some("a = 1"));
        assert_eq!(sql.where_order_by_limit_offset.as_deref(), Some("a = 1 limit 5"));
    }

    #[test]
    fn test_compose_empty_filter_expression_is_dropped() {
        let sql = DataQuerySql::compose(Some(String::new()), None, None, true);
        assert_eq!(sql.where_clause, None);
    }

    #[test]
    fn test_compose_full() {
        let sql = DataQuerySql::compose(
            Some("a = 1".to_string()),
            Some("order by a asc".to_string()),
            Some("limit 10 offset 20".to_string()),
            true,
        );
        assert_eq!(
            sql.order_by_limit_offset.as_deref(),
            Some("order by a asc limit 10 offset 20")
        );
        assert_eq!(
            sql.where_order_by_limit_offset.as_deref(),
            Some("where a = 1 order by a asc limit 10 offset 20")
        );
    }

    #[test]
    fn test_serialize_uses_where_key() {
        let sql = DataQuerySql::compose(Some("a = 1".to_string()), None, None, true);
        let json = serde_json::to_value(&sql).unwrap();
        assert_eq!(json["where"], "where a = 1");
        assert!(json["orderByLimitOffset"].is_null());
    }
}
