//! SQL expression builder
//!
//! Renders filter nodes and groups as raw SQL text. Values are inlined as
//! literals; no parameter binding is produced.

use serde_json::Value;

use crate::core::config::FieldTransformer;
use crate::utils::sql::quote_literal;

use super::types::{FilterGroup, FilterNode, FilterOperator};

pub(super) fn node_to_sql(node: &FilterNode, transformer: Option<&FieldTransformer>) -> String {
    let field = match transformer {
        Some(t) => t(&node.field),
        None => node.field.clone(),
    };
    let op = node.operator.as_sql();

    match node.operator {
        FilterOperator::IsNull | FilterOperator::IsNotNull => format!("{} {}", field, op),
        FilterOperator::In | FilterOperator::NotIn => match render_list(&node.value) {
            Some(list) => format!("{} {} ({})", field, op, list),
            None => "1=1".to_string(),
        },
        _ => format!("{} {} {}", field, op, render_literal(&node.value)),
    }
}

pub(super) fn group_to_sql(
    group: &FilterGroup,
    transformer: Option<&FieldTransformer>,
) -> Option<String> {
    let mut parts: Vec<String> = group
        .children
        .iter()
        .filter_map(|child| child.to_sql(transformer))
        .collect();

    match parts.len() {
        0 => None,
        1 => parts.pop(),
        _ => {
            let separator = format!(" {} ", group.combinator.as_sql());
            Some(format!("({})", parts.join(separator.as_str())))
        }
    }
}

/// Comma-separated literals for `in`/`not in`; a scalar counts as a
/// one-element list. `None` for an empty list.
fn render_list(value: &Value) -> Option<String> {
    let items: Vec<String> = match value {
        Value::Array(items) => items.iter().map(render_literal).collect(),
        other => vec![render_literal(other)],
    };
    if items.is_empty() {
        None
    } else {
        Some(items.join(", "))
    }
}

fn render_literal(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote_literal(s),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(render_literal).collect();
            format!("({})", items.join(", "))
        }
        Value::Object(_) => quote_literal(&value.to_string()),
    }
}
