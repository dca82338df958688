//! Filter tree type definitions
//!
//! A filter is either a single predicate node or a group of children combined
//! with `and`/`or`. Groups nest arbitrarily.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::config::FieldTransformer;

use super::builder::{group_to_sql, node_to_sql};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Like,
    NotLike,
    In,
    NotIn,
    IsNull,
    IsNotNull,
}

impl FilterOperator {
    pub fn as_sql(&self) -> &'static str {
        match self {
            FilterOperator::Equals => "=",
            FilterOperator::NotEquals => "!=",
            FilterOperator::GreaterThan => ">",
            FilterOperator::GreaterThanOrEqual => ">=",
            FilterOperator::LessThan => "<",
            FilterOperator::LessThanOrEqual => "<=",
            FilterOperator::Like => "like",
            FilterOperator::NotLike => "not like",
            FilterOperator::In => "in",
            FilterOperator::NotIn => "not in",
            FilterOperator::IsNull => "is null",
            FilterOperator::IsNotNull => "is not null",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combinator {
    #[default]
    And,
    Or,
}

impl Combinator {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Combinator::And => "and",
            Combinator::Or => "or",
        }
    }
}

/// Single predicate: `<field> <operator> <value>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterNode {
    pub field: String,
    pub operator: FilterOperator,
    /// Ignored by `is_null` / `is_not_null`
    #[serde(default)]
    pub value: Value,
}

impl FilterNode {
    pub fn new(
        field: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    pub fn to_sql(&self, transformer: Option<&FieldTransformer>) -> String {
        node_to_sql(self, transformer)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub combinator: Combinator,
    #[serde(default)]
    pub children: Vec<FilterNodeOrGroup>,
}

impl FilterGroup {
    pub fn and(children: Vec<FilterNodeOrGroup>) -> Self {
        Self {
            combinator: Combinator::And,
            children,
        }
    }

    pub fn or(children: Vec<FilterNodeOrGroup>) -> Self {
        Self {
            combinator: Combinator::Or,
            children,
        }
    }

    /// `None` when no child renders anything
    pub fn to_sql(&self, transformer: Option<&FieldTransformer>) -> Option<String> {
        group_to_sql(self, transformer)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterNodeOrGroup {
    Group(FilterGroup),
    Node(FilterNode),
}

impl FilterNodeOrGroup {
    pub fn to_sql(&self, transformer: Option<&FieldTransformer>) -> Option<String> {
        match self {
            FilterNodeOrGroup::Group(group) => group.to_sql(transformer),
            FilterNodeOrGroup::Node(node) => Some(node.to_sql(transformer)),
        }
    }
}

impl From<FilterNode> for FilterNodeOrGroup {
    fn from(node: FilterNode) -> Self {
        FilterNodeOrGroup::Node(node)
    }
}

impl From<FilterGroup> for FilterNodeOrGroup {
    fn from(group: FilterGroup) -> Self {
        FilterNodeOrGroup::Group(group)
    }
}
