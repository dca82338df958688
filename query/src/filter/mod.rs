//! Filter axis of a data query
//!
//! [`DataFilter`] is the capability a [`DataQuery`](crate::DataQuery) needs
//! from a filter engine: hold a tree, replace it, render it as a boolean SQL
//! expression and serialize it to JSON. [`FilterTree`] is the built-in
//! engine over [`FilterNodeOrGroup`]; any other engine can be plugged in by
//! implementing the trait.
//!
//! ## Usage
//!
//! ```
//! use data_query::filter::{DataFilter, FilterGroup, FilterNode, FilterOperator, FilterTree};
//!
//! let tree = FilterTree::new(Some(
//!     FilterGroup::and(vec![
//!         FilterNode::new("status", FilterOperator::Equals, "active").into(),
//!         FilterNode::new("age", FilterOperator::GreaterThanOrEqual, 21).into(),
//!     ])
//!     .into(),
//! ));
//! assert_eq!(
//!     tree.to_sql(None).as_deref(),
//!     Some("(status = 'active' and age >= 21)")
//! );
//! ```

mod builder;
mod parser;
mod types;

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::config::FieldTransformer;
use crate::error::Result;

pub use parser::{decode_filter_param, parse_filter_json};
pub use types::{Combinator, FilterGroup, FilterNode, FilterNodeOrGroup, FilterOperator};

/// Filter engine consumed by the query orchestrator
pub trait DataFilter {
    /// Plain, serializable form of the filter tree
    type Spec: Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned;

    fn new(initial: Option<Self::Spec>) -> Self;

    /// Replace the tree. `None` leaves the current tree in place.
    fn update_filter(&mut self, spec: Option<Self::Spec>);

    /// Remove the tree entirely.
    fn clear(&mut self);

    fn value(&self) -> Option<&Self::Spec>;

    /// Boolean SQL expression, or `None` when there is nothing to filter on.
    fn to_sql(&self, transformer: Option<&FieldTransformer>) -> Option<String>;

    /// JSON form of the current tree; `null` when empty.
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.value())?)
    }

    /// Parse the JSON produced by [`to_json`](DataFilter::to_json).
    fn from_json(json: &str) -> Result<Option<Self::Spec>> {
        parse_filter_json(json)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterTree {
    root: Option<FilterNodeOrGroup>,
}

impl DataFilter for FilterTree {
    type Spec = FilterNodeOrGroup;

    fn new(initial: Option<FilterNodeOrGroup>) -> Self {
        Self { root: initial }
    }

    fn update_filter(&mut self, spec: Option<FilterNodeOrGroup>) {
        if let Some(spec) = spec {
            self.root = Some(spec);
        }
    }

    fn clear(&mut self) {
        self.root = None;
    }

    fn value(&self) -> Option<&FilterNodeOrGroup> {
        self.root.as_ref()
    }

    fn to_sql(&self, transformer: Option<&FieldTransformer>) -> Option<String> {
        self.root.as_ref()?.to_sql(transformer)
    }
}
