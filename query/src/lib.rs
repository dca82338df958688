//! # data-query
//!
//! Composable, serializable query specifications: a filter tree, an ordered
//! sort list and a page window, kept together in one mutable [`DataQuery`].
//!
//! A query renders to raw SQL fragments (`where ...`, `order by ...`,
//! `limit ... offset ...`) and to URL parameters (`page`, `pageSize`, `sort`,
//! `filter`), and can be rebuilt from those URL parameters.
//!
//! Nothing here executes SQL or binds parameters; fragments are plain text
//! meant to be appended to a statement the caller owns.

pub mod core;
pub mod error;
pub mod filter;
pub mod paging;
pub mod query;
pub mod sorting;
pub mod utils;

pub use crate::core::config::field_transformer;
pub use crate::core::{DataQueryOptions, FieldTransformer, ToSqlOptions};
pub use error::{QueryError, Result};
pub use filter::{
    DataFilter, FilterGroup, FilterNode, FilterNodeOrGroup, FilterOperator, FilterTree,
};
pub use paging::{Paging, PagingRecord, PagingUrlParams};
pub use query::{DataQuery, DataQueryRecord, DataQuerySql, DataQueryUrlParams};
pub use sorting::{SortDirection, SortEntry, Sorting, SortingUrlParams, parse_sorting_url_param};
