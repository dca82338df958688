//! Data query orchestrator
//!
//! [`DataQuery`] owns one paging, one sorting and one filter component and is
//! the only handle callers mutate. Its snapshot accessors read the owned
//! components directly, so they always reflect the latest update.
//!
//! ## Usage
//!
//! ```
//! use data_query::{DataQuery, DataQueryOptions, SortEntry, ToSqlOptions};
//!
//! let mut query: DataQuery = DataQuery::new(
//!     DataQueryOptions::default()
//!         .with_page(1)
//!         .with_page_size(20)
//!         .with_sorting(vec![SortEntry::asc("name")]),
//! );
//! let sql = query.to_sql(&ToSqlOptions::default());
//! assert_eq!(
//!     sql.order_by_limit_offset.as_deref(),
//!     Some("order by name asc limit 20 offset 0")
//! );
//!
//! query.update_page(Some(3));
//! assert_eq!(query.to_url_params_string().unwrap(), "page=3&pageSize=20&sort=name%3Aasc");
//! ```

mod sql;
mod url;


use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::config::{DataQueryOptions, FieldTransformer, ToSqlOptions};
use crate::error::Result;
use crate::filter::{DataFilter, FilterTree, decode_filter_param};
use crate::paging::{Paging, PagingRecord};
use crate::sorting::{SortEntry, Sorting, parse_sorting_url_param};
use crate::utils::url::encode_component;

pub use sql::DataQuerySql;
pub use url::DataQueryUrlParams;

/// Plain snapshot of a data query, also used as a patch for
/// [`DataQuery::update`]: a `None` field leaves that axis untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQueryRecord<S> {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub sorting: Option<Vec<SortEntry>>,
    pub filter: Option<S>,
}

impl<S> Default for DataQueryRecord<S> {
    fn default() -> Self {
        Self {
            page: None,
            page_size: None,
            sorting: None,
            filter: None,
        }
    }
}

#[derive(Clone)]
pub struct DataQuery<F: DataFilter = FilterTree> {
    sorting: Sorting,
    paging: Paging,
    filter: F,
    sorting_transformer: Option<FieldTransformer>,
    filter_transformer: Option<FieldTransformer>,
}

impl<F: DataFilter> Default for DataQuery<F> {
    fn default() -> Self {
        Self::new(DataQueryOptions::default())
    }
}

impl<F: DataFilter> DataQuery<F> {
    pub fn new(options: DataQueryOptions<F::Spec>) -> Self {
        Self {
            sorting: Sorting::new(options.sorting),
            paging: Paging::new(PagingRecord {
                page: options.page,
                page_size: options.page_size,
            }),
            filter: F::new(options.filter),
            sorting_transformer: options.sorting_transformer,
            filter_transformer: options.filter_transformer,
        }
    }

    // -------------------------------------------------------------------------
    // Snapshot
    // -------------------------------------------------------------------------

    pub fn page(&self) -> Option<u32> {
        self.paging.page()
    }

    pub fn page_size(&self) -> Option<u32> {
        self.paging.page_size()
    }

    pub fn sorting(&self) -> &[SortEntry] {
        self.sorting.value()
    }

    pub fn filter(&self) -> Option<&F::Spec> {
        self.filter.value()
    }

    pub fn record(&self) -> DataQueryRecord<F::Spec> {
        DataQueryRecord {
            page: self.paging.page(),
            page_size: self.paging.page_size(),
            sorting: Some(self.sorting.value().to_vec()),
            filter: self.filter.value().cloned(),
        }
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Render the `where`, `order by ... limit ... offset` and combined
    /// fragments. Transformers in `options` take precedence over the ones
    /// given at construction.
    pub fn to_sql(&self, options: &ToSqlOptions) -> DataQuerySql {
        let sorting_transformer = options
            .sorting_transformer
            .as_ref()
            .or(self.sorting_transformer.as_ref());
        let filter_transformer = options
            .filter_transformer
            .as_ref()
            .or(self.filter_transformer.as_ref());

        DataQuerySql::compose(
            self.filter.to_sql(filter_transformer),
            self.sorting.to_sql(sorting_transformer),
            self.paging.to_sql(),
            options.include_where_word,
        )
    }

    /// Paging, sorting and filter parameters merged; `filter` carries the
    /// URI-encoded filter JSON and is absent when there is no filter.
    pub fn to_url_params(&self) -> Result<DataQueryUrlParams> {
        let filter = match self.filter.value() {
            Some(_) => Some(encode_component(&self.filter.to_json()?).into_owned()),
            None => None,
        };
        Ok(DataQueryUrlParams::merge(
            self.paging.to_url_params(),
            self.sorting.to_url_params(),
            filter,
        ))
    }

    pub fn to_url_params_string(&self) -> Result<String> {
        Ok(self.to_url_params()?.to_query_string())
    }

    // -------------------------------------------------------------------------
    // Rehydration
    // -------------------------------------------------------------------------

    /// Build the record described by `params` without touching any query.
    ///
    /// Sorting is always present in the result (empty when `sort` is absent);
    /// the other axes are `None` when their parameter is absent or malformed.
    /// A `filter` that is not valid JSON is an error.
    pub fn record_from_url_params(
        params: &DataQueryUrlParams,
    ) -> Result<DataQueryRecord<F::Spec>> {
        let paging =
            PagingRecord::from_url_params(params.page.as_deref(), params.page_size.as_deref());
        let sorting = parse_sorting_url_param(params.sort.as_deref());
        let filter = match params.filter.as_deref() {
            Some(raw) => F::from_json(&decode_filter_param(raw)?)?,
            None => None,
        };

        Ok(DataQueryRecord {
            page: paging.page,
            page_size: paging.page_size,
            sorting: Some(sorting),
            filter,
        })
    }

    /// Apply the state described by `params`. On error the query is left
    /// unchanged.
    pub fn from_url_params(&mut self, params: &DataQueryUrlParams) -> Result<&mut Self> {
        let record = Self::record_from_url_params(params)?;
        tracing::debug!(
            page = ?record.page,
            page_size = ?record.page_size,
            sort_entries = record.sorting.as_ref().map_or(0, Vec::len),
            has_filter = record.filter.is_some(),
            "Applying data query from URL parameters"
        );
        Ok(self.update(record))
    }

    pub fn from_url_params_string(&mut self, query: &str) -> Result<&mut Self> {
        self.from_url_params(&DataQueryUrlParams::from_query_string(query)?)
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Apply a patch: sorting, page, page size, then filter. `None` fields
    /// are no-ops.
    pub fn update(&mut self, record: DataQueryRecord<F::Spec>) -> &mut Self {
        self.update_sorting(record.sorting)
            .update_page(record.page)
            .update_page_size(record.page_size)
            .update_filter(record.filter)
    }

    pub fn update_sorting(&mut self, sorting: Option<Vec<SortEntry>>) -> &mut Self {
        if let Some(sorting) = sorting {
            self.sorting.update(sorting);
        }
        self
    }

    pub fn update_page(&mut self, page: Option<u32>) -> &mut Self {
        self.paging.update_page(page);
        self
    }

    pub fn update_page_size(&mut self, page_size: Option<u32>) -> &mut Self {
        self.paging.update_page_size(page_size);
        self
    }

    pub fn update_filter(&mut self, filter: Option<F::Spec>) -> &mut Self {
        self.filter.update_filter(filter);
        self
    }

    pub fn clear_filter(&mut self) -> &mut Self {
        self.filter.clear();
        self
    }

    pub fn clear_paging(&mut self) -> &mut Self {
        self.paging.clear();
        self
    }
}

impl<F: DataFilter + fmt::Debug> fmt::Debug for DataQuery<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataQuery")
            .field("sorting", &self.sorting)
            .field("paging", &self.paging)
            .field("filter", &self.filter)
            .field("sorting_transformer", &self.sorting_transformer.is_some())
            .field("filter_transformer", &self.filter_transformer.is_some())
            .finish()
    }
}
