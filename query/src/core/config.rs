use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::sorting::SortEntry;

/// Rewrites a field name into the identifier used in rendered SQL
/// (e.g. an API alias into a quoted column name).
pub type FieldTransformer = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Wrap a closure as a [`FieldTransformer`].
pub fn field_transformer<F>(f: F) -> FieldTransformer
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    Arc::new(f)
}

// =============================================================================
// Construction Options
// =============================================================================

/// Initial state of a [`DataQuery`](crate::DataQuery).
///
/// Every field is optional. Absent sorting and filter start empty. The
/// transformers are not part of the serialized form and are only settable
/// in code.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQueryOptions<S> {
    #[serde(default)]
    pub sorting: Vec<SortEntry>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub filter: Option<S>,
    #[serde(skip)]
    pub sorting_transformer: Option<FieldTransformer>,
    #[serde(skip)]
    pub filter_transformer: Option<FieldTransformer>,
}

impl<S> Default for DataQueryOptions<S> {
    fn default() -> Self {
        Self {
            sorting: Vec::new(),
            page: None,
            page_size: None,
            filter: None,
            sorting_transformer: None,
            filter_transformer: None,
        }
    }
}

impl<S> DataQueryOptions<S> {
    pub fn with_sorting(mut self, sorting: Vec<SortEntry>) -> Self {
        self.sorting = sorting;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_filter(mut self, filter: S) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Default transformer for sort field names, used when [`ToSqlOptions`]
    /// does not supply one.
    pub fn with_sorting_transformer(mut self, transformer: FieldTransformer) -> Self {
        self.sorting_transformer = Some(transformer);
        self
    }

    /// Default transformer for filter field names, used when [`ToSqlOptions`]
    /// does not supply one.
    pub fn with_filter_transformer(mut self, transformer: FieldTransformer) -> Self {
        self.filter_transformer = Some(transformer);
        self
    }
}

impl<S: fmt::Debug> fmt::Debug for DataQueryOptions<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataQueryOptions")
            .field("sorting", &self.sorting)
            .field("page", &self.page)
            .field("page_size", &self.page_size)
            .field("filter", &self.filter)
            .field("sorting_transformer", &self.sorting_transformer.is_some())
            .field("filter_transformer", &self.filter_transformer.is_some())
            .finish()
    }
}

// =============================================================================
// SQL Rendering Options
// =============================================================================

/// Options for [`DataQuery::to_sql`](crate::DataQuery::to_sql)
#[derive(Clone)]
pub struct ToSqlOptions {
    /// Prefix the filter expression with `where ` (default: true)
    pub include_where_word: bool,
    pub sorting_transformer: Option<FieldTransformer>,
    pub filter_transformer: Option<FieldTransformer>,
}

impl Default for ToSqlOptions {
    fn default() -> Self {
        Self {
            include_where_word: true,
            sorting_transformer: None,
            filter_transformer: None,
        }
    }
}

impl ToSqlOptions {
    pub fn without_where_word(mut self) -> Self {
        self.include_where_word = false;
        self
    }

    pub fn with_sorting_transformer(mut self, transformer: FieldTransformer) -> Self {
        self.sorting_transformer = Some(transformer);
        self
    }

    pub fn with_filter_transformer(mut self, transformer: FieldTransformer) -> Self {
        self.filter_transformer = Some(transformer);
        self
    }
}

impl fmt::Debug for ToSqlOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToSqlOptions")
            .field("include_where_word", &self.include_where_word)
            .field("sorting_transformer", &self.sorting_transformer.is_some())
            .field("filter_transformer", &self.filter_transformer.is_some())
            .finish()
    }
}
