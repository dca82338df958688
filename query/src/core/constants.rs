// =============================================================================
// URL Parameter Keys
// =============================================================================

/// Query-string key for the 1-based page number
pub const PARAM_PAGE: &str = "page";

/// Query-string key for the number of rows per page
pub const PARAM_PAGE_SIZE: &str = "pageSize";

/// Query-string key for the encoded sort list
pub const PARAM_SORT: &str = "sort";

/// Query-string key for the URI-encoded filter JSON
pub const PARAM_FILTER: &str = "filter";

// =============================================================================
// Sort Encoding
// =============================================================================

/// Separates one sort entry from the next (`name:asc,age:desc`)
pub const SORT_ENTRY_DELIMITER: &str = ",";

/// Separates a field from its direction inside one sort entry
pub const SORT_DIRECTION_DELIMITER: &str = ":";

// =============================================================================
// SQL Keywords
// =============================================================================

/// Prefix added to the filter expression unless disabled in `ToSqlOptions`
pub const SQL_WHERE_PREFIX: &str = "where ";

/// Leading keyword of the sort fragment
pub const SQL_ORDER_BY: &str = "order by";

// =============================================================================
// Filter Limits
// =============================================================================

/// Maximum size of filter JSON in bytes (64KB)
pub const MAX_FILTER_JSON_SIZE: usize = 64 * 1024;
