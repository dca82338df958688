//! URL parameter form of a data query

use serde::{Deserialize, Serialize};

use crate::core::constants::{PARAM_FILTER, PARAM_PAGE, PARAM_PAGE_SIZE, PARAM_SORT};
use crate::error::Result;
use crate::paging::PagingUrlParams;
use crate::sorting::SortingUrlParams;
use crate::utils::url::encode_component;

/// All URL parameters of a data query; any subset may be absent.
///
/// `filter` holds URI-encoded JSON. The other values are plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQueryUrlParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl DataQueryUrlParams {
    pub(crate) fn merge(
        paging: PagingUrlParams,
        sorting: SortingUrlParams,
        filter: Option<String>,
    ) -> Self {
        Self {
            page: paging.page,
            page_size: paging.page_size,
            sort: sorting.sort,
            filter,
        }
    }

    /// Render as `key=value` pairs joined by `&`.
    ///
    /// Absent keys are left out; empty values are kept. The `filter` value is
    /// already encoded and is written verbatim.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::with_capacity(4);
        let plain = [
            (PARAM_PAGE, &self.page),
            (PARAM_PAGE_SIZE, &self.page_size),
            (PARAM_SORT, &self.sort),
        ];
        for (key, value) in plain {
            if let Some(value) = value {
                pairs.push(format!("{}={}", key, encode_component(value)));
            }
        }
        if let Some(filter) = &self.filter {
            pairs.push(format!("{}={}", PARAM_FILTER, filter));
        }
        pairs.join("&")
    }

    /// Parse a form-encoded query string, such as one produced by
    /// [`to_query_string`](Self::to_query_string).
    ///
    /// A leading `?` is ignored, `+` decodes to a space, unknown keys are
    /// ignored and the last occurrence of a key wins. Invalid UTF-8 decodes
    /// lossily. The decoded `filter` is re-encoded so it keeps the same form
    /// as [`DataQuery::to_url_params`](crate::DataQuery::to_url_params) gives.
    pub fn from_query_string(query: &str) -> Result<Self> {
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(query.trim_start_matches('?'))?;

        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                PARAM_PAGE => params.page = Some(value),
                PARAM_PAGE_SIZE => params.page_size = Some(value),
                PARAM_SORT => params.sort = Some(value),
                PARAM_FILTER => params.filter = Some(encode_component(&value).into_owned()),
                _ => tracing::debug!(key = %key, "Ignoring unknown query parameter"),
            }
        }
        Ok(params)
    }
}
