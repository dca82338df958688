//! Paging axis of a data query
//!
//! Holds a 1-based page number and a page size and renders them as a
//! `limit`/`offset` fragment or as `page`/`pageSize` URL parameters.
//!
//! A fragment is only rendered when its inputs exist: `limit` needs the page
//! size, `offset` needs both the page and the page size.
//!
//! Values are not range-checked, with one normalisation: the offset is
//! `(page - 1) * page_size` clamped at zero, so page 0 renders the same
//! `offset 0` as page 1 instead of a negative offset no SQL engine accepts.

use serde::{Deserialize, Serialize};

use crate::core::constants::{PARAM_PAGE, PARAM_PAGE_SIZE};
use crate::utils::sql::join_or_none;

/// Plain snapshot of the paging state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingRecord {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PagingRecord {
    /// Build a record from raw `page`/`pageSize` values.
    ///
    /// Values that are not decimal integers are treated as absent.
    pub fn from_url_params(page: Option<&str>, page_size: Option<&str>) -> Self {
        Self {
            page: parse_count(PARAM_PAGE, page),
            page_size: parse_count(PARAM_PAGE_SIZE, page_size),
        }
    }
}

fn parse_count(param: &'static str, raw: Option<&str>) -> Option<u32> {
    let raw = raw?;
    match raw.trim().parse::<u32>() {
        Ok(n) => Some(n),
        Err(e) => {
            tracing::debug!(param, value = raw, error = %e, "Ignoring malformed paging parameter");
            None
        }
    }
}

/// URL form of the paging state; absent values stay absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingUrlParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paging {
    page: Option<u32>,
    page_size: Option<u32>,
}

impl Paging {
    pub fn new(record: PagingRecord) -> Self {
        Self {
            page: record.page,
            page_size: record.page_size,
        }
    }

    pub fn page(&self) -> Option<u32> {
        self.page
    }

    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    pub fn record(&self) -> PagingRecord {
        PagingRecord {
            page: self.page,
            page_size: self.page_size,
        }
    }

    /// Replace the page number. `None` leaves the current value in place.
    pub fn update_page(&mut self, page: Option<u32>) {
        if let Some(page) = page {
            self.page = Some(page);
        }
    }

    /// Replace the page size. `None` leaves the current value in place.
    pub fn update_page_size(&mut self, page_size: Option<u32>) {
        if let Some(page_size) = page_size {
            self.page_size = Some(page_size);
        }
    }

    pub fn clear(&mut self) {
        self.page = None;
        self.page_size = None;
    }

    /// Row offset of the current page, clamped at zero for page 0.
    pub fn offset(&self) -> Option<u64> {
        let page = self.page?;
        let page_size = self.page_size?;
        Some(u64::from(page.saturating_sub(1)) * u64::from(page_size))
    }

    pub fn to_sql(&self) -> Option<String> {
        let limit = self.page_size.map(|size| format!("limit {}", size));
        let offset = self.offset().map(|offset| format!("offset {}", offset));
        join_or_none([limit, offset], " ")
    }

    pub fn to_url_params(&self) -> PagingUrlParams {
        PagingUrlParams {
            page: self.page.map(|p| p.to_string()),
            page_size: self.page_size.map(|s| s.to_string()),
        }
    }
}
