//! Sorting axis of a data query
//!
//! An ordered list of `(field, direction)` pairs. Order is significant: it is
//! both the `order by` column order and the tie-break precedence.
//!
//! URL form is a single `sort` value, `field:dir` pairs joined with `,`:
//! `name:asc,created_at:desc`.
//!
//! Field names are carried verbatim, surrounding whitespace and empty names
//! included, so parsing a rendered value gives back the same list. Only a
//! field containing `,` cannot round-trip.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::config::FieldTransformer;
use crate::core::constants::{SORT_DIRECTION_DELIMITER, SORT_ENTRY_DELIMITER, SQL_ORDER_BY};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    /// Parse a direction token (`asc`, `desc`, `ascending`, `descending`),
    /// case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(SortDirection::Ascending),
            "desc" | "descending" => Some(SortDirection::Descending),
            _ => None,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortEntry {
    pub field: String,
    pub direction: SortDirection,
}

impl SortEntry {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Descending)
    }

    fn to_sql_mapped(&self, transformer: Option<&FieldTransformer>) -> String {
        match transformer {
            Some(t) => format!("{} {}", t(&self.field), self.direction),
            None => format!("{} {}", self.field, self.direction),
        }
    }

    fn to_url_token(&self) -> String {
        format!(
            "{}{}{}",
            self.field, SORT_DIRECTION_DELIMITER, self.direction
        )
    }

    /// Parse one `field[:dir]` token. A missing direction means ascending.
    ///
    /// The field is taken as is; only the direction is trimmed.
    fn parse_url_token(token: &str) -> Option<Self> {
        match token.rsplit_once(SORT_DIRECTION_DELIMITER) {
            Some((field, dir)) => Some(Self::new(field, SortDirection::parse(dir)?)),
            None => Some(Self::asc(token)),
        }
    }
}

/// Parse the `sort` URL value back into an ordered sort list.
///
/// Absent or empty input yields an empty list. Empty tokens (`a:asc,,b:asc`)
/// are skipped, since rendering never produces one. Entries with an unknown
/// direction are skipped.
pub fn parse_sorting_url_param(sort: Option<&str>) -> Vec<SortEntry> {
    let Some(sort) = sort else {
        return Vec::new();
    };

    sort.split(SORT_ENTRY_DELIMITER)
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let entry = SortEntry::parse_url_token(token);
            if entry.is_none() {
                tracing::debug!(token, "Ignoring malformed sort entry");
            }
            entry
        })
        .collect()
}

/// URL form of the sorting state; an empty list has no `sort` value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingUrlParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sorting {
    entries: Vec<SortEntry>,
}

impl Sorting {
    pub fn new(entries: Vec<SortEntry>) -> Self {
        Self { entries }
    }

    pub fn value(&self) -> &[SortEntry] {
        &self.entries
    }

    pub fn update(&mut self, entries: Vec<SortEntry>) {
        self.entries = entries;
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render `order by f1 asc, f2 desc`, or `None` for an empty list.
    pub fn to_sql(&self, transformer: Option<&FieldTransformer>) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        let columns: Vec<String> = self
            .entries
            .iter()
            .map(|e| e.to_sql_mapped(transformer))
            .collect();
        Some(format!("{} {}", SQL_ORDER_BY, columns.join(", ")))
    }

    pub fn to_url_params(&self) -> SortingUrlParams {
        if self.entries.is_empty() {
            return SortingUrlParams::default();
        }
        let tokens: Vec<String> = self.entries.iter().map(SortEntry::to_url_token).collect();
        SortingUrlParams {
            sort: Some(tokens.join(SORT_ENTRY_DELIMITER)),
        }
    }
}
