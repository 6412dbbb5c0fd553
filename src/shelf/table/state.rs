use crate::error::ShelfError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(ShelfError::Api(format!(
                "invalid sort direction \"{}\" (expected asc or desc)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub column_id: String,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(column_id: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column_id: column_id.into(),
            direction,
        }
    }

    pub fn asc(column_id: impl Into<String>) -> Self {
        Self::new(column_id, SortDirection::Asc)
    }

    pub fn desc(column_id: impl Into<String>) -> Self {
        Self::new(column_id, SortDirection::Desc)
    }
}

/// Parses `column` or `column:asc|desc`.
impl FromStr for SortKey {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, direction) = match s.split_once(':') {
            Some((column, dir)) => (column.trim(), dir.parse()?),
            None => (s.trim(), SortDirection::Asc),
        };
        if column.is_empty() {
            return Err(ShelfError::Api(format!("invalid sort expression \"{}\"", s)));
        }
        Ok(SortKey::new(column, direction))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Index of the first row on the current page; `None` on overflow.
    pub fn offset(&self) -> Option<usize> {
        self.page_index.checked_mul(self.page_size)
    }
}

/// Everything the user can change about a table.
///
/// Filter and visibility keys always name known columns; sort keys always name
/// sortable columns. The store enforces this on every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    pub sort: Vec<SortKey>,
    pub filter_values: BTreeMap<String, String>,
    pub global_filter: String,
    pub visibility: BTreeMap<String, bool>,
    pub selection: BTreeSet<String>,
    pub pagination: Pagination,
}

impl TableState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            pagination: Pagination {
                page_index: 0,
                page_size: page_size.max(1),
            },
            ..Self::default()
        }
    }

    pub fn filter_value(&self, column_id: &str) -> Option<&str> {
        self.filter_values.get(column_id).map(String::as_str)
    }

    /// Columns are visible unless explicitly hidden.
    pub fn is_column_visible(&self, column_id: &str) -> bool {
        self.visibility.get(column_id).copied().unwrap_or(true)
    }

    pub fn sort_direction(&self, column_id: &str) -> Option<SortDirection> {
        self.sort
            .iter()
            .find(|k| k.column_id == column_id)
            .map(|k| k.direction)
    }

    pub fn is_selected(&self, row_id: &str) -> bool {
        self.selection.contains(row_id)
    }

    pub fn has_active_filters(&self) -> bool {
        !self.filter_values.is_empty() || !self.global_filter.trim().is_empty()
    }
}
