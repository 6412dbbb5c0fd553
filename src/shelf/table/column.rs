//! Column descriptors and the column registry.
//!
//! A column describes how one field of a record is accessed, displayed, sorted,
//! and filtered. The registry is the validated, immutable list of columns a
//! table is built from.

use crate::error::{Result, ShelfError};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

/// A record the table engine can hold.
///
/// The identifier must be stable and unique within a collection: selection
/// and favorites are keyed on it.
pub trait TableRow {
    fn row_id(&self) -> &str;
}

/// The typed value an accessor extracts from a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Stringified form used by the default predicates and renderers.
    ///
    /// `Null` stringifies to `None`: it never matches a filter.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Number(n) => Some(format_number(*n)),
            CellValue::Bool(b) => Some(b.to_string()),
            CellValue::Null => None,
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            CellValue::Bool(_) => 0,
            CellValue::Number(_) => 1,
            CellValue::Text(_) => 2,
            CellValue::Null => 3,
        }
    }

    /// Ordering for non-null values. Callers place `Null` last themselves so
    /// that it stays last regardless of sort direction.
    pub(crate) fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Number(a), CellValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (CellValue::Text(a), CellValue::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (a, b) => a.kind_rank().cmp(&b.kind_rank()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_text().unwrap_or_default())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Null)
    }
}

/// Whole numbers print without a fractional part (`20`, not `20.0`).
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// The kind of filter control a column declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Text,
    Number,
    Select,
    Boolean,
}

impl FilterKind {
    /// Text and number filters are superseded by global search in the UI.
    pub fn is_free_text(self) -> bool {
        matches!(self, FilterKind::Text | FilterKind::Number)
    }

    /// Select and boolean filters understand the "all" sentinel.
    pub fn has_all_token(self) -> bool {
        matches!(self, FilterKind::Select | FilterKind::Boolean)
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterKind::Text => "text",
            FilterKind::Number => "number",
            FilterKind::Select => "select",
            FilterKind::Boolean => "boolean",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterConfig {
    pub kind: FilterKind,
    pub placeholder: Option<String>,
    pub options: Vec<SelectOption>,
}

impl FilterConfig {
    pub fn new(kind: FilterKind) -> Self {
        Self {
            kind,
            placeholder: None,
            options: Vec::new(),
        }
    }

    pub fn text() -> Self {
        Self::new(FilterKind::Text)
    }

    pub fn number() -> Self {
        Self::new(FilterKind::Number)
    }

    pub fn select(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            ..Self::new(FilterKind::Select)
        }
    }

    pub fn boolean() -> Self {
        Self::new(FilterKind::Boolean)
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

/// Cross-column search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobalFilterConfig {
    pub enabled: bool,
    pub placeholder: Option<String>,
    pub column_ids: Vec<String>,
}

impl GlobalFilterConfig {
    pub fn new<I, S>(column_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: true,
            placeholder: None,
            column_ids: column_ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

pub type Accessor<R> = Rc<dyn Fn(&R) -> CellValue>;
pub type Predicate<R> = Rc<dyn Fn(&R, &str) -> bool>;
pub type CellRenderer<R> = Rc<dyn Fn(&R) -> String>;

/// How a column decides whether a record matches a filter value.
pub enum ColumnFilter<R> {
    /// Kind-appropriate default predicate over the accessed value.
    Default,
    /// Caller-supplied predicate, invoked with the record and the filter value.
    Custom(Predicate<R>),
}

impl<R> Clone for ColumnFilter<R> {
    fn clone(&self) -> Self {
        match self {
            ColumnFilter::Default => ColumnFilter::Default,
            ColumnFilter::Custom(f) => ColumnFilter::Custom(Rc::clone(f)),
        }
    }
}

impl<R> fmt::Debug for ColumnFilter<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnFilter::Default => write!(f, "Default"),
            ColumnFilter::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

pub struct ColumnDescriptor<R> {
    pub id: String,
    pub title: String,
    pub accessor: Option<Accessor<R>>,
    pub sortable: bool,
    pub hideable: bool,
    pub filter_config: Option<FilterConfig>,
    pub filter: ColumnFilter<R>,
    pub renderer: Option<CellRenderer<R>>,
}

impl<R> Clone for ColumnDescriptor<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            accessor: self.accessor.clone(),
            sortable: self.sortable,
            hideable: self.hideable,
            filter_config: self.filter_config.clone(),
            filter: self.filter.clone(),
            renderer: self.renderer.clone(),
        }
    }
}

impl<R> fmt::Debug for ColumnDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("has_accessor", &self.accessor.is_some())
            .field("sortable", &self.sortable)
            .field("hideable", &self.hideable)
            .field("filter_config", &self.filter_config)
            .field("filter", &self.filter)
            .finish()
    }
}

impl<R> ColumnDescriptor<R> {
    /// A display-only column (no accessor): not sortable, not filterable.
    pub fn display(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            accessor: None,
            sortable: false,
            hideable: true,
            filter_config: None,
            filter: ColumnFilter::Default,
            renderer: None,
        }
    }

    /// A data column backed by an accessor. Sortable and hideable by default.
    pub fn accessor<F>(id: impl Into<String>, title: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&R) -> CellValue + 'static,
    {
        Self {
            accessor: Some(Rc::new(accessor)),
            sortable: true,
            ..Self::display(id, title)
        }
    }

    pub fn with_filter(mut self, config: FilterConfig) -> Self {
        self.filter_config = Some(config);
        self
    }

    pub fn with_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&R, &str) -> bool + 'static,
    {
        self.filter = ColumnFilter::Custom(Rc::new(predicate));
        self
    }

    pub fn with_renderer<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&R) -> String + 'static,
    {
        self.renderer = Some(Rc::new(renderer));
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn hideable(mut self, hideable: bool) -> Self {
        self.hideable = hideable;
        self
    }

    pub fn value(&self, record: &R) -> CellValue {
        match &self.accessor {
            Some(accessor) => accessor(record),
            None => CellValue::Null,
        }
    }

    pub fn filter_kind(&self) -> Option<FilterKind> {
        self.filter_config.as_ref().map(|c| c.kind)
    }

    pub fn is_filterable(&self) -> bool {
        self.filter_config.is_some()
    }

    /// Whether a filter value set on this column can be evaluated at all.
    pub fn can_filter(&self) -> bool {
        self.accessor.is_some() || matches!(self.filter, ColumnFilter::Custom(_))
    }

    /// Display text for a cell: the custom renderer if present, else the
    /// stringified value.
    pub fn render(&self, record: &R) -> String {
        match &self.renderer {
            Some(renderer) => renderer(record),
            None => self.value(record).to_string(),
        }
    }
}

/// The validated, immutable set of columns for one table.
pub struct ColumnRegistry<R> {
    columns: Vec<ColumnDescriptor<R>>,
}

impl<R> Clone for ColumnRegistry<R> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
        }
    }
}

impl<R> fmt::Debug for ColumnRegistry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.columns.iter()).finish()
    }
}

impl<R> ColumnRegistry<R> {
    /// Validates the column list.
    ///
    /// Fails on duplicate ids and on filterable columns that have no accessor.
    pub fn new(columns: Vec<ColumnDescriptor<R>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.id.as_str()) {
                return Err(ShelfError::Config(format!(
                    "duplicate column id \"{}\"",
                    column.id
                )));
            }
            if column.filter_config.is_some() && column.accessor.is_none() {
                return Err(ShelfError::Config(format!(
                    "column \"{}\" declares a filter but has no accessor",
                    column.id
                )));
            }
        }
        Ok(Self { columns })
    }

    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&ColumnDescriptor<R>> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn require(&self, id: &str) -> Result<&ColumnDescriptor<R>> {
        self.get(id)
            .ok_or_else(|| ShelfError::UnknownColumn(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnDescriptor<R>> {
        self.columns.iter()
    }

    pub fn filterable(&self) -> impl Iterator<Item = &ColumnDescriptor<R>> {
        self.columns.iter().filter(|c| c.is_filterable())
    }

    pub fn as_slice(&self) -> &[ColumnDescriptor<R>] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn into_columns(self) -> Vec<ColumnDescriptor<R>> {
        self.columns
    }
}
