//! # Filter Widget Bank
//!
//! Maps each filterable column's [`FilterKind`] to a control and feeds coerced
//! values back into a [`TableStore`]. The bank only coerces raw input; whether
//! a value actually matches is up to the column's predicate.
//!
//! When global search is enabled, text and number controls are not surfaced:
//! the single search box stands in for them. Their predicates still run if a
//! value is set on the store directly.

use super::column::{ColumnDescriptor, FilterKind, GlobalFilterConfig, SelectOption, TableRow};
use super::filter::ALL_TOKEN;
use super::store::TableStore;
use crate::error::{Result, ShelfError};

pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterControl {
    Text,
    Number,
    Select { options: Vec<SelectOption> },
    Boolean,
}

impl FilterControl {
    pub fn kind(&self) -> FilterKind {
        match self {
            FilterControl::Text => FilterKind::Text,
            FilterControl::Number => FilterKind::Number,
            FilterControl::Select { .. } => FilterKind::Select,
            FilterControl::Boolean => FilterKind::Boolean,
        }
    }

    /// Turns raw control input into the value stored on the table.
    pub fn coerce(&self, raw: &str) -> String {
        match self {
            FilterControl::Text => raw.to_string(),
            FilterControl::Number => raw.trim().to_string(),
            FilterControl::Select { .. } => {
                if raw.trim().eq_ignore_ascii_case(ALL_TOKEN) {
                    String::new()
                } else {
                    raw.to_string()
                }
            }
            FilterControl::Boolean => {
                let value = raw.trim().to_lowercase();
                if value == ALL_TOKEN {
                    String::new()
                } else {
                    value
                }
            }
        }
    }

    /// What the control shows for a stored value.
    pub fn display_value(&self, stored: Option<&str>) -> String {
        let stored = stored.unwrap_or("");
        match self {
            FilterControl::Boolean => match stored.trim().to_lowercase().as_str() {
                "true" => "true".to_string(),
                "false" => "false".to_string(),
                _ => ALL_TOKEN.to_string(),
            },
            FilterControl::Select { .. } if stored.is_empty() => ALL_TOKEN.to_string(),
            _ => stored.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterWidget {
    pub column_id: String,
    pub title: String,
    pub placeholder: String,
    pub control: FilterControl,
}

impl FilterWidget {
    fn for_column<R>(column: &ColumnDescriptor<R>) -> Option<Self> {
        let config = column.filter_config.as_ref()?;
        let control = match config.kind {
            FilterKind::Text => FilterControl::Text,
            FilterKind::Number => FilterControl::Number,
            FilterKind::Select => FilterControl::Select {
                options: config.options.clone(),
            },
            FilterKind::Boolean => FilterControl::Boolean,
        };
        let placeholder = config.placeholder.clone().unwrap_or_else(|| {
            if config.kind.is_free_text() {
                format!("Filter {}...", column.id)
            } else {
                format!("Select {}...", column.id)
            }
        });
        Some(Self {
            column_id: column.id.clone(),
            title: column.title.clone(),
            placeholder,
            control,
        })
    }

    pub fn kind(&self) -> FilterKind {
        self.control.kind()
    }
}

/// The filter controls for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBank {
    widgets: Vec<FilterWidget>,
    global_enabled: bool,
    search_placeholder: String,
}

impl FilterBank {
    pub fn build<R>(columns: &[ColumnDescriptor<R>], global: Option<&GlobalFilterConfig>) -> Self {
        Self {
            widgets: columns.iter().filter_map(FilterWidget::for_column).collect(),
            global_enabled: global.map(|g| g.enabled).unwrap_or(false),
            search_placeholder: global
                .and_then(|g| g.placeholder.clone())
                .unwrap_or_else(|| DEFAULT_SEARCH_PLACEHOLDER.to_string()),
        }
    }

    pub fn for_store<R: TableRow>(store: &TableStore<R>) -> Self {
        Self::build(store.registry().as_slice(), store.global_config())
    }

    /// Every widget, surfaced or not.
    pub fn widgets(&self) -> &[FilterWidget] {
        &self.widgets
    }

    pub fn widget(&self, column_id: &str) -> Option<&FilterWidget> {
        self.widgets.iter().find(|w| w.column_id == column_id)
    }

    /// Widgets the UI should show: all of them, or only select/boolean ones
    /// when global search is on.
    pub fn surfaced(&self) -> Vec<&FilterWidget> {
        self.widgets
            .iter()
            .filter(|w| !self.global_enabled || !w.kind().is_free_text())
            .collect()
    }

    /// The search box is shown only if it replaces at least one control.
    pub fn shows_global_search(&self) -> bool {
        self.global_enabled && self.widgets.iter().any(|w| w.kind().is_free_text())
    }

    pub fn search_placeholder(&self) -> &str {
        &self.search_placeholder
    }

    /// Coerces `raw` through the column's control and stores it.
    pub fn apply<R: TableRow>(
        &self,
        store: &mut TableStore<R>,
        column_id: &str,
        raw: &str,
    ) -> Result<()> {
        let widget = self.widget(column_id).ok_or_else(|| {
            if store.registry().contains(column_id) {
                ShelfError::Config(format!("column \"{}\" has no filter control", column_id))
            } else {
                ShelfError::UnknownColumn(column_id.to_string())
            }
        })?;
        store.set_filter_value(column_id, &widget.control.coerce(raw))
    }

    pub fn display_value<R: TableRow>(&self, store: &TableStore<R>, column_id: &str) -> Option<String> {
        self.widget(column_id)
            .map(|w| w.control.display_value(store.state().filter_value(column_id)))
    }

    /// Clears every filterable column and the global search value.
    pub fn clear_all<R: TableRow>(&self, store: &mut TableStore<R>) -> Result<()> {
        for widget in &self.widgets {
            store.set_filter_value(&widget.column_id, "")?;
        }
        store.set_global_filter("");
        Ok(())
    }
}
