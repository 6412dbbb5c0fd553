//! # Table Engine
//!
//! A reusable, UI-agnostic table: it knows nothing about products.
//!
//! - [`column`]: column descriptors and the validated [`ColumnRegistry`]
//! - [`filter`]: the filter composer (`is_row_visible`)
//! - [`state`]: the user-editable [`TableState`]
//! - [`store`]: [`TableStore`], which owns state and derives the view
//! - [`view`]: render-ready output
//! - [`widget`]: the filter widget bank
//!
//! Wiring a table means building a registry, optionally a
//! [`GlobalFilterConfig`], and handing both to [`TableStore::new`] with the
//! records.

pub mod column;
pub mod filter;
pub mod state;
pub mod store;
pub mod view;
pub mod widget;

pub use column::{
    CellValue, ColumnDescriptor, ColumnFilter, ColumnRegistry, FilterConfig, FilterKind,
    GlobalFilterConfig, SelectOption, TableRow,
};
pub use filter::{is_row_visible, ALL_TOKEN};
pub use state::{SortDirection, SortKey, TableState, DEFAULT_PAGE_SIZE};
pub use store::{TableOptions, TableStore};
pub use view::{Cell, Header, PaginationInfo, RowCells, TableView};
pub use widget::{FilterBank, FilterControl, FilterWidget};
