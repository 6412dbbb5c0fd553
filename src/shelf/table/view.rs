use super::column::CellValue;
use super::state::SortDirection;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub column_id: String,
    pub title: String,
    pub sortable: bool,
    pub sort: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub column_id: String,
    pub value: CellValue,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowCells {
    pub row_id: String,
    pub selected: bool,
    pub cells: Vec<Cell>,
}

impl RowCells {
    pub fn cell(&self, column_id: &str) -> Option<&Cell> {
        self.cells.iter().find(|c| c.column_id == column_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationInfo {
    pub page_index: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub filtered_count: usize,
    pub can_previous: bool,
    pub can_next: bool,
}

impl PaginationInfo {
    pub fn compute(page_index: usize, page_size: usize, filtered_count: usize) -> Self {
        let page_size = page_size.max(1);
        let page_count = filtered_count.div_ceil(page_size);
        Self {
            page_index,
            page_size,
            page_count,
            filtered_count,
            can_previous: page_index > 0,
            can_next: page_index + 1 < page_count,
        }
    }

    /// 1-based page number for display. An empty table reports page 1 of 1.
    pub fn display_page(&self) -> (usize, usize) {
        (self.page_index + 1, self.page_count.max(1))
    }
}

/// Render-ready snapshot of the table after filter, sort, and pagination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub headers: Vec<Header>,
    pub rows: Vec<RowCells>,
    pub pagination: PaginationInfo,
    pub total_count: usize,
    pub selected_count: usize,
    pub all_page_rows_selected: bool,
    pub some_page_rows_selected: bool,
}

impl TableView {
    pub fn row_ids(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.row_id.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
