//! # Table State Store
//!
//! [`TableStore`] owns the records, the column registry, and the mutable
//! [`TableState`] of one table. Every mutator validates its input, updates the
//! state, and synchronously re-derives the [`TableView`]:
//!
//! 1. **Filter** with the filter composer.
//! 2. **Sort** stably by the ordered sort keys.
//! 3. **Paginate**, resetting to the first page if the current page fell off
//!    the end of the filtered set.
//!
//! Invalid wiring (unknown column, sorting an unsortable column, ...) returns an
//! error and leaves the state untouched.

use super::column::{CellValue, ColumnDescriptor, ColumnRegistry, GlobalFilterConfig, TableRow};
use super::filter::is_row_visible;
use super::state::{SortDirection, SortKey, TableState, DEFAULT_PAGE_SIZE};
use super::view::{Cell, Header, PaginationInfo, RowCells, TableView};
use crate::error::{Result, ShelfError};
use std::cmp::Ordering;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    pub page_size: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

pub struct TableStore<R> {
    registry: ColumnRegistry<R>,
    global: Option<GlobalFilterConfig>,
    records: Vec<R>,
    state: TableState,
    /// Indexes into `records` after filter and sort.
    derived: Vec<usize>,
    view: TableView,
}

impl<R: TableRow> TableStore<R> {
    /// Builds a store and derives the initial view.
    ///
    /// Fails if the global filter references a column that is missing or has
    /// nothing to match against.
    pub fn new(
        registry: ColumnRegistry<R>,
        records: Vec<R>,
        global: Option<GlobalFilterConfig>,
        options: TableOptions,
    ) -> Result<Self> {
        if let Some(config) = &global {
            for id in &config.column_ids {
                let column = registry.require(id)?;
                if !column.can_filter() {
                    return Err(ShelfError::Config(format!(
                        "global search column \"{}\" has no accessor or predicate",
                        id
                    )));
                }
            }
        }

        let mut store = Self {
            registry,
            global,
            records,
            state: TableState::with_page_size(options.page_size),
            derived: Vec::new(),
            view: empty_view(options.page_size),
        };
        store.derive();
        Ok(store)
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn view(&self) -> &TableView {
        &self.view
    }

    pub fn registry(&self) -> &ColumnRegistry<R> {
        &self.registry
    }

    pub fn global_config(&self) -> Option<&GlobalFilterConfig> {
        self.global.as_ref()
    }

    /// Re-derives the view, e.g. after external state read by an accessor
    /// (favorites) changed.
    pub fn refresh(&mut self) {
        self.derive();
    }

    // -- sorting ----------------------------------------------------------

    pub fn set_sorting(&mut self, keys: Vec<SortKey>) -> Result<()> {
        let mut sort: Vec<SortKey> = Vec::with_capacity(keys.len());
        for key in keys {
            self.sortable_column(&key.column_id)?;
            if !sort.iter().any(|k| k.column_id == key.column_id) {
                sort.push(key);
            }
        }
        self.state.sort = sort;
        self.derive();
        Ok(())
    }

    /// Cycles a column through asc → desc → unsorted.
    ///
    /// With `multi`, the column's key is updated in place (or appended) and the
    /// other keys are kept; otherwise it replaces the whole sort.
    pub fn toggle_sorting(&mut self, column_id: &str, multi: bool) -> Result<()> {
        self.sortable_column(column_id)?;
        let next = match self.state.sort_direction(column_id) {
            None => Some(SortDirection::Asc),
            Some(SortDirection::Asc) => Some(SortDirection::Desc),
            Some(SortDirection::Desc) => None,
        };

        if multi {
            match (next, self.state.sort.iter().position(|k| k.column_id == column_id)) {
                (Some(direction), Some(pos)) => self.state.sort[pos].direction = direction,
                (Some(direction), None) => {
                    self.state.sort.push(SortKey::new(column_id, direction))
                }
                (None, Some(pos)) => {
                    self.state.sort.remove(pos);
                }
                (None, None) => {}
            }
        } else {
            self.state.sort = next
                .map(|direction| vec![SortKey::new(column_id, direction)])
                .unwrap_or_default();
        }
        self.derive();
        Ok(())
    }

    fn sortable_column(&self, column_id: &str) -> Result<&ColumnDescriptor<R>> {
        let column = self.registry.require(column_id)?;
        if !column.sortable || column.accessor.is_none() {
            return Err(ShelfError::Config(format!(
                "column \"{}\" is not sortable",
                column_id
            )));
        }
        Ok(column)
    }

    // -- filtering --------------------------------------------------------

    /// Sets a column filter. An empty value removes it.
    pub fn set_filter_value(&mut self, column_id: &str, value: &str) -> Result<()> {
        let column = self.registry.require(column_id)?;
        if !column.can_filter() {
            return Err(ShelfError::Config(format!(
                "column \"{}\" cannot be filtered",
                column_id
            )));
        }
        if value.is_empty() {
            self.state.filter_values.remove(column_id);
        } else {
            self.state
                .filter_values
                .insert(column_id.to_string(), value.to_string());
        }
        self.derive();
        Ok(())
    }

    pub fn set_global_filter(&mut self, value: &str) {
        self.state.global_filter = value.to_string();
        self.derive();
    }

    /// Removes every column filter and the global search value.
    pub fn clear_filters(&mut self) {
        self.state.filter_values.clear();
        self.state.global_filter.clear();
        self.derive();
    }

    // -- visibility -------------------------------------------------------

    pub fn set_column_visibility(&mut self, column_id: &str, visible: bool) -> Result<()> {
        let column = self.registry.require(column_id)?;
        if !visible && !column.hideable {
            return Err(ShelfError::Config(format!(
                "column \"{}\" cannot be hidden",
                column_id
            )));
        }
        if visible {
            self.state.visibility.remove(column_id);
        } else {
            self.state.visibility.insert(column_id.to_string(), false);
        }
        self.derive();
        Ok(())
    }

    // -- selection --------------------------------------------------------

    pub fn set_row_selected(&mut self, row_id: &str, selected: bool) -> Result<()> {
        self.require_row(row_id)?;
        if selected {
            self.state.selection.insert(row_id.to_string());
        } else {
            self.state.selection.remove(row_id);
        }
        self.derive();
        Ok(())
    }

    /// Returns the new selection state of the row.
    pub fn toggle_row_selected(&mut self, row_id: &str) -> Result<bool> {
        let selected = !self.state.is_selected(row_id);
        self.set_row_selected(row_id, selected)?;
        Ok(selected)
    }

    /// Selects every row on the current page, or deselects them all if they
    /// already were.
    pub fn toggle_all_page_rows_selected(&mut self) {
        let select = !self.view.all_page_rows_selected;
        let page_ids: Vec<String> = self.view.rows.iter().map(|r| r.row_id.clone()).collect();
        for id in page_ids {
            if select {
                self.state.selection.insert(id);
            } else {
                self.state.selection.remove(&id);
            }
        }
        self.derive();
    }

    fn require_row(&self, row_id: &str) -> Result<()> {
        if self.records.iter().any(|r| r.row_id() == row_id) {
            Ok(())
        } else {
            Err(ShelfError::RowNotFound(row_id.to_string()))
        }
    }

    // -- pagination -------------------------------------------------------

    /// Out-of-range indexes fall back to the first page on derivation.
    pub fn set_page_index(&mut self, page_index: usize) {
        self.state.pagination.page_index = page_index;
        self.derive();
    }

    /// Keeps the first row of the current page in view.
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        let pagination = &mut self.state.pagination;
        let first_row = pagination.offset().unwrap_or(0);
        pagination.page_size = page_size;
        pagination.page_index = first_row / page_size;
        self.derive();
    }

    pub fn next_page(&mut self) -> bool {
        if !self.view.pagination.can_next {
            return false;
        }
        self.state.pagination.page_index += 1;
        self.derive();
        true
    }

    pub fn previous_page(&mut self) -> bool {
        if !self.view.pagination.can_previous {
            return false;
        }
        self.state.pagination.page_index -= 1;
        self.derive();
        true
    }

    // -- derived rows -----------------------------------------------------

    /// Filtered and sorted rows, across all pages.
    pub fn filtered_rows(&self) -> Vec<&R> {
        self.derived.iter().map(|&i| &self.records[i]).collect()
    }

    pub fn page_rows(&self) -> Vec<&R> {
        let (start, end) = self.page_window();
        self.derived[start..end]
            .iter()
            .map(|&i| &self.records[i])
            .collect()
    }

    pub fn selected_rows(&self) -> Vec<&R> {
        self.records
            .iter()
            .filter(|r| self.state.is_selected(r.row_id()))
            .collect()
    }

    pub fn visible_columns(&self) -> Vec<&ColumnDescriptor<R>> {
        self.registry
            .iter()
            .filter(|c| self.state.is_column_visible(&c.id))
            .collect()
    }

    fn page_window(&self) -> (usize, usize) {
        let pagination = self.state.pagination;
        let len = self.derived.len();
        let start = pagination.offset().map_or(len, |offset| offset.min(len));
        let end = start.saturating_add(pagination.page_size).min(len);
        (start, end)
    }

    fn derive(&mut self) {
        let columns = self.registry.as_slice();
        let mut derived: Vec<usize> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| is_row_visible(*r, &self.state, columns, self.global.as_ref()))
            .map(|(i, _)| i)
            .collect();

        if !self.state.sort.is_empty() {
            let keys: Vec<(&ColumnDescriptor<R>, SortDirection)> = self
                .state
                .sort
                .iter()
                .filter_map(|k| self.registry.get(&k.column_id).map(|c| (c, k.direction)))
                .collect();
            // Vec::sort_by is stable: ties keep input order in either direction.
            derived.sort_by(|&a, &b| {
                compare_rows(&self.records[a], &self.records[b], &keys)
            });
        }

        let filtered_count = derived.len();
        let pagination = &mut self.state.pagination;
        if pagination.offset().map_or(true, |offset| offset >= filtered_count) {
            pagination.page_index = 0;
        }
        self.derived = derived;
        self.view = self.build_view();

        debug!(
            total = self.records.len(),
            filtered = filtered_count,
            page = self.state.pagination.page_index,
            page_rows = self.view.rows.len(),
            "derived table view"
        );
    }

    fn build_view(&self) -> TableView {
        let columns = self.visible_columns();
        let headers = columns
            .iter()
            .map(|c| Header {
                column_id: c.id.clone(),
                title: c.title.clone(),
                sortable: c.sortable && c.accessor.is_some(),
                sort: self.state.sort_direction(&c.id),
            })
            .collect();

        let rows: Vec<RowCells> = self
            .page_rows()
            .into_iter()
            .map(|record| RowCells {
                row_id: record.row_id().to_string(),
                selected: self.state.is_selected(record.row_id()),
                cells: columns
                    .iter()
                    .map(|c| Cell {
                        column_id: c.id.clone(),
                        value: c.value(record),
                        text: c.render(record),
                    })
                    .collect(),
            })
            .collect();

        let selected_count = self
            .derived
            .iter()
            .filter(|&&i| self.state.is_selected(self.records[i].row_id()))
            .count();
        let page_selected = rows.iter().filter(|r| r.selected).count();

        TableView {
            headers,
            pagination: PaginationInfo::compute(
                self.state.pagination.page_index,
                self.state.pagination.page_size,
                self.derived.len(),
            ),
            total_count: self.records.len(),
            selected_count,
            all_page_rows_selected: !rows.is_empty() && page_selected == rows.len(),
            some_page_rows_selected: page_selected > 0 && page_selected < rows.len(),
            rows,
        }
    }
}

fn compare_rows<R>(a: &R, b: &R, keys: &[(&ColumnDescriptor<R>, SortDirection)]) -> Ordering {
    for (column, direction) in keys {
        let ord = compare_cells(&column.value(a), &column.value(b), *direction);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Nulls sort last in both directions.
fn compare_cells(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match direction {
            SortDirection::Asc => a.compare(b),
            SortDirection::Desc => b.compare(a),
        },
    }
}

fn empty_view(page_size: usize) -> TableView {
    TableView {
        headers: Vec::new(),
        rows: Vec::new(),
        pagination: PaginationInfo::compute(0, page_size, 0),
        total_count: 0,
        selected_count: 0,
        all_page_rows_selected: false,
        some_page_rows_selected: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::column::{FilterConfig, SelectOption};

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        name: String,
        kind: String,
        price: f64,
        rating: Option<f64>,
    }

    impl TableRow for Item {
        fn row_id(&self) -> &str {
            &self.id
        }
    }

    fn item(id: &str, name: &str, kind: &str, price: f64) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            kind: kind.to_string(),
            price,
            rating: None,
        }
    }

    fn registry() -> ColumnRegistry<Item> {
        ColumnRegistry::new(vec![
            ColumnDescriptor::accessor("name", "Name", |i: &Item| i.name.clone().into())
                .with_filter(FilterConfig::text()),
            ColumnDescriptor::accessor("kind", "Kind", |i: &Item| i.kind.clone().into())
                .with_filter(FilterConfig::select(vec![
                    SelectOption::new("Electronics", "electronics"),
                    SelectOption::new("Clothing", "clothing"),
                ])),
            ColumnDescriptor::accessor("price", "Price", |i: &Item| i.price.into())
                .with_filter(FilterConfig::number())
                .hideable(false),
            ColumnDescriptor::accessor("rating", "Rating", |i: &Item| i.rating.into()),
            ColumnDescriptor::display("actions", "Actions"),
        ])
        .unwrap()
    }

    fn two_items() -> Vec<Item> {
        vec![
            item("1", "Mouse", "electronics", 10.0),
            item("2", "Shirt", "clothing", 20.0),
        ]
    }

    fn store_with(records: Vec<Item>, page_size: usize) -> TableStore<Item> {
        TableStore::new(
            registry(),
            records,
            Some(GlobalFilterConfig::new(["name", "kind"])),
            TableOptions { page_size },
        )
        .unwrap()
    }

    fn many_items(n: usize) -> Vec<Item> {
        (0..n)
            .map(|i| item(&format!("{}", i), &format!("Item {:02}", i), "home", i as f64))
            .collect()
    }

    #[test]
    fn global_search_scenario() {
        let mut store = store_with(two_items(), 10);
        store.set_global_filter("mo");
        assert_eq!(store.view().row_ids(), vec!["1"]);
    }

    #[test]
    fn number_filter_scenario() {
        let mut store = store_with(two_items(), 10);
        store.set_filter_value("price", "20").unwrap();
        assert_eq!(store.view().row_ids(), vec!["2"]);
    }

    #[test]
    fn select_all_scenario() {
        let mut store = store_with(two_items(), 10);
        store.set_filter_value("kind", "all").unwrap();
        assert_eq!(store.view().row_ids(), vec!["1", "2"]);
    }

    #[test]
    fn empty_filter_value_removes_filter() {
        let mut store = store_with(two_items(), 10);
        store.set_filter_value("name", "shirt").unwrap();
        assert_eq!(store.state().filter_value("name"), Some("shirt"));
        store.set_filter_value("name", "").unwrap();
        assert_eq!(store.state().filter_value("name"), None);
        assert_eq!(store.view().rows.len(), 2);
    }

    #[test]
    fn clear_filters_restores_all_rows() {
        let mut store = store_with(two_items(), 10);
        store.set_filter_value("price", "10").unwrap();
        store.set_global_filter("zzz");
        assert!(store.view().is_empty());
        store.clear_filters();
        assert_eq!(store.view().rows.len(), 2);
        assert_eq!(store.state().global_filter, "");
    }

    #[test]
    fn unknown_global_column_is_rejected() {
        let result = TableStore::new(
            registry(),
            two_items(),
            Some(GlobalFilterConfig::new(["nope"])),
            TableOptions::default(),
        );
        assert!(matches!(result, Err(ShelfError::UnknownColumn(_))));
    }

    #[test]
    fn global_column_without_accessor_is_rejected() {
        let result = TableStore::new(
            registry(),
            two_items(),
            Some(GlobalFilterConfig::new(["actions"])),
            TableOptions::default(),
        );
        assert!(matches!(result, Err(ShelfError::Config(_))));
    }

    #[test]
    fn invalid_mutations_leave_state_unchanged() {
        let mut store = store_with(two_items(), 10);
        store.set_filter_value("name", "mo").unwrap();
        let before = store.state().clone();

        assert!(store.set_filter_value("missing", "x").is_err());
        assert!(store.set_filter_value("actions", "x").is_err());
        assert!(store.toggle_sorting("actions", false).is_err());
        assert!(store
            .set_sorting(vec![SortKey::asc("name"), SortKey::asc("missing")])
            .is_err());
        assert!(store.set_column_visibility("price", false).is_err());
        assert!(store.set_row_selected("99", true).is_err());

        assert_eq!(store.state(), &before);
    }

    #[test]
    fn sorting_numbers_and_text() {
        let records = vec![
            item("a", "banana", "home", 3.0),
            item("b", "Apple", "home", 12.0),
            item("c", "cherry", "home", 1.0),
        ];
        let mut store = store_with(records, 10);

        store.set_sorting(vec![SortKey::asc("price")]).unwrap();
        assert_eq!(store.view().row_ids(), vec!["c", "a", "b"]);

        store.set_sorting(vec![SortKey::asc("name")]).unwrap();
        assert_eq!(store.view().row_ids(), vec!["b", "a", "c"]);

        store.set_sorting(vec![SortKey::desc("name")]).unwrap();
        assert_eq!(store.view().row_ids(), vec!["c", "a", "b"]);
    }

    #[test]
    fn sort_is_stable_in_both_directions() {
        let records = vec![
            item("1", "x", "home", 5.0),
            item("2", "y", "home", 1.0),
            item("3", "z", "home", 5.0),
            item("4", "w", "home", 1.0),
        ];
        let mut store = store_with(records, 10);

        store.set_sorting(vec![SortKey::asc("price")]).unwrap();
        assert_eq!(store.view().row_ids(), vec!["2", "4", "1", "3"]);

        store.set_sorting(vec![SortKey::desc("price")]).unwrap();
        assert_eq!(store.view().row_ids(), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn multi_key_sort() {
        let records = vec![
            item("1", "b", "clothing", 5.0),
            item("2", "a", "electronics", 5.0),
            item("3", "c", "clothing", 1.0),
        ];
        let mut store = store_with(records, 10);
        store
            .set_sorting(vec![SortKey::desc("price"), SortKey::asc("name")])
            .unwrap();
        assert_eq!(store.view().row_ids(), vec!["2", "1", "3"]);
    }

    #[test]
    fn nulls_sort_last_in_both_directions() {
        let mut records = vec![
            item("1", "a", "home", 1.0),
            item("2", "b", "home", 1.0),
            item("3", "c", "home", 1.0),
        ];
        records[1].rating = Some(4.0);
        records[2].rating = Some(2.0);
        let mut store = store_with(records, 10);

        store.set_sorting(vec![SortKey::asc("rating")]).unwrap();
        assert_eq!(store.view().row_ids(), vec!["3", "2", "1"]);
        store.set_sorting(vec![SortKey::desc("rating")]).unwrap();
        assert_eq!(store.view().row_ids(), vec!["2", "3", "1"]);
    }

    #[test]
    fn toggle_sorting_cycles() {
        let mut store = store_with(two_items(), 10);
        store.toggle_sorting("price", false).unwrap();
        assert_eq!(store.state().sort, vec![SortKey::asc("price")]);
        store.toggle_sorting("price", false).unwrap();
        assert_eq!(store.state().sort, vec![SortKey::desc("price")]);
        store.toggle_sorting("price", false).unwrap();
        assert!(store.state().sort.is_empty());
    }

    #[test]
    fn toggle_sorting_multi_keeps_other_keys() {
        let mut store = store_with(two_items(), 10);
        store.toggle_sorting("kind", false).unwrap();
        store.toggle_sorting("price", true).unwrap();
        assert_eq!(
            store.state().sort,
            vec![SortKey::asc("kind"), SortKey::asc("price")]
        );
        store.toggle_sorting("kind", true).unwrap();
        assert_eq!(
            store.state().sort,
            vec![SortKey::desc("kind"), SortKey::asc("price")]
        );
        store.toggle_sorting("price", false).unwrap();
        assert_eq!(store.state().sort, vec![SortKey::desc("price")]);
    }

    #[test]
    fn headers_report_sort_direction() {
        let mut store = store_with(two_items(), 10);
        store.toggle_sorting("name", false).unwrap();
        let header = &store.view().headers[0];
        assert_eq!(header.column_id, "name");
        assert_eq!(header.sort, Some(SortDirection::Asc));
        let actions = store
            .view()
            .headers
            .iter()
            .find(|h| h.column_id == "actions")
            .unwrap();
        assert!(!actions.sortable);
    }

    #[test]
    fn hidden_columns_are_not_rendered_but_still_filter() {
        let mut store = store_with(two_items(), 10);
        store.set_column_visibility("name", false).unwrap();
        store.set_filter_value("name", "shirt").unwrap();

        let view = store.view();
        assert!(view.headers.iter().all(|h| h.column_id != "name"));
        assert!(view.rows[0].cell("name").is_none());
        assert_eq!(view.row_ids(), vec!["2"]);

        store.set_column_visibility("name", true).unwrap();
        assert!(store.view().rows[0].cell("name").is_some());
    }

    #[test]
    fn selection_survives_filtering() {
        let mut store = store_with(two_items(), 10);
        store.set_row_selected("2", true).unwrap();
        store.set_global_filter("mouse");
        assert_eq!(store.view().selected_count, 0);
        assert!(store.state().is_selected("2"));

        store.set_global_filter("");
        assert_eq!(store.view().selected_count, 1);
        assert!(store.view().rows[1].selected);
        assert!(store.view().some_page_rows_selected);
    }

    #[test]
    fn toggle_row_selected_flips() {
        let mut store = store_with(two_items(), 10);
        assert!(store.toggle_row_selected("1").unwrap());
        assert!(!store.toggle_row_selected("1").unwrap());
        assert!(store.selected_rows().is_empty());
    }

    #[test]
    fn toggle_all_page_rows() {
        let mut store = store_with(many_items(5), 2);
        store.toggle_all_page_rows_selected();
        assert!(store.view().all_page_rows_selected);
        assert_eq!(store.view().selected_count, 2);

        store.toggle_all_page_rows_selected();
        assert_eq!(store.view().selected_count, 0);
    }

    #[test]
    fn pagination_navigation() {
        let mut store = store_with(many_items(25), 10);
        let info = store.view().pagination;
        assert_eq!(info.page_count, 3);
        assert_eq!(store.view().rows.len(), 10);

        assert!(store.next_page());
        assert!(store.next_page());
        assert!(!store.next_page());
        assert_eq!(store.state().pagination.page_index, 2);
        assert_eq!(store.view().rows.len(), 5);

        assert!(store.previous_page());
        assert_eq!(store.state().pagination.page_index, 1);
    }

    #[test]
    fn page_resets_when_filter_shrinks_results() {
        let mut store = store_with(many_items(25), 10);
        store.set_page_index(2);
        store.set_filter_value("name", "Item 0").unwrap();
        assert_eq!(store.view().pagination.filtered_count, 10);
        assert_eq!(store.state().pagination.page_index, 0);
    }

    #[test]
    fn out_of_range_page_index_resets() {
        let mut store = store_with(many_items(5), 2);
        store.set_page_index(7);
        assert_eq!(store.state().pagination.page_index, 0);
    }

    #[test]
    fn huge_page_index_resets_without_overflow() {
        let mut store = store_with(many_items(5), 2);
        store.set_page_index(usize::MAX / 2);
        assert_eq!(store.state().pagination.page_index, 0);
        assert_eq!(store.view().rows.len(), 2);

        store.set_page_index(usize::MAX);
        store.set_page_size(usize::MAX);
        assert_eq!(store.state().pagination.page_index, 0);
        assert_eq!(store.view().rows.len(), 5);
        assert_eq!(store.view().pagination.page_count, 1);
    }

    #[test]
    fn page_size_change_keeps_first_row() {
        let mut store = store_with(many_items(30), 10);
        store.set_page_index(2);
        store.set_page_size(5);
        assert_eq!(store.state().pagination.page_index, 4);
        assert_eq!(store.view().row_ids()[0], "20");

        store.set_page_size(0);
        assert_eq!(store.state().pagination.page_size, 1);
    }

    #[test]
    fn cells_use_renderer_text() {
        let registry = ColumnRegistry::new(vec![ColumnDescriptor::accessor(
            "price",
            "Price",
            |i: &Item| i.price.into(),
        )
        .with_renderer(|i: &Item| format!("${:.2}", i.price))])
        .unwrap();
        let store =
            TableStore::new(registry, two_items(), None, TableOptions::default()).unwrap();
        let cell = store.view().rows[0].cell("price").unwrap();
        assert_eq!(cell.value, CellValue::Number(10.0));
        assert_eq!(cell.text, "$10.00");
    }

    #[test]
    fn empty_records_produce_empty_view() {
        let store = store_with(Vec::new(), 10);
        let view = store.view();
        assert!(view.is_empty());
        assert_eq!(view.pagination.page_count, 0);
        assert_eq!(view.total_count, 0);
        assert!(!view.all_page_rows_selected);
    }
}
