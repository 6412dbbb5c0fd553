use crate::catalog::product_table;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::favorites::{FavoriteSet, FAVORITE_COLUMN_ID};
use crate::model::Product;
use crate::table::{FilterBank, SortKey, TableOptions, TableView};

/// Everything the user asked of one listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search: Option<String>,
    /// `(column id, raw value)` pairs, applied through the filter controls.
    pub filters: Vec<(String, String)>,
    pub favorites_only: bool,
    pub sort: Vec<SortKey>,
    /// 1-based.
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub hidden: Vec<String>,
    pub selected: Vec<String>,
}

/// The global search box as the UI should show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBox {
    pub placeholder: String,
    pub value: String,
}

/// A surfaced filter control and what it currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    pub column_id: String,
    pub title: String,
    pub placeholder: String,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct Listing {
    pub view: TableView,
    pub search: Option<SearchBox>,
    pub controls: Vec<ControlState>,
}

impl Listing {
    /// True when the catalog itself is empty (as opposed to filtered empty).
    pub fn catalog_empty(&self) -> bool {
        self.view.total_count == 0
    }
}

/// Parses `column=value`. The value may be empty or contain `=`.
pub fn parse_filter_expr(expr: &str) -> Result<(String, String)> {
    match expr.split_once('=') {
        Some((column, value)) if !column.trim().is_empty() => {
            Ok((column.trim().to_string(), value.to_string()))
        }
        _ => Err(ShelfError::Api(format!(
            "invalid filter \"{}\" (expected column=value)",
            expr
        ))),
    }
}

pub fn run(
    products: Vec<Product>,
    favorites: &FavoriteSet,
    config: &ShelfConfig,
    query: &ListQuery,
) -> Result<CmdResult> {
    let options = TableOptions {
        page_size: query.page_size.unwrap_or(config.page_size).max(1),
    };
    let mut table = product_table(products, favorites, options, config.global_search)?;
    let bank = FilterBank::for_store(&table);
    let mut result = CmdResult::default();

    for column in &query.hidden {
        table.set_column_visibility(column, false)?;
    }
    for (column, value) in &query.filters {
        bank.apply(&mut table, column, value)?;
    }
    if query.favorites_only {
        bank.apply(&mut table, FAVORITE_COLUMN_ID, "true")?;
    }
    if let Some(term) = &query.search {
        if !config.global_search {
            result.add_message(CmdMessage::warning(
                "Global search is disabled; use --filter name=<term> instead.",
            ));
        }
        table.set_global_filter(term);
    }
    if !query.sort.is_empty() {
        table.set_sorting(query.sort.clone())?;
    }
    for id in &query.selected {
        table.set_row_selected(id, true)?;
    }
    if let Some(page) = query.page {
        if page == 0 {
            return Err(ShelfError::Api("pages start at 1".to_string()));
        }
        table.set_page_index(page - 1);
        if table.state().pagination.page_index != page - 1 {
            result.add_message(CmdMessage::warning(format!(
                "Page {} is out of range; showing page 1.",
                page
            )));
        }
    }

    let search = bank.shows_global_search().then(|| SearchBox {
        placeholder: bank.search_placeholder().to_string(),
        value: table.state().global_filter.clone(),
    });
    let controls = bank
        .surfaced()
        .into_iter()
        .map(|w| ControlState {
            column_id: w.column_id.clone(),
            title: w.title.clone(),
            placeholder: w.placeholder.clone(),
            value: bank.display_value(&table, &w.column_id).unwrap_or_default(),
        })
        .collect();

    let listing = Listing {
        view: table.view().clone(),
        search,
        controls,
    };
    Ok(result.with_listing(listing))
}
