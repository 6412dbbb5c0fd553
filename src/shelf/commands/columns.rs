use crate::catalog::{global_filter_config, product_columns};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::favorites::FavoriteSet;
use crate::table::{ColumnRegistry, FilterBank, FilterKind};

/// What the UI knows about one product column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub id: String,
    pub title: String,
    pub filter: Option<FilterKind>,
    pub placeholder: Option<String>,
    pub sortable: bool,
    pub hideable: bool,
    /// Whether the filter control is shown (see the widget surfacing rules).
    pub surfaced: bool,
    pub in_global_search: bool,
}

pub fn run(favorites: &FavoriteSet, global_search: bool) -> Result<CmdResult> {
    let registry = favorites.overlay(ColumnRegistry::new(product_columns())?)?;
    let global = global_filter_config(global_search);
    let bank = FilterBank::build(registry.as_slice(), Some(&global));
    let surfaced = bank.surfaced();

    let columns = registry
        .iter()
        .map(|c| ColumnInfo {
            id: c.id.clone(),
            title: c.title.clone(),
            filter: c.filter_kind(),
            placeholder: bank.widget(&c.id).map(|w| w.placeholder.clone()),
            sortable: c.sortable && c.accessor.is_some(),
            hideable: c.hideable,
            surfaced: surfaced.iter().any(|w| w.column_id == c.id),
            in_global_search: global.enabled && global.column_ids.contains(&c.id),
        })
        .collect();
    Ok(CmdResult::default().with_columns(columns))
}
