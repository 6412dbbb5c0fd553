//! Product table wiring: the columns, global search, and favorites overlay
//! that turn the generic table engine into the catalog browser.

use crate::error::Result;
use crate::favorites::FavoriteSet;
use crate::model::{Category, Product};
use crate::table::{
    ColumnDescriptor, ColumnRegistry, FilterConfig, GlobalFilterConfig, SelectOption,
    TableOptions, TableStore,
};

pub const NAME: &str = "name";
pub const PRICE: &str = "price";
pub const CATEGORY: &str = "category";
pub const DESCRIPTION: &str = "description";

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

pub fn category_options() -> Vec<SelectOption> {
    Category::KNOWN
        .iter()
        .map(|c| SelectOption::new(c.label(), c.as_str()))
        .collect()
}

pub fn product_columns() -> Vec<ColumnDescriptor<Product>> {
    vec![
        ColumnDescriptor::accessor(NAME, "Name", |p: &Product| p.name.as_str().into())
            .with_filter(FilterConfig::text().with_placeholder("Search by name...")),
        ColumnDescriptor::accessor(PRICE, "Price", |p: &Product| p.price.into())
            .with_filter(FilterConfig::number().with_placeholder("Filter by price..."))
            .with_renderer(|p: &Product| format_price(p.price)),
        ColumnDescriptor::accessor(CATEGORY, "Category", |p: &Product| {
            p.category.as_str().into()
        })
        .with_filter(
            FilterConfig::select(category_options()).with_placeholder("Filter by category..."),
        )
        .with_renderer(|p: &Product| p.category.label().to_string()),
        ColumnDescriptor::accessor(DESCRIPTION, "Description", |p: &Product| {
            p.description.as_str().into()
        })
        .sortable(false),
    ]
}

pub fn global_filter_config(enabled: bool) -> GlobalFilterConfig {
    let config = GlobalFilterConfig::new([NAME, CATEGORY]).with_placeholder("Search products...");
    if enabled {
        config
    } else {
        config.disabled()
    }
}

/// Builds the product table with the favorite column in front.
pub fn product_table(
    products: Vec<Product>,
    favorites: &FavoriteSet,
    options: TableOptions,
    global_search: bool,
) -> Result<TableStore<Product>> {
    let registry = favorites.overlay(ColumnRegistry::new(product_columns())?)?;
    TableStore::new(
        registry,
        products,
        Some(global_filter_config(global_search)),
        options,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{catalog, sample_products};
    use crate::table::{FilterBank, SortKey};

    fn table(products: Vec<Product>) -> TableStore<Product> {
        product_table(
            products,
            &FavoriteSet::default(),
            TableOptions::default(),
            true,
        )
        .unwrap()
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(10.0), "$10.00");
        assert_eq!(format_price(12.5), "$12.50");
    }

    #[test]
    fn test_search_mo_finds_mouse() {
        let mut store = table(sample_products());
        store.set_global_filter("mo");
        assert_eq!(store.view().row_ids(), vec!["1"]);
    }

    #[test]
    fn test_search_matches_category_value() {
        let mut store = table(catalog());
        store.set_global_filter("BOOKS");
        assert_eq!(store.view().row_ids(), vec!["4", "7", "11"]);
    }

    #[test]
    fn test_price_filter() {
        let mut store = table(sample_products());
        store.set_filter_value(PRICE, "20").unwrap();
        assert_eq!(store.view().row_ids(), vec!["2"]);
    }

    #[test]
    fn test_category_all() {
        let mut store = table(sample_products());
        let bank = FilterBank::for_store(&store);
        bank.apply(&mut store, CATEGORY, "all").unwrap();
        assert_eq!(store.view().row_ids(), vec!["1", "2"]);
        bank.apply(&mut store, CATEGORY, "clothing").unwrap();
        assert_eq!(store.view().row_ids(), vec!["2"]);
    }

    #[test]
    fn test_surfaced_widgets_with_global_search() {
        let store = table(sample_products());
        let bank = FilterBank::for_store(&store);
        let ids: Vec<_> = bank
            .surfaced()
            .iter()
            .map(|w| w.column_id.clone())
            .collect();
        assert_eq!(ids, vec!["favorite".to_string(), CATEGORY.to_string()]);
        assert!(bank.shows_global_search());
    }

    #[test]
    fn test_cells_render_labels_and_prices() {
        let store = table(sample_products());
        let row = &store.view().rows[0];
        assert_eq!(row.cell(PRICE).unwrap().text, "$10.00");
        assert_eq!(row.cell(CATEGORY).unwrap().text, "Electronics");
        assert_eq!(row.cell("favorite").unwrap().text, "☆");
    }

    #[test]
    fn test_sort_by_price_is_stable() {
        let mut store = table(catalog());
        store.set_sorting(vec![SortKey::asc(PRICE)]).unwrap();
        let ids = store.view().row_ids();
        let shirt = ids.iter().position(|id| *id == "2").unwrap();
        let lamp = ids.iter().position(|id| *id == "5").unwrap();
        assert_eq!(lamp, shirt + 1);
    }

    #[test]
    fn test_description_is_not_sortable() {
        let mut store = table(sample_products());
        assert!(store.toggle_sorting(DESCRIPTION, false).is_err());
    }
}
