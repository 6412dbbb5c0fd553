//! # Filter Composer
//!
//! Decides whether a record is visible given the current [`TableState`].
//!
//! Two independent sources narrow the row set and are combined with AND:
//!
//! - **Global search**: one value matched against an ordered list of eligible
//!   columns. A row passes if *any* eligible column matches.
//! - **Column filters**: one value per column. A row passes only if *every*
//!   active column predicate accepts it.
//!
//! A column's predicate is either its custom predicate or the default for its
//! [`FilterKind`]. Malformed input (an unparsable number, say) never errors: the
//! predicate simply doesn't match.

use super::column::{CellValue, ColumnDescriptor, ColumnFilter, FilterKind, GlobalFilterConfig};
use super::state::TableState;

/// Sentinel that select and boolean controls use for "no filter".
pub const ALL_TOKEN: &str = "all";

/// Normalizes a filter value for a column: `None` means the filter is inactive.
/// Blank values are inactive for every kind, matching how global search
/// trims its input.
pub fn active_value<'a, R>(column: &ColumnDescriptor<R>, raw: &'a str) -> Option<&'a str> {
    if raw.trim().is_empty() {
        return None;
    }
    match column.filter_kind() {
        Some(kind) if kind.has_all_token() && raw.trim().eq_ignore_ascii_case(ALL_TOKEN) => None,
        _ => Some(raw),
    }
}

pub fn is_row_visible<R>(
    record: &R,
    state: &TableState,
    columns: &[ColumnDescriptor<R>],
    global: Option<&GlobalFilterConfig>,
) -> bool {
    if let Some(config) = global {
        if !passes_global(record, &state.global_filter, columns, config) {
            return false;
        }
    }

    state.filter_values.iter().all(|(column_id, raw)| {
        let Some(column) = columns.iter().find(|c| &c.id == column_id) else {
            return true;
        };
        match active_value(column, raw) {
            Some(value) => column_matches(record, column, value),
            None => true,
        }
    })
}

fn passes_global<R>(
    record: &R,
    raw: &str,
    columns: &[ColumnDescriptor<R>],
    config: &GlobalFilterConfig,
) -> bool {
    let needle = raw.trim().to_lowercase();
    if !config.enabled || needle.is_empty() || config.column_ids.is_empty() {
        return true;
    }

    let eligible: Vec<&ColumnDescriptor<R>> = config
        .column_ids
        .iter()
        .filter_map(|id| columns.iter().find(|c| &c.id == id))
        .collect();
    // No resolvable column: nothing to search, so search is a no-op.
    if eligible.is_empty() {
        return true;
    }

    eligible.into_iter().any(|column| match &column.filter {
        ColumnFilter::Custom(predicate) => predicate(record, &needle),
        ColumnFilter::Default => contains_ci(&column.value(record), &needle),
    })
}

/// Applies a column's predicate to an active (non-empty, non-"all") value.
pub fn column_matches<R>(record: &R, column: &ColumnDescriptor<R>, value: &str) -> bool {
    match &column.filter {
        ColumnFilter::Custom(predicate) => predicate(record, value),
        ColumnFilter::Default => {
            let cell = column.value(record);
            match column.filter_kind() {
                None | Some(FilterKind::Text) => contains_ci(&cell, &value.to_lowercase()),
                Some(FilterKind::Number) => number_equals(&cell, value),
                Some(FilterKind::Select) => select_equals(&cell, value),
                Some(FilterKind::Boolean) => bool_equals(&cell, value),
            }
        }
    }
}

/// `needle` must already be lower-cased.
fn contains_ci(cell: &CellValue, needle: &str) -> bool {
    cell.as_text()
        .map(|text| text.to_lowercase().contains(needle))
        .unwrap_or(false)
}

fn number_equals(cell: &CellValue, value: &str) -> bool {
    let Ok(wanted) = value.trim().parse::<f64>() else {
        return false;
    };
    match cell {
        CellValue::Number(n) => *n == wanted,
        CellValue::Text(s) => s.trim().parse::<f64>().map(|n| n == wanted).unwrap_or(false),
        _ => false,
    }
}

fn select_equals(cell: &CellValue, value: &str) -> bool {
    cell.as_text().map(|text| text == value).unwrap_or(false)
}

pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn bool_equals(cell: &CellValue, value: &str) -> bool {
    match (cell, parse_bool(value)) {
        (CellValue::Bool(b), Some(wanted)) => *b == wanted,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::column::{FilterConfig, SelectOption};

    #[derive(Debug, Clone)]
    struct Item {
        id: &'static str,
        name: &'static str,
        kind: &'static str,
        price: f64,
        in_stock: bool,
        note: Option<&'static str>,
    }

    fn items() -> Vec<Item> {
        vec![
            Item {
                id: "1",
                name: "Mouse",
                kind: "electronics",
                price: 10.0,
                in_stock: true,
                note: None,
            },
            Item {
                id: "2",
                name: "Shirt",
                kind: "clothing",
                price: 20.0,
                in_stock: false,
                note: Some("cotton"),
            },
        ]
    }

    fn columns() -> Vec<ColumnDescriptor<Item>> {
        vec![
            ColumnDescriptor::accessor("name", "Name", |i: &Item| i.name.into())
                .with_filter(FilterConfig::text()),
            ColumnDescriptor::accessor("kind", "Kind", |i: &Item| i.kind.into()).with_filter(
                FilterConfig::select(vec![
                    SelectOption::new("Electronics", "electronics"),
                    SelectOption::new("Clothing", "clothing"),
                ]),
            ),
            ColumnDescriptor::accessor("price", "Price", |i: &Item| i.price.into())
                .with_filter(FilterConfig::number()),
            ColumnDescriptor::accessor("in_stock", "In stock", |i: &Item| i.in_stock.into())
                .with_filter(FilterConfig::boolean()),
            ColumnDescriptor::accessor("note", "Note", |i: &Item| i.note.into()),
        ]
    }

    fn visible(state: &TableState, global: Option<&GlobalFilterConfig>) -> Vec<&'static str> {
        let cols = columns();
        items()
            .iter()
            .filter(|i| is_row_visible(*i, state, &cols, global))
            .map(|i| i.id)
            .collect()
    }

    fn with_filter(column: &str, value: &str) -> TableState {
        let mut state = TableState::default();
        state
            .filter_values
            .insert(column.to_string(), value.to_string());
        state
    }

    #[test]
    fn global_search_matches_any_eligible_column() {
        let global = GlobalFilterConfig::new(["name", "kind"]);
        let state = TableState {
            global_filter: "mo".to_string(),
            ..TableState::default()
        };
        assert_eq!(visible(&state, Some(&global)), vec!["1"]);

        let state = TableState {
            global_filter: "  CLOTH ".to_string(),
            ..TableState::default()
        };
        assert_eq!(visible(&state, Some(&global)), vec!["2"]);
    }

    #[test]
    fn global_search_ignores_ineligible_columns() {
        let global = GlobalFilterConfig::new(["name"]);
        let state = TableState {
            global_filter: "clothing".to_string(),
            ..TableState::default()
        };
        assert!(visible(&state, Some(&global)).is_empty());
    }

    #[test]
    fn global_search_with_no_eligible_columns_is_a_noop() {
        let global = GlobalFilterConfig::new(Vec::<String>::new());
        let state = TableState {
            global_filter: "zzz".to_string(),
            ..TableState::default()
        };
        assert_eq!(visible(&state, Some(&global)), vec!["1", "2"]);
    }

    #[test]
    fn disabled_global_search_is_skipped() {
        let global = GlobalFilterConfig::new(["name"]).disabled();
        let state = TableState {
            global_filter: "zzz".to_string(),
            ..TableState::default()
        };
        assert_eq!(visible(&state, Some(&global)), vec!["1", "2"]);
    }

    #[test]
    fn global_custom_predicate_receives_lowercased_value() {
        let cols = vec![ColumnDescriptor::accessor("name", "Name", |i: &Item| {
            i.name.into()
        })
        .with_predicate(|i: &Item, v: &str| {
            assert_eq!(v, "shirt");
            i.name == "Shirt"
        })];
        let global = GlobalFilterConfig::new(["name"]);
        let state = TableState {
            global_filter: " SHIRT ".to_string(),
            ..TableState::default()
        };
        let shown: Vec<_> = items()
            .into_iter()
            .filter(|i| is_row_visible(i, &state, &cols, Some(&global)))
            .map(|i| i.id)
            .collect();
        assert_eq!(shown, vec!["2"]);
    }

    #[test]
    fn number_filter_matches_parsed_equality() {
        assert_eq!(visible(&with_filter("price", "20"), None), vec!["2"]);
        assert_eq!(visible(&with_filter("price", " 10.0 "), None), vec!["1"]);
    }

    #[test]
    fn unparsable_number_never_matches() {
        assert!(visible(&with_filter("price", "cheap"), None).is_empty());
    }

    #[test]
    fn select_filter_is_exact() {
        assert_eq!(visible(&with_filter("kind", "clothing"), None), vec!["2"]);
        assert!(visible(&with_filter("kind", "cloth"), None).is_empty());
    }

    #[test]
    fn all_token_clears_select_and_boolean() {
        assert_eq!(visible(&with_filter("kind", "all"), None), vec!["1", "2"]);
        assert_eq!(visible(&with_filter("in_stock", "ALL"), None), vec!["1", "2"]);
    }

    #[test]
    fn all_token_is_literal_for_text() {
        assert!(visible(&with_filter("name", "all"), None).is_empty());
    }

    #[test]
    fn boolean_filter_parses_value() {
        assert_eq!(visible(&with_filter("in_stock", "true"), None), vec!["1"]);
        assert_eq!(visible(&with_filter("in_stock", "FALSE"), None), vec!["2"]);
        assert!(visible(&with_filter("in_stock", "maybe"), None).is_empty());
    }

    #[test]
    fn text_filter_is_case_insensitive_substring() {
        assert_eq!(visible(&with_filter("name", "IRT"), None), vec!["2"]);
    }

    #[test]
    fn null_values_never_match() {
        assert_eq!(visible(&with_filter("note", "cot"), None), vec!["2"]);
    }

    #[test]
    fn column_filters_are_conjunctive_with_global() {
        let global = GlobalFilterConfig::new(["name", "kind"]);
        let mut state = with_filter("price", "10");
        state.global_filter = "shirt".to_string();
        assert!(visible(&state, Some(&global)).is_empty());

        state.global_filter = "mouse".to_string();
        assert_eq!(visible(&state, Some(&global)), vec!["1"]);
    }

    #[test]
    fn empty_registry_filters_nothing() {
        let state = TableState {
            global_filter: "mo".to_string(),
            ..with_filter("price", "10")
        };
        let global = GlobalFilterConfig::new(["name"]);
        let rows = items();
        assert!(rows
            .iter()
            .all(|i| is_row_visible(i, &state, &[], Some(&global))));
    }

    #[test]
    fn global_columns_missing_from_registry_filter_nothing() {
        let state = TableState {
            global_filter: "zzz".to_string(),
            ..TableState::default()
        };
        let global = GlobalFilterConfig::new(["nope"]);
        let cols = columns();
        assert!(items()
            .iter()
            .all(|i| is_row_visible(i, &state, &cols, Some(&global))));
    }

    #[test]
    fn blank_column_filter_is_inactive() {
        let cols = columns();
        let state = with_filter("name", "   ");
        assert!(items()
            .iter()
            .all(|i| is_row_visible(i, &state, &cols, None)));
        assert_eq!(active_value(&cols[0], "  "), None);
    }
}
