//! Turns command results into terminal text.
//!
//! Every `render_*` function returns a `String` so output can be asserted in
//! tests without a terminal; `use_color` toggles styling explicitly instead
//! of relying on tty detection.

use super::styles::{category_style, THEME};
use colored::Colorize;
use console::Style;
use shelf::api::{CmdMessage, ColumnInfo, ControlState, Listing, MessageLevel, SearchBox};
use shelf::catalog::{format_price, CATEGORY};
use shelf::config::ShelfConfig;
use shelf::favorites::{FAVORITE_COLUMN_ID, STAR_OFF, STAR_ON};
use shelf::model::{Category, Product};
use shelf::table::{CellValue, Header, RowCells};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_CELL_WIDTH: usize = 40;
const GAP: &str = "  ";
const SELECTED_MARKER: &str = "●";

pub const EMPTY_CATALOG: &str = "No products available.";
pub const NO_MATCHES: &str = "No products.";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn paint(style: &Style, text: &str, use_color: bool) -> String {
    style.apply_to(text).force_styling(use_color).to_string()
}

pub fn render_listing(listing: &Listing, use_color: bool) -> String {
    let mut lines = Vec::new();
    if let Some(search) = &listing.search {
        lines.push(render_search(search, use_color));
    }
    if !listing.controls.is_empty() {
        lines.push(render_controls(&listing.controls, use_color));
    }
    if listing.catalog_empty() {
        lines.push(EMPTY_CATALOG.to_string());
        return join_lines(lines);
    }

    let view = &listing.view;
    let widths = column_widths(&view.headers, &view.rows);

    lines.push(String::new());
    lines.push(render_header(&view.headers, &widths, use_color));
    if view.rows.is_empty() {
        lines.push(paint(&THEME.muted, NO_MATCHES, use_color));
    }
    for row in &view.rows {
        lines.push(render_row(row, &view.headers, &widths, use_color));
    }
    lines.push(String::new());

    let (page, pages) = view.pagination.display_page();
    lines.push(paint(
        &THEME.muted,
        &format!(
            "{} of {} row(s) selected.",
            view.selected_count, view.pagination.filtered_count
        ),
        use_color,
    ));
    lines.push(format!("Page {} of {}", page, pages));
    join_lines(lines)
}

fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_search(search: &SearchBox, use_color: bool) -> String {
    let value = if search.value.is_empty() {
        paint(&THEME.muted, &search.placeholder, use_color)
    } else {
        search.value.clone()
    };
    format!("Search: {}", value)
}

fn render_controls(controls: &[ControlState], use_color: bool) -> String {
    let parts: Vec<String> = controls
        .iter()
        .map(|c| {
            let value = if c.value.is_empty() {
                paint(&THEME.muted, &c.placeholder, use_color)
            } else {
                c.value.clone()
            };
            format!("{}: {}", c.title, value)
        })
        .collect();
    format!("Filters: {}", parts.join(" | "))
}

fn header_label(header: &Header) -> String {
    match header.sort {
        Some(direction) => format!("{} {}", header.title, direction.arrow()),
        None => header.title.clone(),
    }
}

fn column_widths(headers: &[Header], rows: &[RowCells]) -> Vec<usize> {
    headers
        .iter()
        .map(|h| {
            let widest_cell = rows
                .iter()
                .filter_map(|r| r.cell(&h.column_id))
                .map(|c| c.text.width())
                .max()
                .unwrap_or(0);
            header_label(h).width().max(widest_cell).min(MAX_CELL_WIDTH)
        })
        .collect()
}

fn pad(text: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    if right_align {
        format!("{}{}", fill, text)
    } else {
        format!("{}{}", text, fill)
    }
}

fn render_header(headers: &[Header], widths: &[usize], use_color: bool) -> String {
    let cells: Vec<String> = headers
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (h, width))| {
            let label = truncate_to_width(&header_label(h), *width);
            let padded = if i + 1 == headers.len() {
                label
            } else {
                pad(&label, *width, false)
            };
            let style = if h.sort.is_some() {
                &THEME.sorted_header
            } else {
                &THEME.header
            };
            paint(style, &padded, use_color)
        })
        .collect();
    format!("{}{}{}", " ", GAP, cells.join(GAP))
}

fn render_row(row: &RowCells, headers: &[Header], widths: &[usize], use_color: bool) -> String {
    let marker = if row.selected {
        paint(&THEME.selected, SELECTED_MARKER, use_color)
    } else {
        " ".to_string()
    };

    let cells: Vec<String> = headers
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (h, width))| {
            let Some(cell) = row.cell(&h.column_id) else {
                return " ".repeat(*width);
            };
            let numeric = matches!(cell.value, CellValue::Number(_));
            let text = truncate_to_width(&cell.text, *width);
            let padded = if i + 1 == headers.len() && !numeric {
                text
            } else {
                pad(&text, *width, numeric)
            };
            paint(&cell_style(&h.column_id, &cell.value), &padded, use_color)
        })
        .collect();
    format!("{}{}{}", marker, GAP, cells.join(GAP))
}

fn cell_style(column_id: &str, value: &CellValue) -> Style {
    match (column_id, value) {
        (FAVORITE_COLUMN_ID, _) => THEME.star.clone(),
        (CATEGORY, CellValue::Text(raw)) => category_style(&Category::from(raw.as_str())),
        (_, CellValue::Number(_)) => THEME.price.clone(),
        _ => Style::new(),
    }
}

pub fn render_product(product: &Product, use_color: bool) -> String {
    let star = if product.is_favorite { STAR_ON } else { STAR_OFF };
    let mut lines = vec![format!(
        "{} {}",
        paint(&THEME.star, star, use_color),
        paint(&THEME.title, &product.name, use_color)
    )];
    let fields = [
        ("ID", product.id.clone()),
        (
            "Category",
            paint(
                &category_style(&product.category),
                product.category.label(),
                use_color,
            ),
        ),
        ("Price", paint(&THEME.price, &format_price(product.price), use_color)),
        ("Description", product.description.clone()),
    ];
    for (label, value) in fields {
        if value.is_empty() {
            continue;
        }
        lines.push(format!("  {:<12} {}", label, value));
    }
    join_lines(lines)
}

pub fn render_columns(columns: &[ColumnInfo], use_color: bool) -> String {
    let mut lines = vec![paint(
        &THEME.header,
        &format!(
            "{:<12} {:<12} {:<8} {:<8} {:<8} {}",
            "ID", "TITLE", "FILTER", "SORT", "HIDE", "CONTROL"
        ),
        use_color,
    )];
    for c in columns {
        let filter = c.filter.map(|k| k.to_string()).unwrap_or_else(|| "-".into());
        let control = if c.surfaced {
            c.placeholder.clone().unwrap_or_default()
        } else if c.in_global_search {
            "(global search)".to_string()
        } else if c.filter.is_some() {
            "(--filter only)".to_string()
        } else {
            "-".to_string()
        };
        lines.push(format!(
            "{:<12} {:<12} {:<8} {:<8} {:<8} {}",
            c.id,
            c.title,
            filter,
            yes_no(c.sortable),
            yes_no(c.hideable),
            control
        ));
    }
    join_lines(lines)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

pub fn render_config(config: &ShelfConfig) -> String {
    let lines = config
        .entries()
        .into_iter()
        .map(|(key, value)| format!("{} = {}", key, value))
        .collect();
    join_lines(lines)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
