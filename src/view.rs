// src/view.rs
//! Plain-text rendering of the dashboard for terminal output.
use std::fmt::Write;

use crate::error::FieldErrors;
use crate::handlers::Notice;
use crate::models::{Category, Product};
use crate::state::{BrowserState, PendingDelete};

const HEADERS: [&str; 5] = ["ID", "Name", "Price", "Category", "Status"];
const NO_CATEGORY: &str = "—";

fn row(product: &Product) -> [String; 5] {
    [
        product.id.to_string(),
        product.name.clone(),
        format!("{:.2}", product.price),
        product
            .category
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_else(|| NO_CATEGORY.to_string()),
        product.stock_status.label().to_string(),
    ]
}

/// The listing as a table. While loading, or when there is nothing to show,
/// a single placeholder line stands in for the rows.
pub fn render_table(state: &BrowserState) -> String {
    let rows: Vec<[String; 5]> = state.items().iter().map(row).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_row(&mut out, &HEADERS.map(str::to_string), &widths);
    let rule: usize = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);
    let _ = writeln!(out, "{}", "-".repeat(rule));

    if state.is_loading() {
        let _ = writeln!(out, "Loading…");
    } else if let Some(message) = state.error() {
        let _ = writeln!(out, "Error: {message}");
    } else if rows.is_empty() {
        let _ = writeln!(out, "No products found");
    } else {
        for cells in &rows {
            write_row(&mut out, cells, &widths);
        }
    }
    out
}

fn write_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &width))| {
            // Price is right-aligned.
            if i == 2 {
                format!("{cell:>width$}")
            } else {
                format!("{cell:<width$}")
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");
    let _ = writeln!(out, "{}", line.trim_end());
}

pub fn render_footer(state: &BrowserState) -> String {
    let mut footer = format!(
        "Page {} of {} • {} total",
        state.page(),
        state.total_pages(),
        state.total()
    );
    let prev = if state.can_go_previous() { "[prev]" } else { "(prev)" };
    let next = if state.can_go_next() { "[next]" } else { "(next)" };
    let _ = write!(footer, "   {prev} {next}");
    footer
}

pub fn render_filters(state: &BrowserState) -> String {
    let filters = state.filters();
    let category = match filters.category_id {
        Some(id) => state
            .category_name(id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{id}")),
        None => "any".to_string(),
    };
    format!(
        "search: {:?}  stock: {}  category: {}  per page: {}",
        filters.q,
        filters.stock_status.map(|s| s.label()).unwrap_or("any"),
        category,
        state.per_page()
    )
}

pub fn render_categories(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories available\n".to_string();
    }
    categories
        .iter()
        .map(|c| format!("{:>5}  {}\n", c.id, c.name))
        .collect()
}

pub fn render_confirmation(pending: &PendingDelete) -> String {
    format!("{}\n{}", pending.title(), pending.warning())
}

pub fn render_notice(notice: &Notice) -> String {
    let tag = if notice.is_error() { "error" } else { "ok" };
    format!("[{tag}] {}", notice.message())
}

pub fn render_field_errors(errors: &FieldErrors) -> String {
    let mut out = String::new();
    for (field, messages) in errors {
        for message in messages {
            let _ = writeln!(out, "  {field}: {message}");
        }
    }
    out
}
