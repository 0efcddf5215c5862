//! Expense report formatting
//!
//! Renders categories as boxed tables for terminal output. All functions
//! here are pure: they take the state, return a `String`, and touch nothing.

use crate::models::{Expense, MonthlyCategory};
use crate::registry::Registry;

const DESC_WIDTH: usize = 20;
const AMOUNT_WIDTH: usize = 10;
const DATE_WIDTH: usize = 10;

/// Total width of a table row including borders and padding
const TABLE_WIDTH: usize = DESC_WIDTH + AMOUNT_WIDTH + DATE_WIDTH + 10;

/// Format one category as a boxed table: header, one row per expense in
/// insertion order, and a trailing total row. An empty category renders the
/// header and a zero total with no expense rows.
pub fn format_category_report(category: &MonthlyCategory) -> String {
    let rule = "-".repeat(TABLE_WIDTH);
    let mut output = String::new();

    output.push_str(&rule);
    output.push('\n');
    output.push_str(&format!(
        "| {:<width$} |\n",
        format!("Category: {} ({}/{})", category.name(), category.month(), category.year()),
        width = TABLE_WIDTH - 4
    ));
    output.push_str(&rule);
    output.push('\n');
    output.push_str(&format!(
        "| {:<DESC_WIDTH$} | {:>AMOUNT_WIDTH$} | {:>DATE_WIDTH$} |\n",
        "Description", "Amount", "Date"
    ));
    output.push_str(&rule);
    output.push('\n');

    for expense in category.expenses() {
        output.push_str(&format_expense_row(expense));
    }

    output.push_str(&rule);
    output.push('\n');
    output.push_str(&format!(
        "| {:<DESC_WIDTH$} | {:>AMOUNT_WIDTH$} | {:>DATE_WIDTH$} |\n",
        "Total",
        category.total().to_string(),
        ""
    ));
    output.push_str(&rule);
    output.push('\n');

    output
}

/// Format a single expense as a table row
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "| {:<DESC_WIDTH$} | {:>AMOUNT_WIDTH$} | {:>DATE_WIDTH$} |\n",
        truncate(expense.description(), DESC_WIDTH),
        expense.amount().to_string(),
        expense.date().format("%Y-%m-%d").to_string()
    )
}

/// Format every category in creation order, each section followed by a blank
/// separator line. An empty registry produces an empty string.
pub fn format_full_report(registry: &Registry) -> String {
    let mut output = String::new();
    for category in registry.categories() {
        output.push_str(&format_category_report(category));
        output.push('\n');
    }
    output
}

/// Truncate a string to a maximum length with ellipsis
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
