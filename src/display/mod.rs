//! Display formatting for terminal output
//!
//! Provides pure formatting functions that turn registry state into the
//! tabular reports shown to the user.

pub mod report;

pub use report::{format_category_report, format_expense_row, format_full_report};
