//! spendlog - Terminal-based personal expense tracker
//!
//! This library provides the core functionality for the spendlog expense
//! tracker: expenses are recorded with a description, amount, and date,
//! grouped into monthly category buckets keyed by (name, month, year), and
//! rendered as itemized reports with totals.
//!
//! Everything is in-memory and single-threaded; state lives for one
//! interactive session and is discarded at exit.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses, monthly categories)
//! - `registry`: Find-or-create category lookup and expense recording
//! - `display`: Report formatting for terminal output
//! - `session`: The interactive menu loop
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use spendlog::models::{Expense, Money};
//! use spendlog::registry::Registry;
//!
//! let mut registry = Registry::new();
//! let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
//! registry.record_expense("Food", 1, 2024, Expense::new("Coffee", Money::from_cents(350), date));
//! assert_eq!(registry.categories()[0].total(), Money::from_cents(350));
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod registry;
pub mod session;

pub use error::SpendlogError;
