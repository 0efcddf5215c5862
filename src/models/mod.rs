//! Core data models for spendlog
//!
//! This module contains the data structures that represent the expense
//! tracking domain: money amounts, individual expenses, and the monthly
//! category buckets that group them.

pub mod category;
pub mod expense;
pub mod money;

pub use category::MonthlyCategory;
pub use expense::Expense;
pub use money::Money;
