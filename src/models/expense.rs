//! Expense model
//!
//! A single recorded expense: what it was for, how much, and when. Expenses
//! are immutable once created; there is no edit or delete operation anywhere
//! in the application.

use chrono::NaiveDate;
use std::fmt;

use super::Money;

/// One dated, described, amount-bearing entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    description: String,
    amount: Money,
    date: NaiveDate,
}

impl Expense {
    /// Create a new expense
    pub fn new(description: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self {
            description: description.into(),
            amount,
            date,
        }
    }

    /// What the expense was for
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The amount spent
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// The calendar date of the expense
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.amount,
            self.description
        )
    }
}
