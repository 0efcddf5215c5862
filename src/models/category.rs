//! Monthly category model
//!
//! A monthly category is a bucket of expenses sharing a (name, month, year)
//! key. The key is the category's lookup identity: comparisons are exact and
//! case-sensitive, so "Food" in January 2024 and "food" in January 2024 are
//! different buckets.
//!
//! Month and year are deliberately not range-checked here. The original
//! design leaves calendar validation to the caller, and a month of 13 simply
//! becomes a bucket nothing sensible ever matches.

use std::fmt;

use super::{Expense, Money};

/// A bucket of expenses for one (name, month, year) key
#[derive(Debug, Clone)]
pub struct MonthlyCategory {
    name: String,
    month: u32,
    year: i32,
    expenses: Vec<Expense>,
}

impl MonthlyCategory {
    /// Create an empty category for the given key
    pub fn new(name: impl Into<String>, month: u32, year: i32) -> Self {
        Self {
            name: name.into(),
            month,
            year,
            expenses: Vec::new(),
        }
    }

    /// The category name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The month component of the key (1-12 by convention, not enforced)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The year component of the key
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Whether this category's key matches exactly
    pub fn matches(&self, name: &str, month: u32, year: i32) -> bool {
        self.name == name && self.month == month && self.year == year
    }

    /// Append an expense. Expenses keep insertion order and duplicates are
    /// allowed; there is no removal.
    pub fn add(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// The expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of expenses recorded
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether no expenses have been recorded yet
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Sum of all expense amounts, recomputed on every call. No running
    /// total is cached, so the reported figure cannot drift from the list.
    pub fn total(&self) -> Money {
        self.expenses.iter().map(Expense::amount).sum()
    }
}

impl fmt::Display for MonthlyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.name, self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(description: &str, cents: i64, day: u32) -> Expense {
        Expense::new(
            description,
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        )
    }

    #[test]
    fn test_new_category_is_empty() {
        let category = MonthlyCategory::new("Food", 1, 2024);
        assert!(category.is_empty());
        assert_eq!(category.len(), 0);
        assert_eq!(category.total(), Money::zero());
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut category = MonthlyCategory::new("Food", 1, 2024);
        category.add(expense("Coffee", 350, 5));
        category.add(expense("Lunch", 1200, 10));
        category.add(expense("Coffee", 350, 12));

        assert_eq!(category.len(), 3);
        let descriptions: Vec<_> = category
            .expenses()
            .iter()
            .map(Expense::description)
            .collect();
        assert_eq!(descriptions, vec!["Coffee", "Lunch", "Coffee"]);
    }

    #[test]
    fn test_total_recomputes_exact_sum() {
        let mut category = MonthlyCategory::new("Food", 1, 2024);
        category.add(expense("Coffee", 1050, 5));
        category.add(expense("Lunch", 525, 10));
        assert_eq!(category.total(), Money::from_cents(1575));

        category.add(expense("Refund", -525, 11));
        assert_eq!(category.total(), Money::from_cents(1050));
    }

    #[test]
    fn test_matches_is_exact_and_case_sensitive() {
        let category = MonthlyCategory::new("Food", 1, 2024);
        assert!(category.matches("Food", 1, 2024));
        assert!(!category.matches("food", 1, 2024));
        assert!(!category.matches("Food", 2, 2024));
        assert!(!category.matches("Food", 1, 2023));
    }

    #[test]
    fn test_display() {
        let category = MonthlyCategory::new("Rent", 3, 2024);
        assert_eq!(category.to_string(), "Rent (3/2024)");
    }
}
