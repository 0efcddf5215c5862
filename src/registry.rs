//! Category registry
//!
//! The registry owns every monthly category created during the session and
//! resolves incoming expenses to the right bucket with a find-or-create
//! lookup. Keys are never duplicated: a category is only ever constructed
//! when the linear scan finds no exact match, so the scan itself is the
//! uniqueness guarantee.
//!
//! All state is in-memory and lives for the session only; nothing is
//! persisted.

use crate::models::{Expense, MonthlyCategory};

/// The in-memory collection of all monthly categories, in creation order
#[derive(Debug, Default)]
pub struct Registry {
    categories: Vec<MonthlyCategory>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a key to its category, creating an empty one on first use.
    ///
    /// The scan walks categories in creation order and returns the first
    /// exact (name, month, year) match. Any well-typed key is accepted,
    /// including out-of-range calendar values; validating those is the
    /// caller's job.
    pub fn find_or_create(&mut self, name: &str, month: u32, year: i32) -> &mut MonthlyCategory {
        let index = match self.categories.iter().position(|c| c.matches(name, month, year)) {
            Some(index) => index,
            None => {
                self.categories.push(MonthlyCategory::new(name, month, year));
                self.categories.len() - 1
            }
        };
        &mut self.categories[index]
    }

    /// Record an expense under the given key
    pub fn record_expense(&mut self, name: &str, month: u32, year: i32, expense: Expense) {
        self.find_or_create(name, month, year).add(expense);
    }

    /// The categories in the order they were first created
    pub fn categories(&self) -> &[MonthlyCategory] {
        &self.categories
    }

    /// Number of categories created so far
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether no category has been created yet
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
