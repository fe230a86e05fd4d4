//! Expense service
//!
//! Business logic for recording and listing expenses. Validation happens
//! before anything is appended, so a rejected expense leaves no partial
//! state behind.

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, Frequency, Money, RecurringTemplate};
use crate::storage::Storage;

use super::query::ExpenseFilter;

/// Service for expense and recurring-template management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense and save the ledger
    pub fn add_expense(
        &self,
        amount: Money,
        description: &str,
        category: Category,
        date: NaiveDate,
    ) -> ExpenseResult<Expense> {
        let expense = Expense::new(amount, description, category, date);
        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.storage.expenses.append(expense.clone())?;
        self.storage.expenses.save()?;

        Ok(expense)
    }

    /// List expenses, optionally filtered
    pub fn list_expenses(&self, filter: &ExpenseFilter) -> ExpenseResult<Vec<Expense>> {
        let history = self.storage.expenses.get_all()?;
        Ok(filter.apply(&history))
    }

    /// Create a new recurring template and save the template set
    pub fn add_template(
        &self,
        amount: Money,
        description: &str,
        category: Category,
        frequency: Frequency,
    ) -> ExpenseResult<RecurringTemplate> {
        let template = RecurringTemplate::new(amount, description, category, frequency);
        template
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.storage.templates.add(template.clone())?;
        self.storage.templates.save()?;

        Ok(template)
    }

    /// List all recurring templates
    pub fn list_templates(&self) -> ExpenseResult<Vec<RecurringTemplate>> {
        self.storage.templates.get_all()
    }
}
