//! Expense record model
//!
//! An expense is immutable once created: the store is append-only during a
//! session. Expenses materialized from a recurring template carry the
//! template's ID; manually entered expenses do not.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::TemplateId;
use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Amount spent (always positive)
    pub amount: Money,

    /// What the expense was for
    pub description: String,

    /// Category this expense belongs to
    pub category: Category,

    /// Calendar date of the expense (no time component)
    pub date: NaiveDate,

    /// The recurring template that generated this expense, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<TemplateId>,
}

impl Expense {
    /// Create a new manually entered expense
    pub fn new(
        amount: Money,
        description: impl Into<String>,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            category,
            date,
            template_id: None,
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }

        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        Ok(())
    }

    /// The "YYYY-MM" key this expense falls into for monthly summaries
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount,
    EmptyDescription,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Amount must be greater than zero"),
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
