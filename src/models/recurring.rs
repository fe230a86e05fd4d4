//! Recurring expense templates
//!
//! A template periodically generates new expense records. Templates are
//! created by user action and never mutated or deleted afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;

use super::category::Category;
use super::expense::{Expense, ExpenseValidationError};
use super::ids::TemplateId;
use super::money::Money;

/// How often a recurring template becomes due
///
/// The set is closed: an unrecognized frequency string is a validation error
/// at parse time, so no template with an unknown frequency can exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Get the display name for this frequency
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Frequency {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(ExpenseError::Validation(format!(
                "invalid frequency '{}', expected weekly, monthly, or yearly",
                other
            ))),
        }
    }
}

/// A recurring expense definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringTemplate {
    /// Stable identifier, recorded on every expense this template generates
    pub id: TemplateId,

    /// Amount of each generated expense (always positive)
    pub amount: Money,

    /// Description copied onto each generated expense
    pub description: String,

    /// Category of each generated expense
    pub category: Category,

    /// How often the template becomes due
    pub frequency: Frequency,
}

impl RecurringTemplate {
    /// Create a new recurring template
    pub fn new(
        amount: Money,
        description: impl Into<String>,
        category: Category,
        frequency: Frequency,
    ) -> Self {
        Self {
            id: TemplateId::new(),
            amount,
            description: description.into(),
            category,
            frequency,
        }
    }

    /// Validate the template (same amount/description constraints as Expense)
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }

        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        Ok(())
    }

    /// Materialize a concrete expense from this template, dated `date`
    pub fn materialize(&self, date: NaiveDate) -> Expense {
        Expense {
            amount: self.amount,
            description: self.description.clone(),
            category: self.category,
            date,
            template_id: Some(self.id),
        }
    }
}
