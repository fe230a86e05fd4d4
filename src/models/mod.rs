//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent the domain:
//! expenses, recurring templates, categories, and money amounts.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod recurring;

pub use category::Category;
pub use expense::{Expense, ExpenseValidationError};
pub use ids::TemplateId;
pub use money::Money;
pub use recurring::{Frequency, RecurringTemplate};
