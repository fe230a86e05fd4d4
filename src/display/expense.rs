//! Expense display formatting
//!
//! Row formatting honors the configured currency symbol and date format.

use crate::config::settings::Settings;
use crate::models::{Expense, RecurringTemplate};

/// Format a single expense row
pub fn format_expense_row(expense: &Expense, settings: &Settings) -> String {
    format!(
        "{} - {} (Category: {}) - {}",
        expense.date.format(&settings.date_format),
        expense.description,
        expense.category,
        expense.amount.format_with_symbol(&settings.currency_symbol)
    )
}

/// Format a list of expenses, one row per expense
pub fn format_expense_list(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::from("Expenses:\n");
    for expense in expenses {
        output.push_str(&format_expense_row(expense, settings));
        output.push('\n');
    }
    output
}

/// Format a single recurring template row
pub fn format_template_row(template: &RecurringTemplate, settings: &Settings) -> String {
    format!(
        "{} - {} (Category: {}) - {}",
        template.frequency,
        template.description,
        template.category,
        template.amount.format_with_symbol(&settings.currency_symbol)
    )
}

/// Format the recurring template list
pub fn format_template_list(templates: &[RecurringTemplate], settings: &Settings) -> String {
    if templates.is_empty() {
        return "No recurring expenses defined.\n".to_string();
    }

    let mut output = String::from("Recurring expenses:\n");
    for template in templates {
        output.push_str(&format!(
            "{} [{}]\n",
            format_template_row(template, settings),
            template.id
        ));
    }
    output
}
