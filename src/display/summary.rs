//! Summary display formatting

use crate::config::settings::Settings;
use crate::models::{Category, Money};

/// Format the monthly expense summary
pub fn format_monthly_summary(totals: &[(String, Money)], settings: &Settings) -> String {
    if totals.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::from("Monthly Expense Summary:\n");
    for (month, total) in totals {
        output.push_str(&format!(
            "{}: {}\n",
            month,
            total.format_with_symbol(&settings.currency_symbol)
        ));
    }
    output
}

/// Format the category-wise expense summary
pub fn format_category_summary(totals: &[(Category, Money)], settings: &Settings) -> String {
    let mut output = String::from("Category-wise Expense Summary:\n");
    for (category, total) in totals {
        output.push_str(&format!(
            "{}: {}\n",
            category,
            total.format_with_symbol(&settings.currency_symbol)
        ));
    }
    output
}
