//! Summary aggregations over the expense ledger
//!
//! All summations are exact (integer cents); rounding to two decimal places
//! only happens when amounts are formatted for display.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{Category, Expense, Money};

/// Total spent per "YYYY-MM" month
///
/// Key order is first-seen order over the ledger, matching expense insertion
/// order; the result is deliberately not sorted.
pub fn monthly_totals(history: &[Expense]) -> Vec<(String, Money)> {
    let mut totals: Vec<(String, Money)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for expense in history {
        let key = expense.month_key();
        match positions.get(&key) {
            Some(&i) => totals[i].1 += expense.amount,
            None => {
                positions.insert(key.clone(), totals.len());
                totals.push((key, expense.amount));
            }
        }
    }

    totals
}

/// Total spent per category
///
/// Always reports every category in declaration order, with a zero total for
/// categories that have no matching expenses.
pub fn category_totals(history: &[Expense]) -> Vec<(Category, Money)> {
    Category::all()
        .iter()
        .map(|&category| {
            let total = history
                .iter()
                .filter(|e| e.category == category)
                .map(|e| e.amount)
                .sum();
            (category, total)
        })
        .collect()
}

/// Total spent per day, in ascending date order
///
/// Feeds the line chart: one point per distinct expense date.
pub fn daily_totals(history: &[Expense]) -> Vec<(NaiveDate, Money)> {
    let mut by_date: HashMap<NaiveDate, Money> = HashMap::new();
    for expense in history {
        *by_date.entry(expense.date).or_insert_with(Money::zero) += expense.amount;
    }

    let mut totals: Vec<_> = by_date.into_iter().collect();
    totals.sort_by_key(|(date, _)| *date);
    totals
}
