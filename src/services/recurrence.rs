//! Recurrence engine
//!
//! Decides which recurring templates are due and materializes new expense
//! records from them. The engine itself is a pure function of
//! `(templates, history, today)`; `RecurrenceService` wraps it with the
//! append-and-save side effects.
//!
//! Correlation between a template and its generated history prefers the
//! stable template ID. Ledger rows loaded from CSV carry no ID, so for those
//! the description text is compared exactly as a fallback.

use chrono::{Datelike, NaiveDate};

use crate::error::ExpenseResult;
use crate::models::{Expense, Frequency, RecurringTemplate};
use crate::storage::Storage;

/// Materialize all due templates against the given history
///
/// Returns the newly due expenses, dated `today`, in template order. The
/// caller is responsible for appending them to the store.
pub fn materialize(
    templates: &[RecurringTemplate],
    history: &[Expense],
    today: NaiveDate,
) -> Vec<Expense> {
    templates
        .iter()
        .filter(|template| is_due(template.frequency, last_generated(template, history), today))
        .map(|template| template.materialize(today))
        .collect()
}

/// Most recent date among the history expenses correlated to this template
fn last_generated(template: &RecurringTemplate, history: &[Expense]) -> Option<NaiveDate> {
    history
        .iter()
        .filter(|e| match e.template_id {
            Some(id) => id == template.id,
            // Rows reloaded from the CSV ledger have no template ID
            None => e.description == template.description,
        })
        .map(|e| e.date)
        .max()
}

/// Whether a template with the given last generation date is due on `today`
fn is_due(frequency: Frequency, last_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    let last = match last_date {
        Some(d) => d,
        None => return true,
    };

    match frequency {
        Frequency::Weekly => (today - last).num_days() >= 7,
        // Compares the day distance between month starts against a fixed 30,
        // not true calendar-month counting. Adjacent months can therefore be
        // due or not depending on month length.
        Frequency::Monthly => (month_start(today) - month_start(last)).num_days() >= 30,
        // Pure calendar-year difference: Dec 31 -> Jan 1 counts as due.
        Frequency::Yearly => today.year() - last.year() >= 1,
    }
}

fn month_start(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month
    date.with_day(1).unwrap_or(date)
}

/// Service wrapping the pure engine with store side effects
pub struct RecurrenceService<'a> {
    storage: &'a Storage,
}

impl<'a> RecurrenceService<'a> {
    /// Create a new recurrence service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Materialize all due templates, append them to the ledger, and save
    ///
    /// Returns the newly created expenses.
    pub fn process(&self, today: NaiveDate) -> ExpenseResult<Vec<Expense>> {
        let templates = self.storage.templates.get_all()?;
        let history = self.storage.expenses.get_all()?;

        let due = materialize(&templates, &history, today);
        if !due.is_empty() {
            self.storage.expenses.append_all(due.clone())?;
            self.storage.expenses.save()?;
        }

        Ok(due)
    }
}
