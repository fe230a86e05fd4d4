//! Storage layer for the expense tracker
//!
//! The expense ledger lives in a CSV file; recurring templates live in a
//! JSON file. All writes are atomic (temp file + rename).

pub mod expenses;
pub mod file_io;
pub mod templates;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_bytes_atomic, write_json_atomic};
pub use templates::TemplateRepository;

use crate::config::paths::TrackerPaths;
use crate::error::ExpenseError;

/// Main storage coordinator that owns all repositories
///
/// This is the session's single holder of expense state: services borrow it,
/// there are no ambient globals.
pub struct Storage {
    paths: TrackerPaths,
    pub expenses: ExpenseRepository,
    pub templates: TemplateRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TrackerPaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            templates: TemplateRepository::new(paths.recurring_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    /// Load all data from disk
    ///
    /// Returns `true` if an expense ledger file was found; a missing ledger
    /// is recovered by starting empty, so callers can print an informational
    /// message instead of failing.
    pub fn load_all(&mut self) -> Result<bool, ExpenseError> {
        let ledger_found = match self.expenses.load() {
            Ok(()) => true,
            Err(e) if e.is_not_found() => false,
            Err(e) => return Err(e),
        };
        self.templates.load()?;
        Ok(ledger_found)
    }
}
