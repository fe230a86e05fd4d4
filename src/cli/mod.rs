//! CLI command handlers
//!
//! Each domain has its own subcommand enum and a handler that borrows the
//! storage coordinator. Errors bubble up to `main`, so a failed command
//! aborts with its own message without touching stored state.

pub mod expense;
pub mod recurring;
pub mod report;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use recurring::{handle_recurring_command, RecurringCommands};
pub use report::{handle_report_command, ReportCommands};
