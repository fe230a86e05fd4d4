//! Business logic layer
//!
//! Services borrow the `Storage` coordinator and implement the operations
//! the CLI exposes: recording expenses, materializing recurring templates,
//! filtering, and summarizing.

pub mod expense;
pub mod query;
pub mod recurrence;
pub mod summary;

pub use expense::ExpenseService;
pub use query::{parse_date, ExpenseFilter};
pub use recurrence::{materialize, RecurrenceService};
pub use summary::{category_totals, daily_totals, monthly_totals};
