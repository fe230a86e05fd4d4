//! Display formatting for terminal output
//!
//! Pure formatting functions: they take model data or aggregated series plus
//! the user's settings and return strings; printing is left to the CLI
//! handlers.

pub mod chart;
pub mod expense;
pub mod summary;

pub use chart::{format_bar_chart, format_line_chart, format_pie_chart, ChartKind};
pub use expense::{
    format_expense_list, format_expense_row, format_template_list, format_template_row,
};
pub use summary::{format_category_summary, format_monthly_summary};
