//! Report CLI commands
//!
//! Implements the summary and chart reports.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{
    format_bar_chart, format_category_summary, format_line_chart, format_monthly_summary,
    format_pie_chart, ChartKind,
};
use crate::error::ExpenseResult;
use crate::services::{category_totals, daily_totals, monthly_totals, ExpenseFilter};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Show total spending per month
    Monthly,

    /// Show total spending per category
    Category,

    /// Render a text chart of spending
    Chart {
        /// Chart kind
        #[arg(short, long, value_enum)]
        kind: Option<ChartKind>,
        /// Earliest date to include (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: Option<String>,
        /// Latest date to include (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: Option<String>,
    },
}

/// Handle a report command
///
/// `settings` supplies the output formatting preferences and the chart kind
/// used when `report chart` is run without `--kind`.
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> ExpenseResult<()> {
    let history = storage.expenses.get_all()?;

    match cmd {
        ReportCommands::Monthly => {
            print!(
                "{}",
                format_monthly_summary(&monthly_totals(&history), settings)
            );
        }

        ReportCommands::Category => {
            print!(
                "{}",
                format_category_summary(&category_totals(&history), settings)
            );
        }

        ReportCommands::Chart { kind, from, to } => {
            // Date parsing aborts before anything is aggregated
            let filter = ExpenseFilter::from_args(from.as_deref(), to.as_deref(), None, None)?;
            let filtered = filter.apply(&history);

            let chart = match kind.unwrap_or(settings.default_chart) {
                ChartKind::Bar => format_bar_chart(&category_totals(&filtered), settings),
                ChartKind::Pie => format_pie_chart(&category_totals(&filtered), settings),
                ChartKind::Line => format_line_chart(&daily_totals(&filtered), settings),
            };
            print!("{}", chart);
        }
    }

    Ok(())
}
