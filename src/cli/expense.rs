//! Expense CLI commands
//!
//! Implements CLI commands for recording and listing expenses.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_list, format_expense_row};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Money};
use crate::services::{parse_date, ExpenseFilter, ExpenseService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g., "12.50")
        amount: String,
        /// What the expense was for
        description: String,
        /// Expense category
        #[arg(short, long, value_enum)]
        category: Category,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses, optionally filtered
    List {
        /// Earliest date to include (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: Option<String>,
        /// Latest date to include (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: Option<String>,
        /// Only show this category
        #[arg(short, long, value_enum)]
        category: Option<Category>,
        /// Case-insensitive keyword to match in descriptions
        #[arg(short, long)]
        keyword: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            amount,
            description,
            category,
            date,
        } => {
            let amount = Money::parse(&amount)
                .map_err(|e| ExpenseError::Validation(e.to_string()))?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => chrono::Local::now().date_naive(),
            };

            let expense = service.add_expense(amount, &description, category, date)?;
            println!("Expense added successfully!");
            println!("  {}", format_expense_row(&expense, settings));
        }

        ExpenseCommands::List {
            from,
            to,
            category,
            keyword,
        } => {
            let filter = ExpenseFilter::from_args(
                from.as_deref(),
                to.as_deref(),
                category,
                keyword.as_deref(),
            )?;

            let expenses = service.list_expenses(&filter)?;
            print!("{}", format_expense_list(&expenses, settings));
        }
    }

    Ok(())
}
