//! Recurring expense CLI commands
//!
//! Implements CLI commands for defining recurring templates and
//! materializing the ones that are due.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_list, format_template_list, format_template_row};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Frequency, Money};
use crate::services::{parse_date, ExpenseService, RecurrenceService};
use crate::storage::Storage;

/// Recurring expense subcommands
#[derive(Subcommand)]
pub enum RecurringCommands {
    /// Define a new recurring expense
    Add {
        /// Amount (e.g., "30.00")
        amount: String,
        /// What the expense is for
        description: String,
        /// Expense category
        #[arg(short, long, value_enum)]
        category: Category,
        /// How often the expense recurs
        #[arg(short, long, value_enum)]
        frequency: Frequency,
    },

    /// List recurring expense definitions
    List,

    /// Materialize all recurring expenses that are due
    Process {
        /// Treat this date as today (YYYY-MM-DD, defaults to the current date)
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Handle a recurring command
pub fn handle_recurring_command(
    storage: &Storage,
    settings: &Settings,
    cmd: RecurringCommands,
) -> ExpenseResult<()> {
    match cmd {
        RecurringCommands::Add {
            amount,
            description,
            category,
            frequency,
        } => {
            let amount = Money::parse(&amount)
                .map_err(|e| ExpenseError::Validation(e.to_string()))?;

            let service = ExpenseService::new(storage);
            let template = service.add_template(amount, &description, category, frequency)?;
            println!("Recurring expense added successfully!");
            println!("  {} [{}]", format_template_row(&template, settings), template.id);
        }

        RecurringCommands::List => {
            let service = ExpenseService::new(storage);
            let templates = service.list_templates()?;
            print!("{}", format_template_list(&templates, settings));
        }

        RecurringCommands::Process { date } => {
            let today = match date {
                Some(d) => parse_date(&d)?,
                None => chrono::Local::now().date_naive(),
            };

            let service = RecurrenceService::new(storage);
            let created = service.process(today)?;

            if created.is_empty() {
                println!("No recurring expenses due.");
            } else {
                println!("Materialized {} recurring expense(s):", created.len());
                print!("{}", format_expense_list(&created, settings));
            }
        }
    }

    Ok(())
}
