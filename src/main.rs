use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_expense_command, handle_recurring_command, handle_report_command, ExpenseCommands,
    RecurringCommands, ReportCommands,
};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Command-line personal expense tracker",
    long_about = "Track everyday and recurring expenses from the terminal: \
                  record them, filter and summarize them, render simple \
                  charts, and keep everything in a plain CSV ledger."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense (shortcut for `expense add`)
    Add {
        /// Amount (e.g., "12.50")
        amount: String,
        /// What the expense was for
        description: String,
        /// Expense category
        #[arg(short, long, value_enum)]
        category: expense_tracker::models::Category,
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
        category: Option<expense_tracker::models::Category>,
        /// Case-insensitive keyword to match in descriptions
        #[arg(short, long)]
        keyword: Option<String>,
    },

    /// Recurring expense management commands
    #[command(subcommand)]
    Recurring(RecurringCommands),

    /// Summary and chart reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    let ledger_found = storage.load_all()?;
    if !ledger_found {
        println!(
            "No expense ledger at {}; starting with an empty list.",
            paths.expenses_file().display()
        );
    }

    match cli.command {
        Some(Commands::Add {
            amount,
            description,
            category,
            date,
        }) => {
            handle_expense_command(
                &storage,
                &settings,
                ExpenseCommands::Add {
                    amount,
                    description,
                    category,
                    date,
                },
            )?;
        }
        Some(Commands::List {
            from,
            to,
            category,
            keyword,
        }) => {
            handle_expense_command(
                &storage,
                &settings,
                ExpenseCommands::List {
                    from,
                    to,
                    category,
                    keyword,
                },
            )?;
        }
        Some(Commands::Recurring(cmd)) => {
            handle_recurring_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Expense ledger:   {}", paths.expenses_file().display());
            println!("Recurring file:   {}", paths.recurring_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Default chart:   {}", settings.default_chart);
        }
        None => {
            println!("expense-tracker - Command-line personal expense tracker");
            println!();
            println!("Run 'expenses --help' for usage information.");
        }
    }

    Ok(())
}
