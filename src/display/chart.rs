//! Text chart rendering
//!
//! Renders the aggregated series produced by the summary engine as simple
//! terminal charts. Three kinds are supported: bar and pie charts over
//! category totals, and a line (per-day) chart over daily totals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::settings::Settings;
use crate::error::ExpenseError;
use crate::models::{Category, Money};

/// Maximum bar width in characters
const BAR_WIDTH: usize = 40;

/// Supported chart kinds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
    Pie,
    Line,
}

impl ChartKind {
    /// Get the display name for this chart kind
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Pie => "pie",
            Self::Line => "line",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ChartKind {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bar" => Ok(Self::Bar),
            "pie" => Ok(Self::Pie),
            "line" => Ok(Self::Line),
            other => Err(ExpenseError::Validation(format!(
                "invalid chart kind '{}', expected bar, pie, or line",
                other
            ))),
        }
    }
}

/// Render a bar chart of category totals
pub fn format_bar_chart(totals: &[(Category, Money)], settings: &Settings) -> String {
    let max = totals.iter().map(|(_, m)| m.cents()).max().unwrap_or(0);

    let mut output = String::from("Category-wise Expenses\n\n");
    for (category, total) in totals {
        output.push_str(&format!(
            "{:16} {} {}\n",
            category.name(),
            bar(total.cents(), max),
            total.format_with_symbol(&settings.currency_symbol)
        ));
    }
    output
}

/// Render a pie-style percentage breakdown of category totals
pub fn format_pie_chart(totals: &[(Category, Money)], settings: &Settings) -> String {
    let grand_total: i64 = totals.iter().map(|(_, m)| m.cents()).sum();

    let mut output = String::from("Category-wise Expenses\n\n");
    for (category, total) in totals {
        let percentage = if grand_total == 0 {
            0.0
        } else {
            (total.cents() as f64 / grand_total as f64) * 100.0
        };
        output.push_str(&format!(
            "{:16} {:>5.1}% {}\n",
            category.name(),
            percentage,
            total.format_with_symbol(&settings.currency_symbol)
        ));
    }
    output.push_str(&format!(
        "\nTotal: {}\n",
        Money::from_cents(grand_total).format_with_symbol(&settings.currency_symbol)
    ));
    output
}

/// Render a per-day line chart of daily totals
pub fn format_line_chart(totals: &[(NaiveDate, Money)], settings: &Settings) -> String {
    if totals.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let max = totals.iter().map(|(_, m)| m.cents()).max().unwrap_or(0);

    let mut output = String::from("Daily Expenses\n\n");
    for (date, total) in totals {
        output.push_str(&format!(
            "{} {} {}\n",
            date.format(&settings.date_format),
            bar(total.cents(), max),
            total.format_with_symbol(&settings.currency_symbol)
        ));
    }
    output
}

fn bar(value: i64, max: i64) -> String {
    if max <= 0 || value <= 0 {
        return String::new();
    }
    let width = ((value as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(width.max(1))
}
