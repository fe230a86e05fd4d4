//! Expense categories
//!
//! Categories form a closed set; every expense belongs to exactly one.
//! Declaration order is the canonical display order for summaries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;

/// The fixed set of expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Category {
    Food,
    Transportation,
    Entertainment,
    Others,
}

impl Category {
    /// All categories in declaration order
    pub const fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transportation,
            Self::Entertainment,
            Self::Others,
        ]
    }

    /// Get the display name for this category
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Others => "Others",
        }
    }

}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| ExpenseError::Validation(format!("invalid category '{}'", s)))
    }
}
