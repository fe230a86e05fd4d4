//! Expense filtering
//!
//! Builds filtered views over the expense ledger. Predicates are ANDed and
//! an omitted predicate matches everything, so a filter with no predicates
//! is the identity. Date parsing happens before any filtering, so a
//! malformed date aborts the whole operation with a parse error.

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense};

/// A set of optional predicates over the expense ledger
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFilter {
    /// Earliest date to include (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Latest date to include (inclusive)
    pub end_date: Option<NaiveDate>,
    /// Only expenses in this category
    pub category: Option<Category>,
    /// Case-insensitive substring match against the description
    pub keyword: Option<String>,
}

impl ExpenseFilter {
    /// Build a filter from raw CLI arguments, parsing date strings first
    ///
    /// Fails with a parse error before any filtering if either date string
    /// is malformed.
    pub fn from_args(
        start_date: Option<&str>,
        end_date: Option<&str>,
        category: Option<Category>,
        keyword: Option<&str>,
    ) -> ExpenseResult<Self> {
        Ok(Self {
            start_date: start_date.map(parse_date).transpose()?,
            end_date: end_date.map(parse_date).transpose()?,
            category,
            keyword: keyword.map(|k| k.to_string()),
        })
    }

    /// Whether a single expense matches every supplied predicate
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(start) = self.start_date {
            if expense.date < start {
                return false;
            }
        }

        if let Some(end) = self.end_date {
            if expense.date > end {
                return false;
            }
        }

        if let Some(category) = self.category {
            if expense.category != category {
                return false;
            }
        }

        if let Some(keyword) = &self.keyword {
            if !expense
                .description
                .to_lowercase()
                .contains(&keyword.to_lowercase())
            {
                return false;
            }
        }

        true
    }

    /// Return the ordered subsequence of `history` matching all predicates
    pub fn apply(&self, history: &[Expense]) -> Vec<Expense> {
        history.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}

/// Parse a `YYYY-MM-DD` date string
pub fn parse_date(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| ExpenseError::invalid_date(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn expense(d: &str, description: &str, category: Category) -> Expense {
        Expense::new(Money::from_cents(1000), description, category, date(d))
    }

    fn sample_history() -> Vec<Expense> {
        vec![
            expense("2024-01-05", "Lunch at cafe", Category::Food),
            expense("2024-01-20", "Bus ticket", Category::Transportation),
            expense("2024-02-01", "Cinema", Category::Entertainment),
            expense("2024-02-10", "Groceries", Category::Food),
        ]
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let history = sample_history();
        let filter = ExpenseFilter::default();

        assert_eq!(filter.apply(&history), history);
    }

    #[test]
    fn test_date_range_inclusive_both_ends() {
        let history = sample_history();
        let filter =
            ExpenseFilter::from_args(Some("2024-01-05"), Some("2024-02-01"), None, None).unwrap();

        let filtered = filter.apply(&history);
        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered[0].description, "Lunch at cafe");
        assert_eq!(filtered[2].description, "Cinema");
    }

    #[test]
    fn test_date_range_idempotent() {
        let history = sample_history();
        let filter =
            ExpenseFilter::from_args(Some("2024-01-01"), Some("2024-01-31"), None, None).unwrap();

        let once = filter.apply(&history);
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_category_exact_match() {
        let history = sample_history();
        let filter = ExpenseFilter {
            category: Some(Category::Food),
            ..Default::default()
        };

        let filtered = filter.apply(&history);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|e| e.category == Category::Food));
    }

    #[test]
    fn test_keyword_case_insensitive_substring() {
        let history = sample_history();
        let filter = ExpenseFilter::from_args(None, None, None, Some("CAFE")).unwrap();

        let filtered = filter.apply(&history);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].description, "Lunch at cafe");
    }

    #[test]
    fn test_predicates_are_anded() {
        let history = sample_history();
        let filter = ExpenseFilter::from_args(
            Some("2024-02-01"),
            Some("2024-02-28"),
            Some(Category::Food),
            None,
        )
        .unwrap();

        let filtered = filter.apply(&history);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].description, "Groceries");
    }

    #[test]
    fn test_malformed_date_aborts() {
        let err =
            ExpenseFilter::from_args(Some("01/05/2024"), Some("2024-02-01"), None, None)
                .unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_preserves_order() {
        let history = sample_history();
        let filter = ExpenseFilter {
            category: Some(Category::Food),
            ..Default::default()
        };

        let filtered = filter.apply(&history);
        assert_eq!(filtered[0].date, date("2024-01-05"));
        assert_eq!(filtered[1].date, date("2024-02-10"));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-05").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
        assert!(parse_date("2024-13-01").unwrap_err().is_parse());
        assert!(parse_date("yesterday").unwrap_err().is_parse());
    }
}
