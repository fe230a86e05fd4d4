//! Expense ledger persisted as a CSV file
//!
//! The ledger is an ordered, append-only sequence. The on-disk shape is one
//! record per line under a `date,description,category,amount` header; the
//! field set is stable so other tools can read the file. There is no
//! uniqueness constraint: duplicate (description, date) pairs are valid.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::RwLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ExpenseError;
use crate::models::{Category, Expense, Money};

use super::file_io::write_bytes_atomic;

/// On-disk CSV row shape (amounts as plain decimal strings)
#[derive(Debug, Serialize, Deserialize)]
struct LedgerRecord {
    date: String,
    description: String,
    category: String,
    amount: String,
}

impl LedgerRecord {
    fn from_expense(expense: &Expense) -> Self {
        Self {
            date: expense.date.format("%Y-%m-%d").to_string(),
            description: expense.description.clone(),
            category: expense.category.name().to_string(),
            amount: expense.amount.to_decimal_string(),
        }
    }

    fn into_expense(self) -> Result<Expense, ExpenseError> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| ExpenseError::Storage(format!("invalid date in ledger: {}", self.date)))?;
        let category = Category::from_str(&self.category).map_err(|_| {
            ExpenseError::Storage(format!("invalid category in ledger: {}", self.category))
        })?;
        let amount = Money::parse(&self.amount).map_err(|_| {
            ExpenseError::Storage(format!("invalid amount in ledger: {}", self.amount))
        })?;

        Ok(Expense::new(amount, self.description, category, date))
    }
}

/// Repository for the expense ledger
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository backed by the given CSV path
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load expenses from disk, preserving file order
    ///
    /// A missing backing file is reported as a `NotFound` error; the caller
    /// decides whether that is fatal. The in-memory store is left empty in
    /// that case.
    pub fn load(&self) -> Result<(), ExpenseError> {
        if !self.path.exists() {
            let mut data = self.write_guard()?;
            data.clear();
            return Err(ExpenseError::ledger_not_found(&self.path));
        }

        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| {
            ExpenseError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let mut expenses = Vec::new();
        for record in reader.deserialize::<LedgerRecord>() {
            let record = record.map_err(|e| {
                ExpenseError::Storage(format!("Failed to parse {}: {}", self.path.display(), e))
            })?;
            expenses.push(record.into_expense()?);
        }

        let mut data = self.write_guard()?;
        *data = expenses;
        Ok(())
    }

    /// Save expenses to disk atomically, in insertion order
    pub fn save(&self) -> Result<(), ExpenseError> {
        let data = self.read_guard()?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        for expense in data.iter() {
            writer.serialize(LedgerRecord::from_expense(expense))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ExpenseError::Storage(format!("Failed to flush ledger: {}", e)))?;

        write_bytes_atomic(&self.path, &bytes)
    }

    /// Append a single expense to the ledger
    pub fn append(&self, expense: Expense) -> Result<(), ExpenseError> {
        let mut data = self.write_guard()?;
        data.push(expense);
        Ok(())
    }

    /// Append a batch of expenses, preserving their order
    pub fn append_all(&self, expenses: Vec<Expense>) -> Result<(), ExpenseError> {
        let mut data = self.write_guard()?;
        data.extend(expenses);
        Ok(())
    }

    /// Get all expenses in insertion order
    pub fn get_all(&self) -> Result<Vec<Expense>, ExpenseError> {
        Ok(self.read_guard()?.clone())
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, ExpenseError> {
        Ok(self.read_guard()?.len())
    }

    fn read_guard(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<Expense>>, ExpenseError> {
        self.data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_guard(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<Expense>>, ExpenseError> {
        self.data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        (temp_dir, ExpenseRepository::new(path))
    }

    fn expense(date: &str, description: &str, cents: i64) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            description,
            Category::Food,
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        )
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let (_temp_dir, repo) = create_test_repo();
        let err = repo.load().unwrap_err();
        assert!(err.is_not_found());
        // The store stays usable and empty
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_append_and_get_all() {
        let (_temp_dir, repo) = create_test_repo();

        repo.append(expense("2024-01-05", "Lunch", 1000)).unwrap();
        repo.append(expense("2024-01-06", "Coffee", 350)).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].description, "Lunch");
        assert_eq!(all[1].description, "Coffee");
    }

    #[test]
    fn test_save_and_reload_preserves_order() {
        let (temp_dir, repo) = create_test_repo();

        repo.append(expense("2024-02-01", "Later", 700)).unwrap();
        repo.append(expense("2024-01-05", "Earlier", 1000)).unwrap();
        repo.save().unwrap();

        let repo2 = ExpenseRepository::new(temp_dir.path().join("expenses.csv"));
        repo2.load().unwrap();

        let all = repo2.get_all().unwrap();
        assert_eq!(all.len(), 2);
        // File order, not date order
        assert_eq!(all[0].description, "Later");
        assert_eq!(all[1].description, "Earlier");
    }

    #[test]
    fn test_header_and_record_shape() {
        let (temp_dir, repo) = create_test_repo();

        repo.append(expense("2024-01-05", "Lunch", 1250)).unwrap();
        repo.save().unwrap();

        let contents = std::fs::read_to_string(temp_dir.path().join("expenses.csv")).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("date,description,category,amount"));
        assert_eq!(lines.next(), Some("2024-01-05,Lunch,Food,12.50"));
    }

    #[test]
    fn test_duplicates_allowed() {
        let (_temp_dir, repo) = create_test_repo();

        repo.append(expense("2024-01-05", "Gym", 3000)).unwrap();
        repo.append(expense("2024-01-05", "Gym", 3000)).unwrap();

        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_malformed_row_is_storage_error() {
        let (temp_dir, _) = create_test_repo();
        let path = temp_dir.path().join("expenses.csv");
        std::fs::write(
            &path,
            "date,description,category,amount\nnot-a-date,Lunch,Food,10.00\n",
        )
        .unwrap();

        let repo = ExpenseRepository::new(path);
        let err = repo.load().unwrap_err();
        assert!(matches!(err, ExpenseError::Storage(_)));
    }

    #[test]
    fn test_unknown_category_is_storage_error() {
        let (temp_dir, _) = create_test_repo();
        let path = temp_dir.path().join("expenses.csv");
        std::fs::write(
            &path,
            "date,description,category,amount\n2024-01-05,Lunch,Groceries,10.00\n",
        )
        .unwrap();

        let repo = ExpenseRepository::new(path);
        assert!(repo.load().is_err());
    }
}
