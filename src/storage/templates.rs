//! Recurring template repository for JSON storage
//!
//! Manages loading and saving recurring templates to recurring.json

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ExpenseError;
use crate::models::RecurringTemplate;

use super::file_io::{read_json, write_json_atomic};

/// Serializable template data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TemplateData {
    templates: Vec<RecurringTemplate>,
}

/// Repository for recurring template persistence
pub struct TemplateRepository {
    path: PathBuf,
    data: RwLock<Vec<RecurringTemplate>>,
}

impl TemplateRepository {
    /// Create a new template repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load templates from disk (missing file yields an empty set)
    pub fn load(&self) -> Result<(), ExpenseError> {
        let file_data: TemplateData = read_json(&self.path)?;

        let mut data = self.write_guard()?;
        *data = file_data.templates;
        Ok(())
    }

    /// Save templates to disk
    pub fn save(&self) -> Result<(), ExpenseError> {
        let data = self.read_guard()?;
        let file_data = TemplateData {
            templates: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Add a template
    pub fn add(&self, template: RecurringTemplate) -> Result<(), ExpenseError> {
        let mut data = self.write_guard()?;
        data.push(template);
        Ok(())
    }

    /// Get all templates in creation order
    pub fn get_all(&self) -> Result<Vec<RecurringTemplate>, ExpenseError> {
        Ok(self.read_guard()?.clone())
    }

    /// Count templates
    pub fn count(&self) -> Result<usize, ExpenseError> {
        Ok(self.read_guard()?.len())
    }

    fn read_guard(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, Vec<RecurringTemplate>>, ExpenseError> {
        self.data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_guard(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, Vec<RecurringTemplate>>, ExpenseError> {
        self.data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
