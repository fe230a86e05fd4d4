//! expense-tracker - Command-line personal expense tracker
//!
//! This library provides the core functionality for the expense tracker:
//! recording discrete and recurring expenses, filtering and summarizing
//! them, rendering simple text charts, and persisting them to flat files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, templates, categories, money)
//! - `storage`: CSV ledger and JSON template storage
//! - `services`: Business logic (recurrence engine, filtering, summaries)
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
