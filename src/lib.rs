//! fintrack - personal finance ledger
//!
//! This library records income and expense transactions in memory, imports
//! them from CSV, summarizes them by month, year or all time, and projects
//! future expenses with a simple linear forecast.
//!
//! # Architecture
//!
//! - `config`: configuration and path management
//! - `error`: custom error types
//! - `logging`: tracing subscriber setup
//! - `models`: transactions, kinds and periods
//! - `ledger`: the append-only in-memory ledger
//! - `services`: CSV import, summaries and forecasts
//! - `display`: plain-text rendering of results
//! - `cli`: command handlers and the interactive shell
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fintrack::ledger::Ledger;
//! use fintrack::models::Period;
//! use fintrack::services::{ForecastService, SummaryService};
//!
//! let mut ledger = Ledger::new();
//! let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
//! ledger.add(date, "Income", "Salary", 1000.0, "Jan pay").unwrap();
//! ledger.add(date, "Expense", "Food", 50.0, "Groceries").unwrap();
//!
//! let summary = SummaryService::new(&ledger).summarize(Period::Month, "2024-01");
//! assert_eq!(summary.net_balance(), 950.0);
//!
//! let forecast = ForecastService::new(&ledger).predict(3);
//! assert_eq!(forecast.months(), 3);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod services;

pub use error::{FintrackError, FintrackResult};
pub use ledger::Ledger;
