//! Core data models for fintrack
//!
//! This module contains the data structures of the ledger domain:
//! transactions, their kind, and the aggregation periods.

pub mod kind;
pub mod period;
pub mod transaction;

pub use kind::TransactionKind;
pub use period::{parse_date_value, Period, PeriodFilter, DATE_FORMAT};
pub use transaction::Transaction;
