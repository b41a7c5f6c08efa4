//! Transaction model
//!
//! A single dated financial event. The amount is stored exactly as given;
//! its direction is implied by the kind, never by its sign.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::kind::TransactionKind;

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date (no time of day)
    pub date: NaiveDate,

    /// Income or expense
    pub kind: TransactionKind,

    /// Free-form category label
    pub category: String,

    /// Magnitude of the transaction
    pub amount: f64,

    /// Free-form description
    pub description: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: NaiveDate,
        kind: TransactionKind,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            kind,
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {:.2} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount,
            self.description
        )
    }
}
