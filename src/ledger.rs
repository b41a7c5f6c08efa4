//! In-memory ledger
//!
//! Owns the append-only sequence of transactions. Insertion order is the
//! add/import order, not chronological order, and duplicates are allowed.
//! Nothing here touches the disk except the CSV import pass-throughs.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::FintrackResult;
use crate::models::{Transaction, TransactionKind};
use crate::services::import::{ImportReport, ImportService};

/// The ordered collection of all recorded transactions
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new transaction.
    ///
    /// `kind` must be exactly `Income` or `Expense`; anything else fails with
    /// `InvalidKind` and leaves the ledger untouched. No other field is
    /// validated: the amount may be zero or negative, the labels empty.
    pub fn add(
        &mut self,
        date: NaiveDate,
        kind: &str,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> FintrackResult<()> {
        let kind: TransactionKind = kind.parse()?;
        self.push(Transaction::new(date, kind, category, amount, description));
        Ok(())
    }

    /// Append an already-typed transaction
    pub fn push(&mut self, transaction: Transaction) {
        debug!(%transaction, "recorded transaction");
        self.transactions.push(transaction);
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Expense transactions in insertion order
    pub fn expenses(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(|t| t.is_expense())
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Import transactions from a CSV file
    pub fn import_csv(&mut self, path: impl AsRef<Path>) -> FintrackResult<ImportReport> {
        ImportService::new(self).import_file(path)
    }

    /// Import transactions from any CSV byte source
    pub fn import_reader<R: Read>(&mut self, reader: R) -> FintrackResult<ImportReport> {
        ImportService::new(self).import_reader(reader, "<input>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_valid_transaction() {
        let mut ledger = Ledger::new();
        ledger
            .add(date(2024, 1, 5), "Income", "Salary", 1000.0, "Jan pay")
            .unwrap();

        assert_eq!(ledger.len(), 1);
        let txn = &ledger.transactions()[0];
        assert_eq!(txn.date, date(2024, 1, 5));
        assert_eq!(txn.kind, TransactionKind::Income);
        assert_eq!(txn.category, "Salary");
        assert_eq!(txn.amount, 1000.0);
        assert_eq!(txn.description, "Jan pay");
    }

    #[test]
    fn test_add_invalid_kind_appends_nothing() {
        let mut ledger = Ledger::new();
        ledger
            .add(date(2024, 1, 5), "Expense", "Food", 10.0, "")
            .unwrap();

        for kind in ["income", "Transfer", ""] {
            let err = ledger
                .add(date(2024, 1, 6), kind, "Food", 10.0, "")
                .unwrap_err();
            assert!(err.is_invalid_kind());
        }
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_add_accepts_unvalidated_fields() {
        let mut ledger = Ledger::new();
        ledger.add(date(2024, 3, 1), "Expense", "", -25.5, "").unwrap();
        ledger.add(date(2024, 3, 1), "Income", "", 0.0, "").unwrap();

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.transactions()[0].amount, -25.5);
        assert_eq!(ledger.transactions()[0].category, "");
    }

    #[test]
    fn test_insertion_order_and_duplicates() {
        let mut ledger = Ledger::new();
        ledger.add(date(2024, 5, 1), "Expense", "Rent", 900.0, "May").unwrap();
        ledger.add(date(2024, 1, 1), "Expense", "Rent", 900.0, "Jan").unwrap();
        ledger.add(date(2024, 1, 1), "Expense", "Rent", 900.0, "Jan").unwrap();

        let descriptions: Vec<_> = ledger
            .transactions()
            .iter()
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(descriptions, ["May", "Jan", "Jan"]);
    }

    #[test]
    fn test_expenses_filter() {
        let mut ledger = Ledger::new();
        ledger.add(date(2024, 1, 1), "Expense", "Food", 5.0, "").unwrap();
        ledger.add(date(2024, 1, 2), "Income", "Pay", 50.0, "").unwrap();
        ledger.add(date(2024, 1, 3), "Expense", "Fuel", 7.0, "").unwrap();

        let amounts: Vec<f64> = ledger.expenses().map(|t| t.amount).collect();
        assert_eq!(amounts, [5.0, 7.0]);
    }

    #[test]
    fn test_import_reader_pass_through() {
        let mut ledger = Ledger::new();
        let csv = "date,kind,category,amount,description\n2024-01-05,Income,Salary,1000,Jan pay\n";

        let report = ledger.import_reader(csv.as_bytes()).unwrap();
        assert_eq!(report.imported, 1);
        assert_eq!(ledger.len(), 1);
    }
}
