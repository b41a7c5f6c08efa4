//! Summary service
//!
//! Folds the transactions of a period into income, expense and per-category
//! totals.
//!
//! Category totals add every included amount as-is, whatever its kind: an
//! income of 100 and an expense of 30 in the same category total 130.

use std::collections::HashMap;

use crate::ledger::Ledger;
use crate::models::{Period, PeriodFilter, TransactionKind};

/// Totals for one period
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub total_income: f64,
    pub total_expense: f64,
    /// Unsigned per-category totals; iteration order is unspecified
    pub category_totals: HashMap<String, f64>,
}

impl Summary {
    /// Income minus expenses
    pub fn net_balance(&self) -> f64 {
        self.total_income - self.total_expense
    }

    /// Category totals sorted by label, for stable display
    pub fn sorted_categories(&self) -> Vec<(&str, f64)> {
        let mut categories: Vec<_> = self
            .category_totals
            .iter()
            .map(|(name, total)| (name.as_str(), *total))
            .collect();
        categories.sort_by(|a, b| a.0.cmp(b.0));
        categories
    }
}

/// Service for period summaries
pub struct SummaryService<'a> {
    ledger: &'a Ledger,
}

impl<'a> SummaryService<'a> {
    /// Create a new summary service
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Summarize a period.
    ///
    /// `value` is `YYYY-MM` for [`Period::Month`], `YYYY` for
    /// [`Period::Year`] and ignored for [`Period::All`]. A malformed value
    /// yields an empty summary; callers validate beforehand.
    pub fn summarize(&self, period: Period, value: &str) -> Summary {
        self.summarize_filter(PeriodFilter::resolve(period, value))
    }

    /// Summarize every transaction matching an already-resolved filter
    fn summarize_filter(&self, filter: PeriodFilter) -> Summary {
        let mut summary = Summary::default();

        for txn in self
            .ledger
            .transactions()
            .iter()
            .filter(|t| filter.matches(t.date))
        {
            match txn.kind {
                TransactionKind::Income => summary.total_income += txn.amount,
                TransactionKind::Expense => summary.total_expense += txn.amount,
            }
            *summary
                .category_totals
                .entry(txn.category.clone())
                .or_insert(0.0) += txn.amount;
        }

        summary
    }

    /// Total income over the whole history
    pub fn total_income(&self) -> f64 {
        self.summarize(Period::All, "").total_income
    }
}
