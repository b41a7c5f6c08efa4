//! Forecast service
//!
//! Projects monthly expenses by growing the last recorded expense linearly:
//! month `i` is `last * (1 + rate * i)`. "Last" means last in insertion
//! order, not latest by date. Net balance for each month is the all-time
//! income minus that month's projected expense.

use crate::ledger::Ledger;
use crate::services::summary::SummaryService;

/// Per-month linear growth used unless configured otherwise
pub const DEFAULT_GROWTH_RATE: f64 = 0.1;

/// Projected expenses and net balances, one entry per month
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forecast {
    pub expenses: Vec<f64>,
    pub net_balance: Vec<f64>,
}

impl Forecast {
    /// Number of projected months
    pub fn months(&self) -> usize {
        self.expenses.len()
    }

    /// (month number, expense, net balance), months counted from 1
    pub fn rows(&self) -> impl Iterator<Item = (usize, f64, f64)> + '_ {
        self.expenses
            .iter()
            .zip(&self.net_balance)
            .enumerate()
            .map(|(i, (expense, balance))| (i + 1, *expense, *balance))
    }
}

/// Service for expense forecasting
pub struct ForecastService<'a> {
    ledger: &'a Ledger,
    growth_rate: f64,
}

impl<'a> ForecastService<'a> {
    /// Create a forecast service with the default 10% monthly growth
    pub fn new(ledger: &'a Ledger) -> Self {
        Self {
            ledger,
            growth_rate: DEFAULT_GROWTH_RATE,
        }
    }

    /// Override the monthly growth rate
    pub fn with_growth_rate(mut self, growth_rate: f64) -> Self {
        self.growth_rate = growth_rate;
        self
    }

    /// Amount of the most recently added expense
    pub fn last_expense(&self) -> Option<f64> {
        self.ledger.expenses().last().map(|t| t.amount)
    }

    /// Project `months` months ahead. Callers reject a zero count beforehand;
    /// zero yields an empty forecast.
    pub fn predict(&self, months: usize) -> Forecast {
        let total_income = SummaryService::new(self.ledger).total_income();

        let expenses: Vec<f64> = match self.last_expense() {
            Some(last) => (1..=months)
                .map(|i| last * (1.0 + self.growth_rate * i as f64))
                .collect(),
            None => vec![0.0; months],
        };
        let net_balance = expenses.iter().map(|e| total_income - e).collect();

        Forecast {
            expenses,
            net_balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn test_no_expenses() {
        let mut ledger = Ledger::new();
        ledger.add(date(2024, 1, 1), "Income", "Salary", 500.0, "").unwrap();

        let forecast = ForecastService::new(&ledger).predict(3);
        assert_eq!(forecast.expenses, [0.0, 0.0, 0.0]);
        assert_eq!(forecast.net_balance, [500.0, 500.0, 500.0]);
    }

    #[test]
    fn test_linear_growth_from_last_expense() {
        let mut ledger = Ledger::new();
        ledger.add(date(2024, 1, 1), "Income", "Salary", 500.0, "").unwrap();
        ledger.add(date(2024, 1, 2), "Expense", "Food", 40.0, "").unwrap();
        ledger.add(date(2024, 1, 3), "Expense", "Food", 100.0, "").unwrap();

        let forecast = ForecastService::new(&ledger).predict(2);
        assert_close(&forecast.expenses, &[110.0, 120.0]);
        assert_close(&forecast.net_balance, &[390.0, 380.0]);
        assert_eq!(forecast.months(), 2);
    }

    #[test]
    fn test_last_expense_is_by_insertion_order() {
        let mut ledger = Ledger::new();
        ledger.add(date(2024, 6, 1), "Expense", "Rent", 200.0, "June").unwrap();
        ledger.add(date(2024, 1, 1), "Expense", "Rent", 100.0, "January").unwrap();
        ledger.add(date(2024, 7, 1), "Income", "Salary", 50.0, "").unwrap();

        let service = ForecastService::new(&ledger);
        assert_eq!(service.last_expense(), Some(100.0));
        assert_close(&service.predict(1).expenses, &[110.0]);
    }

    #[test]
    fn test_income_is_full_history() {
        let mut ledger = Ledger::new();
        ledger.add(date(2022, 1, 1), "Income", "Salary", 300.0, "").unwrap();
        ledger.add(date(2024, 1, 1), "Income", "Salary", 200.0, "").unwrap();
        ledger.add(date(2024, 1, 2), "Expense", "Food", 100.0, "").unwrap();

        let forecast = ForecastService::new(&ledger).predict(1);
        assert_close(&forecast.net_balance, &[390.0]);
    }

    #[test]
    fn test_custom_growth_rate() {
        let mut ledger = Ledger::new();
        ledger.add(date(2024, 1, 1), "Expense", "Food", 100.0, "").unwrap();

        let forecast = ForecastService::new(&ledger).with_growth_rate(0.5).predict(2);
        assert_close(&forecast.expenses, &[150.0, 200.0]);
        assert_close(&forecast.net_balance, &[-150.0, -200.0]);
    }

    #[test]
    fn test_rows_and_purity() {
        let mut ledger = Ledger::new();
        ledger.add(date(2024, 1, 1), "Expense", "Food", 100.0, "").unwrap();
        let service = ForecastService::new(&ledger);

        let first = service.predict(3);
        assert_eq!(first, service.predict(3));

        let months: Vec<usize> = first.rows().map(|(m, _, _)| m).collect();
        assert_eq!(months, [1, 2, 3]);
    }

    #[test]
    fn test_zero_months_is_empty() {
        let ledger = Ledger::new();
        assert_eq!(ForecastService::new(&ledger).predict(0), Forecast::default());
    }
}
