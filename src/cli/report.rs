//! CLI commands for summaries and forecasts
//!
//! Input validation lives here: the services assume a well-formed period
//! value and a positive month count.

use std::io::Write;
use std::num::IntErrorKind;

use crate::config::Settings;
use crate::display::{format_forecast, format_summary};
use crate::error::{FintrackError, FintrackResult};
use crate::ledger::Ledger;
use crate::models::period::{parse_month_value, parse_year_value};
use crate::models::Period;
use crate::services::{ForecastService, SummaryService};

/// Check a period value before summarizing
pub fn validate_period_value(period: Period, value: &str) -> FintrackResult<()> {
    match period {
        Period::Month if parse_month_value(value).is_none() => Err(FintrackError::Validation(
            "Invalid month format. Please use YYYY-MM.".into(),
        )),
        Period::Year if parse_year_value(value).is_none() => Err(FintrackError::Validation(
            "Invalid year format. Please use YYYY.".into(),
        )),
        _ => Ok(()),
    }
}

/// Longest forecast the CLI will produce
pub const MAX_FORECAST_MONTHS: usize = 1200;

/// Parse a month count, rejecting anything that is not a positive integer
/// no larger than [`MAX_FORECAST_MONTHS`]
pub fn parse_months(value: &str) -> FintrackResult<usize> {
    match value.trim().parse::<i64>() {
        Ok(months) if months > 0 => check_months(months as u64),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => check_months(u64::MAX),
        _ => Err(FintrackError::Validation(
            "Number of months must be greater than zero.".into(),
        )),
    }
}

fn check_months(months: u64) -> FintrackResult<usize> {
    if months > MAX_FORECAST_MONTHS as u64 {
        return Err(FintrackError::Validation(format!(
            "Number of months must be at most {}.",
            MAX_FORECAST_MONTHS
        )));
    }
    Ok(months as usize)
}

/// Handle the summary command
pub fn handle_summary_command(
    ledger: &Ledger,
    settings: &Settings,
    period: Period,
    value: &str,
    out: &mut dyn Write,
) -> FintrackResult<()> {
    validate_period_value(period, value)?;

    let summary = SummaryService::new(ledger).summarize(period, value);
    write!(out, "{}", format_summary(&summary, settings.display_precision))?;
    Ok(())
}

/// Handle the predict command
pub fn handle_predict_command(
    ledger: &Ledger,
    settings: &Settings,
    months: usize,
    out: &mut dyn Write,
) -> FintrackResult<()> {
    if months == 0 {
        return Err(FintrackError::Validation(
            "Number of months must be greater than zero.".into(),
        ));
    }
    check_months(months as u64)?;

    let forecast = ForecastService::new(ledger)
        .with_growth_rate(settings.forecast_growth_rate)
        .predict(months);
    write!(out, "{}", format_forecast(&forecast, settings.display_precision))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ledger() -> Ledger {
        let mut ledger = Ledger::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        ledger.add(date, "Income", "Salary", 500.0, "").unwrap();
        ledger.add(date, "Expense", "Food", 100.0, "").unwrap();
        ledger
    }

    #[test]
    fn test_validate_period_value() {
        assert!(validate_period_value(Period::Month, "2024-01").is_ok());
        assert!(validate_period_value(Period::Month, "2024").is_err());
        assert!(validate_period_value(Period::Year, "2024").is_ok());
        assert!(validate_period_value(Period::Year, "2024-01").is_err());
        assert!(validate_period_value(Period::All, "anything").is_ok());
    }

    #[test]
    fn test_parse_months() {
        assert_eq!(parse_months("3").unwrap(), 3);
        assert_eq!(parse_months(" 12 ").unwrap(), 12);
        assert!(matches!(
            parse_months("0").unwrap_err(),
            FintrackError::Validation(_)
        ));
        assert!(parse_months("-2").is_err());
        assert!(parse_months("three").is_err());
    }

    #[test]
    fn test_parse_months_upper_bound() {
        assert_eq!(parse_months("1200").unwrap(), MAX_FORECAST_MONTHS);

        for value in ["1201", "99999999999", "99999999999999999999999"] {
            let err = parse_months(value).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Validation error: Number of months must be at most 1200."
            );
        }
    }

    #[test]
    fn test_summary_command_output() {
        let mut out = Vec::new();
        handle_summary_command(&ledger(), &Settings::default(), Period::Month, "2024-01", &mut out)
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Income: 500.00\nExpenses: 100.00\nNet Balance: 400.00\n"));
    }

    #[test]
    fn test_summary_command_rejects_bad_value() {
        let mut out = Vec::new();
        let err = handle_summary_command(
            &ledger(),
            &Settings::default(),
            Period::Month,
            "01-2024",
            &mut out,
        )
        .unwrap_err();

        assert!(matches!(err, FintrackError::Validation(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_predict_command_uses_settings() {
        let settings = Settings {
            forecast_growth_rate: 0.5,
            display_precision: 1,
            ..Settings::default()
        };
        let mut out = Vec::new();
        handle_predict_command(&ledger(), &settings, 1, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Month 1: 150.0\n"));
        assert!(out.contains("Month 1: 350.0\n"));
    }

    #[test]
    fn test_predict_command_rejects_zero() {
        let mut out = Vec::new();
        assert!(handle_predict_command(&ledger(), &Settings::default(), 0, &mut out).is_err());
    }

    #[test]
    fn test_predict_command_rejects_too_many_months() {
        let mut out = Vec::new();
        let err = handle_predict_command(&ledger(), &Settings::default(), usize::MAX, &mut out)
            .unwrap_err();
        assert!(matches!(err, FintrackError::Validation(_)));
        assert!(out.is_empty());
    }
}
