//! Report formatting for summaries and forecasts

use crate::services::{Forecast, Summary};

/// Format an amount with a fixed number of decimals
pub fn format_amount(amount: f64, precision: usize) -> String {
    format!("{:.*}", precision, amount)
}

/// Format a period summary
pub fn format_summary(summary: &Summary, precision: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Income: {}\n",
        format_amount(summary.total_income, precision)
    ));
    output.push_str(&format!(
        "Expenses: {}\n",
        format_amount(summary.total_expense, precision)
    ));
    output.push_str(&format!(
        "Net Balance: {}\n",
        format_amount(summary.net_balance(), precision)
    ));
    output.push_str("Category Summary:\n");
    for (category, total) in summary.sorted_categories() {
        output.push_str(&format!(
            "  {}: {}\n",
            category,
            format_amount(total, precision)
        ));
    }

    output
}

/// Format a forecast as two month-by-month blocks
pub fn format_forecast(forecast: &Forecast, precision: usize) -> String {
    let months = forecast.months();
    let mut output = format!("Predicted Expenses for the next {} months:\n", months);
    for (month, expense, _) in forecast.rows() {
        output.push_str(&format!(
            "  Month {}: {}\n",
            month,
            format_amount(expense, precision)
        ));
    }

    output.push_str(&format!(
        "Predicted Net Balance for the next {} months:\n",
        months
    ));
    for (month, _, balance) in forecast.rows() {
        output.push_str(&format!(
            "  Month {}: {}\n",
            month,
            format_amount(balance, precision)
        ));
    }

    output
}
