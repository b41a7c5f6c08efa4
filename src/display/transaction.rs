//! Transaction list and import diagnostic formatting

use crate::models::Transaction;
use crate::services::SkipRecord;

use super::report::format_amount;

/// Format transactions in insertion order, one per line
pub fn format_transaction_list(transactions: &[Transaction], precision: usize) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.\n".to_string();
    }

    let category_width = transactions
        .iter()
        .map(|t| t.category.chars().count())
        .max()
        .unwrap_or(0)
        .max("Category".len());

    let mut output = format!(
        "{:<10}  {:<7}  {:<cw$}  {:>12}  {}\n",
        "Date",
        "Type",
        "Category",
        "Amount",
        "Description",
        cw = category_width
    );
    for txn in transactions {
        output.push_str(&format!(
            "{:<10}  {:<7}  {:<cw$}  {:>12}  {}\n",
            txn.date.format("%Y-%m-%d").to_string(),
            txn.kind.as_str(),
            txn.category,
            format_amount(txn.amount, precision),
            txn.description,
            cw = category_width
        ));
    }

    output
}

/// Format import skip diagnostics, one line per skipped row
pub fn format_skip_records(skipped: &[SkipRecord]) -> String {
    skipped.iter().map(|s| format!("{}\n", s)).collect()
}
