//! Display formatting for terminal output
//!
//! Renders summaries, forecasts, transaction lists and import diagnostics
//! as plain text. Nothing here prints; callers decide where output goes.

pub mod report;
pub mod transaction;

pub use report::{format_forecast, format_summary};
pub use transaction::{format_skip_records, format_transaction_list};
