//! CLI command handlers
//!
//! This module bridges the clap argument parsing and the interactive shell
//! with the ledger and its services. Handlers write to a caller-supplied
//! writer so they can be driven from tests.

pub mod import;
pub mod report;
pub mod shell;

pub use import::{handle_import_command, import_files};
pub use report::{
    handle_predict_command, handle_summary_command, parse_months, validate_period_value,
    MAX_FORECAST_MONTHS,
};
pub use shell::Shell;
