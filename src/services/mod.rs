//! Service layer for fintrack
//!
//! The services operate on a [`Ledger`](crate::ledger::Ledger): the import
//! service appends to it, the summary and forecast services only read it.

pub mod forecast;
pub mod import;
pub mod summary;

pub use forecast::{Forecast, ForecastService};
pub use import::{ImportReport, ImportService, SkipReason, SkipRecord};
pub use summary::{Summary, SummaryService};
