//! CSV Import service
//!
//! Imports `date,kind,category,amount,description` rows into a ledger.
//! Problems with the source as a whole (unreadable, not CSV, no data rows)
//! fail the import and add nothing. Problems with a single row skip that
//! row and are returned as [`SkipRecord`]s next to the successful outcome.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use tracing::{info, warn};

use crate::error::{FintrackError, FintrackResult};
use crate::ledger::Ledger;
use crate::models::parse_date_value;

/// Number of fields every data row must carry
pub const FIELD_COUNT: usize = 5;

/// Why a row was left out of the import
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The row did not have exactly five fields
    FieldCount { found: usize },
    /// The date column is not a `YYYY-MM-DD` date
    InvalidDate(String),
    /// The amount column is not a decimal number
    InvalidAmount(String),
    /// The kind column is not `Income` or `Expense`
    InvalidKind(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount { found } => write!(
                f,
                "invalid number of fields (expected {}, found {})",
                FIELD_COUNT, found
            ),
            Self::InvalidDate(e) => write!(f, "invalid date: {}", e),
            Self::InvalidAmount(e) => write!(f, "invalid amount: {}", e),
            Self::InvalidKind(kind) => write!(f, "invalid transaction type: {}", kind),
        }
    }
}

/// A row excluded from the import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipRecord {
    /// 1-based row number in the source; the header is row 1
    pub row: usize,
    /// Raw field contents of the row
    pub fields: Vec<String>,
    /// Why the row was skipped
    pub reason: SkipReason,
}

impl fmt::Display for SkipRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Skipping record {} due to {}: {:?}",
            self.row, self.reason, self.fields
        )
    }
}

/// Outcome of a successful import
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    /// Number of rows appended to the ledger
    pub imported: usize,
    /// Rows that were skipped, in source order
    pub skipped: Vec<SkipRecord>,
}

impl ImportReport {
    /// True when every data row was imported
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Total number of data rows seen
    pub fn rows_seen(&self) -> usize {
        self.imported + self.skipped.len()
    }
}

/// Service for CSV import
pub struct ImportService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Import a CSV file.
    ///
    /// The file is opened, read to completion and closed before this returns,
    /// whatever the outcome.
    pub fn import_file(&mut self, path: impl AsRef<Path>) -> FintrackResult<ImportReport> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let file = File::open(path).map_err(|e| FintrackError::unreadable(&name, e))?;
        self.import_reader(file, &name)
    }

    /// Import CSV content from any reader; `source` names it in errors.
    pub fn import_reader<R: Read>(
        &mut self,
        reader: R,
        source: &str,
    ) -> FintrackResult<ImportReport> {
        let records = read_records(reader, source)?;

        // The first record is the header; its content is not checked
        if records.len() <= 1 {
            return Err(FintrackError::EmptySource);
        }

        let mut report = ImportReport::default();
        for (idx, record) in records.iter().enumerate().skip(1) {
            let row = idx + 1;
            match self.import_record(record) {
                Ok(()) => report.imported += 1,
                Err(reason) => {
                    let skip = SkipRecord {
                        row,
                        fields: record.iter().map(str::to_string).collect(),
                        reason,
                    };
                    warn!(source, row, fields = ?skip.fields, reason = %skip.reason, "skipping record");
                    report.skipped.push(skip);
                }
            }
        }

        info!(
            source,
            imported = report.imported,
            skipped = report.skipped.len(),
            "import finished"
        );
        Ok(report)
    }

    /// Parse one data row and hand it to the ledger
    fn import_record(&mut self, record: &StringRecord) -> Result<(), SkipReason> {
        if record.len() != FIELD_COUNT {
            return Err(SkipReason::FieldCount {
                found: record.len(),
            });
        }

        let date = parse_date(&record[0])?;
        let amount = parse_amount(&record[3])?;

        self.ledger
            .add(date, &record[1], &record[2], amount, &record[4])
            .map_err(|_| SkipReason::InvalidKind(record[1].to_string()))
    }
}

/// Read every record up front so a malformed source imports nothing
fn read_records<R: Read>(reader: R, source: &str) -> FintrackResult<Vec<StringRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            if e.is_io_error() {
                FintrackError::unreadable(source, e)
            } else {
                FintrackError::MalformedSource(e.to_string())
            }
        })
}

fn parse_date(s: &str) -> Result<NaiveDate, SkipReason> {
    parse_date_value(s)
        .ok_or_else(|| SkipReason::InvalidDate(format!("'{}' is not a YYYY-MM-DD date", s)))
}

fn parse_amount(s: &str) -> Result<f64, SkipReason> {
    s.parse::<f64>()
        .map_err(|e| SkipReason::InvalidAmount(format!("'{}': {}", s, e)))
}
