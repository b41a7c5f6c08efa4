//! CLI command handler for CSV import

use std::io::Write;
use std::path::PathBuf;

use crate::display::format_skip_records;
use crate::error::FintrackResult;
use crate::ledger::Ledger;

/// Handle the `import` command: import each file, reporting skipped rows
pub fn handle_import_command(
    ledger: &mut Ledger,
    files: &[PathBuf],
    out: &mut dyn Write,
) -> FintrackResult<()> {
    for file in files {
        let report = ledger.import_csv(file)?;
        write!(out, "{}", format_skip_records(&report.skipped))?;
        writeln!(
            out,
            "Imported {} of {} records from {}",
            report.imported,
            report.rows_seen(),
            file.display()
        )?;
    }
    writeln!(out, "Transactions imported successfully.")?;
    Ok(())
}

/// Load files ahead of a one-shot report, sending diagnostics to `diag`
pub fn import_files(
    ledger: &mut Ledger,
    files: &[PathBuf],
    diag: &mut dyn Write,
) -> FintrackResult<()> {
    for file in files {
        let report = ledger.import_csv(file)?;
        write!(diag, "{}", format_skip_records(&report.skipped))?;
    }
    Ok(())
}
