//! Interactive shell
//!
//! A prompt-driven command loop over a [`Ledger`]. The shell reads raw lines,
//! lower-cases command and period tokens, validates input and renders
//! results; the ledger and services never see the terminal.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::{format_skip_records, format_transaction_list};
use crate::error::{FintrackError, FintrackResult};
use crate::ledger::Ledger;
use crate::models::{parse_date_value, Period};

use super::report::{handle_predict_command, handle_summary_command, parse_months};

const HELP: &str = "Available commands:
  add     Add a new transaction
  import  Import transactions from a CSV file
  summary Display a summary of income, expenses, and net balance
  predict Display predicted expenses and net balance
  list    List all recorded transactions
  help    Display this help message
  exit    Exit the application
";

/// Interactive command loop
pub struct Shell<R, W> {
    ledger: Ledger,
    settings: Settings,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell over an empty ledger
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self::with_ledger(Ledger::new(), input, output, settings)
    }

    /// Create a shell over an existing ledger
    pub fn with_ledger(ledger: Ledger, input: R, output: W, settings: Settings) -> Self {
        Self {
            ledger,
            settings,
            input,
            output,
        }
    }

    /// Consume the shell, returning its ledger
    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    /// Run until `exit` or end of input
    pub fn run(&mut self) -> FintrackResult<()> {
        writeln!(self.output, "Welcome to Personal Finance Tracker!")?;
        write!(self.output, "{}", HELP)?;

        loop {
            let Some(command) = self.ask("\nEnter command")? else {
                writeln!(self.output)?;
                writeln!(self.output, "Exiting...")?;
                return Ok(());
            };

            let result: FintrackResult<()> = match command.to_lowercase().as_str() {
                "add" => self.add(),
                "import" => self.import(),
                "summary" => self.summary(),
                "predict" => self.predict(),
                "list" => self.list(),
                "help" => write!(self.output, "{}", HELP).map_err(Into::into),
                "exit" => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                "" => Ok(()),
                _ => {
                    writeln!(self.output, "Invalid command. Please try again.")?;
                    write!(self.output, "{}", HELP).map_err(Into::into)
                }
            };

            match result {
                Err(FintrackError::Io(e)) => return Err(FintrackError::Io(e)),
                Err(e) => writeln!(self.output, "Error: {}", user_message(&e))?,
                Ok(()) => {}
            }
        }
    }

    fn add(&mut self) -> FintrackResult<()> {
        let Some(date) = self.ask("Date (YYYY-MM-DD)")? else {
            return Ok(());
        };
        let date = parse_date_value(&date).ok_or_else(|| {
            FintrackError::Validation(format!("invalid date '{}': expected YYYY-MM-DD", date))
        })?;

        let Some(kind) = self.ask("Type (Income/Expense)")? else {
            return Ok(());
        };
        let Some(category) = self.ask("Category")? else {
            return Ok(());
        };
        let Some(amount) = self.ask("Amount")? else {
            return Ok(());
        };
        let amount: f64 = amount.parse().map_err(|e| {
            FintrackError::Validation(format!("invalid amount '{}': {}", amount, e))
        })?;
        let Some(description) = self.ask("Description")? else {
            return Ok(());
        };

        self.ledger.add(date, &kind, category, amount, description)?;
        writeln!(self.output, "Transaction added successfully.")?;
        Ok(())
    }

    fn import(&mut self) -> FintrackResult<()> {
        let Some(filename) = self.ask("Enter CSV filename")? else {
            return Ok(());
        };

        let report = self.ledger.import_csv(&filename)?;
        write!(self.output, "{}", format_skip_records(&report.skipped))?;
        writeln!(self.output, "Transactions imported successfully.")?;
        Ok(())
    }

    fn summary(&mut self) -> FintrackResult<()> {
        let Some(period) = self.ask("Time period (month/year/all)")? else {
            return Ok(());
        };
        let period: Period = period.to_lowercase().parse()?;

        let value = match period {
            Period::Month => self.ask("Month (YYYY-MM)")?,
            Period::Year => self.ask("Year (YYYY)")?,
            Period::All => Some(String::new()),
        };
        let Some(value) = value else {
            return Ok(());
        };

        handle_summary_command(&self.ledger, &self.settings, period, &value, &mut self.output)
    }

    fn predict(&mut self) -> FintrackResult<()> {
        let Some(months) = self.ask("Prediction period (months)")? else {
            return Ok(());
        };
        let months = parse_months(&months)?;

        handle_predict_command(&self.ledger, &self.settings, months, &mut self.output)
    }

    fn list(&mut self) -> FintrackResult<()> {
        write!(
            self.output,
            "{}",
            format_transaction_list(self.ledger.transactions(), self.settings.display_precision)
        )?;
        Ok(())
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn ask(&mut self, label: &str) -> FintrackResult<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Message shown after "Error: "
fn user_message(err: &FintrackError) -> String {
    match err {
        FintrackError::Validation(msg) => msg.clone(),
        other => other.to_string(),
    }
}
