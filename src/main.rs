use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_import_command, handle_predict_command, handle_summary_command, import_files,
    parse_months, Shell,
};
use fintrack::config::{FintrackPaths, Settings};
use fintrack::ledger::Ledger;
use fintrack::logging::init_tracing;
use fintrack::models::Period;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracker with CSV import and expense forecasting",
    long_about = "fintrack records income and expense transactions, imports them \
                  from CSV files, summarizes them by month, year or all time, and \
                  projects future expenses from the last recorded expense."
)]
struct Cli {
    /// Configuration directory (defaults to ~/.config/fintrack)
    #[arg(long, env = "FINTRACK_DATA_DIR", global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell (default)
    #[command(alias = "repl")]
    Shell {
        /// CSV files to load before the first prompt
        #[arg(short, long = "import")]
        import: Vec<PathBuf>,
    },

    /// Import CSV files and report skipped rows
    Import {
        /// CSV files with a header row and date,kind,category,amount,description rows
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Summarize income, expenses and categories for a period
    Summary {
        /// CSV files to load first
        #[arg(short, long = "import")]
        import: Vec<PathBuf>,
        /// Period: month, year or all
        #[arg(value_parser = parse_period)]
        period: Period,
        /// YYYY-MM for month, YYYY for year
        #[arg(default_value = "")]
        value: String,
    },

    /// Predict expenses and net balance for the coming months
    Predict {
        /// CSV files to load first
        #[arg(short, long = "import")]
        import: Vec<PathBuf>,
        /// Number of months to project
        #[arg(allow_hyphen_values = true)]
        months: String,
    },

    /// Show current configuration and paths, optionally updating settings
    Config {
        /// Set the monthly forecast growth rate (0.1 = 10%)
        #[arg(long)]
        growth_rate: Option<f64>,
        /// Set the number of decimals shown for amounts
        #[arg(long)]
        precision: Option<usize>,
        /// Set the default log filter (RUST_LOG still overrides it)
        #[arg(long)]
        log_filter: Option<String>,
    },
}

fn parse_period(s: &str) -> Result<Period, String> {
    s.to_lowercase().parse().map_err(|e: fintrack::FintrackError| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.config_dir {
        Some(dir) => FintrackPaths::with_base_dir(dir),
        None => FintrackPaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_filter);

    let mut ledger = Ledger::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        None => {
            let stdin = io::stdin();
            let mut shell = Shell::new(stdin.lock(), out, settings);
            shell.run()?;
        }
        Some(Commands::Shell { import }) => {
            import_files(&mut ledger, &import, &mut out)?;
            let stdin = io::stdin();
            let mut shell = Shell::with_ledger(ledger, stdin.lock(), out, settings);
            shell.run()?;
        }
        Some(Commands::Import { files }) => {
            handle_import_command(&mut ledger, &files, &mut out)?;
        }
        Some(Commands::Summary {
            import,
            period,
            value,
        }) => {
            import_files(&mut ledger, &import, &mut io::stderr())?;
            handle_summary_command(&ledger, &settings, period, &value, &mut out)?;
        }
        Some(Commands::Predict { import, months }) => {
            let months = parse_months(&months)?;
            import_files(&mut ledger, &import, &mut io::stderr())?;
            handle_predict_command(&ledger, &settings, months, &mut out)?;
        }
        Some(Commands::Config {
            growth_rate,
            precision,
            log_filter,
        }) => {
            let changed = growth_rate.is_some() || precision.is_some() || log_filter.is_some();
            if let Some(rate) = growth_rate {
                if !rate.is_finite() {
                    anyhow::bail!("Growth rate must be a finite number.");
                }
                settings.forecast_growth_rate = rate;
            }
            if let Some(precision) = precision {
                settings.display_precision = precision;
            }
            if let Some(filter) = log_filter {
                settings.log_filter = filter;
            }
            if changed {
                settings.save(&paths)?;
            }

            writeln!(out, "fintrack Configuration")?;
            writeln!(out, "======================")?;
            writeln!(out, "Config directory: {}", paths.base_dir().display())?;
            writeln!(out, "Settings file:    {}", paths.settings_file().display())?;
            writeln!(out)?;
            writeln!(out, "Settings:")?;
            writeln!(out, "  Forecast growth rate: {}", settings.forecast_growth_rate)?;
            writeln!(out, "  Display precision:    {}", settings.display_precision)?;
            writeln!(out, "  Log filter:           {}", settings.log_filter)?;
        }
    }

    Ok(())
}
