use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Salary calculator: gross and net pay, EPF/ETF contributions and income tax.
///
/// Amounts may use `,` as a thousands separator. Tax rates and contribution
/// rates come from `--config`, and `--schedule` replaces the tax table.
#[derive(Debug, Parser)]
#[command(name = "salary", version, about, long_about = None)]
pub struct Cli {
    /// TOML file with contribution rates and tax brackets.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// CSV file with tax brackets (lower_bound,upper_bound,rate).
    /// Takes precedence over brackets in the config file.
    #[arg(long, global = true)]
    pub schedule: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log filter (e.g. `debug` or `salary_core=trace`). Overrides RUST_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Append log records to this file as well as stderr.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Payroll breakdown for a basic salary plus incentives.
    Payroll {
        /// Basic salary.
        #[arg(long, allow_hyphen_values = true)]
        basic: String,

        /// Incentive as `Label=amount` (or a bare amount). Repeatable.
        #[arg(long = "incentive", allow_hyphen_values = true)]
        incentives: Vec<String>,
    },

    /// Income tax on a gross amount.
    Tax {
        /// Gross income.
        #[arg(long, allow_hyphen_values = true)]
        gross: String,
    },

    /// Gross and net salary from a cost to company and flat percentages.
    Ctc {
        /// Cost to company.
        #[arg(long, allow_hyphen_values = true)]
        ctc: String,

        /// Employee contribution percentage (EPF).
        #[arg(long, allow_hyphen_values = true)]
        epf: String,

        /// Employer contribution percentage (ETF).
        #[arg(long, allow_hyphen_values = true)]
        etf: String,

        /// Flat tax percentage of gross.
        #[arg(long, allow_hyphen_values = true)]
        tax: String,
    },

    /// Payroll for every row of a CSV file (employee,basic_salary,incentives).
    Batch {
        /// Input CSV file.
        #[arg(long)]
        file: PathBuf,

        /// Write results here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print the active tax schedule.
    Schedule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Labelled breakdown for reading.
    Text,
    /// CSV with a header row.
    Csv,
}
