//! Batch payroll inputs from CSV.
//!
//! ## CSV Format
//!
//! | Column         | Required | Type    | Notes                                    |
//! |----------------|----------|---------|------------------------------------------|
//! | `employee`     | yes      | string  | Free-form identifier, echoed in output   |
//! | `basic_salary` | yes      | decimal | e.g. `100000.00`                         |
//! | `incentives`   | no       | string  | `Label=amount` entries separated by `\|` |
//!
//! Column order does not matter (headers are matched by name).
//!
//! ```csv
//! employee,basic_salary,incentives
//! E001,100000.00,Performance=25000|Transport=5000
//! E002,180000.00,
//! ```

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use salary_core::PayrollInput;
use serde::Deserialize;
use thiserror::Error;

use crate::form::{IncentiveParseError, parse_incentive};

/// Separator between incentive entries inside the `incentives` cell.
pub const INCENTIVE_SEPARATOR: char = '|';

#[derive(Debug, Deserialize)]
struct CsvRow {
    employee: String,
    basic_salary: Decimal,
    #[serde(default)]
    incentives: Option<String>,
}

/// Errors that can occur while loading batch inputs.
#[derive(Debug, Error)]
pub enum InputLoadError {
    /// The CSV structure is invalid, a required column is missing, or a
    /// numeric cell cannot be read.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An entry in the `incentives` cell is malformed. `row` is 1-based
    /// (header = row 0).
    #[error("row {row} ({employee}): {source}")]
    InvalidIncentive {
        row: usize,
        employee: String,
        #[source]
        source: IncentiveParseError,
    },
}

/// One employee's payroll input, as read from the batch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeInput {
    pub employee: String,
    pub input: PayrollInput,
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<EmployeeInput, InputLoadError> {
    let mut input = PayrollInput::new(row.basic_salary);

    let entries = row
        .incentives
        .as_deref()
        .unwrap_or_default()
        .split(INCENTIVE_SEPARATOR)
        .filter(|entry| !entry.trim().is_empty());

    for (id, entry) in (1u32..).zip(entries) {
        let incentive =
            parse_incentive(entry, id).map_err(|source| InputLoadError::InvalidIncentive {
                row: row_number,
                employee: row.employee.clone(),
                source,
            })?;
        input = input.with_incentive(incentive);
    }

    Ok(EmployeeInput {
        employee: row.employee,
        input,
    })
}

/// Parse CSV text and return the inputs in file order.
///
/// # Errors
///
/// * [`InputLoadError::Parse`] if the CSV is structurally invalid.
/// * [`InputLoadError::InvalidIncentive`] if an incentive entry is malformed.
pub fn load_from_str(input: &str) -> Result<Vec<EmployeeInput>, InputLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect()
}

/// Read a batch file from disk and delegate to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<EmployeeInput>, InputLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| InputLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents)
}
