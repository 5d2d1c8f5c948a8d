//! Tax schedules from CSV.
//!
//! The CSV file has one row per bracket, in ascending order:
//!
//! | Column        | Type    | Notes                                   |
//! |---------------|---------|-----------------------------------------|
//! | `lower_bound` | decimal | Start of the bracket                    |
//! | `upper_bound` | decimal | End of the bracket; empty for unbounded |
//! | `rate`        | decimal | Marginal rate as a fraction (e.g. 0.06) |
//!
//! ```csv
//! lower_bound,upper_bound,rate
//! 0,150000,0
//! 150000,233333,0.06
//! 233333,,0.18
//! ```

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use salary_core::{TaxBracket, TaxSchedule, TaxScheduleError};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading a tax schedule.
#[derive(Debug, Error)]
pub enum ScheduleLoadError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("cannot open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid tax schedule: {0}")]
    Schedule(#[from] TaxScheduleError),
}

impl From<csv::Error> for ScheduleLoadError {
    fn from(err: csv::Error) -> Self {
        ScheduleLoadError::CsvParse(err.to_string())
    }
}

/// A single row of the tax schedule CSV file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TaxBracketRecord {
    pub lower_bound: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl From<TaxBracketRecord> for TaxBracket {
    fn from(record: TaxBracketRecord) -> Self {
        TaxBracket::new(record.lower_bound, record.upper_bound, record.rate)
    }
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for tax schedules stored as CSV.
pub struct TaxScheduleLoader;

impl TaxScheduleLoader {
    /// Parse bracket records from a CSV reader, in file order.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<TaxBracketRecord>, ScheduleLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: TaxBracketRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Parse and validate a schedule from a CSV reader.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleLoadError::CsvParse`] for malformed rows and
    /// [`ScheduleLoadError::Schedule`] when the brackets do not form a valid
    /// schedule.
    pub fn load<R: Read>(reader: R) -> Result<TaxSchedule, ScheduleLoadError> {
        let records = Self::parse(reader)?;
        debug!(brackets = records.len(), "parsed tax schedule");

        let brackets = records.into_iter().map(TaxBracket::from).collect();
        Ok(TaxSchedule::new(brackets)?)
    }

    /// Read a schedule from a file on disk.
    pub fn load_from_file(path: &Path) -> Result<TaxSchedule, ScheduleLoadError> {
        let file = File::open(path).map_err(|source| ScheduleLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load(file)
    }
}
