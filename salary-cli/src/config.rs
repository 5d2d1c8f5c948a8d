//! Calculator settings from a TOML file, with an optional CSV tax schedule.
//!
//! ```toml
//! [rates]
//! employee = "0.08"
//! employer = "0.12"
//! employer_secondary = "0.03"
//!
//! [[brackets]]
//! lower_bound = "0"
//! upper_bound = "150000"
//! rate = "0"
//!
//! [[brackets]]
//! lower_bound = "150000"
//! rate = "0.06"
//! ```
//!
//! Both sections are optional; omitted ones use the statutory rates and the
//! standard schedule.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use salary_core::{ContributionRates, PayrollConfig, TaxSchedule};
use salary_data::TaxScheduleLoader;
use tracing::{debug, info};

/// Validated settings used to build a calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub schedule: TaxSchedule,
    pub rates: ContributionRates,
}

/// Parses a TOML document into a [`PayrollConfig`].
pub fn parse_config(text: &str) -> Result<PayrollConfig, toml::de::Error> {
    toml::from_str(text)
}

/// Reads the config file, or returns the defaults when `path` is `None`.
pub fn load_config(path: Option<&Path>) -> Result<PayrollConfig> {
    let Some(path) = path else {
        debug!("no config file given; using defaults");
        return Ok(PayrollConfig::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config =
        parse_config(&text).with_context(|| format!("Failed to parse config: {}", path.display()))?;

    info!(path = %path.display(), brackets = config.brackets.len(), "loaded config");
    Ok(config)
}

impl Settings {
    /// Combines the config file with an optional schedule CSV.
    ///
    /// The CSV schedule, when given, replaces the config brackets.
    pub fn resolve(
        config_path: Option<&Path>,
        schedule_path: Option<&Path>,
    ) -> Result<Self> {
        let config = load_config(config_path)?;

        let schedule = match schedule_path {
            Some(path) => {
                config.rates.validate().context("Invalid contribution rates")?;
                TaxScheduleLoader::load_from_file(path)
                    .with_context(|| format!("Failed to load schedule: {}", path.display()))?
            }
            None => config.schedule().context("Invalid configuration")?,
        };

        Ok(Self {
            schedule,
            rates: config.rates,
        })
    }
}
