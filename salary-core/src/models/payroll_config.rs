use serde::{Deserialize, Serialize};

use super::{ContributionRates, TaxBracket};
use crate::calculations::TaxSchedule;
use crate::error::ConfigError;

/// Calculator settings as read from a configuration file.
///
/// Missing sections fall back to the statutory rates and the standard
/// schedule.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::PayrollConfig;
///
/// let config = PayrollConfig::default();
/// let schedule = config.schedule().unwrap();
///
/// assert_eq!(config.rates.employee, dec!(0.08));
/// assert_eq!(schedule.brackets().len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollConfig {
    #[serde(default)]
    pub rates: ContributionRates,

    #[serde(default = "standard_brackets")]
    pub brackets: Vec<TaxBracket>,
}

fn standard_brackets() -> Vec<TaxBracket> {
    TaxSchedule::standard().brackets().to_vec()
}

impl PayrollConfig {
    /// Validates the rates and builds the tax schedule.
    pub fn schedule(&self) -> Result<TaxSchedule, ConfigError> {
        self.rates.validate()?;
        Ok(TaxSchedule::new(self.brackets.clone())?)
    }
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            rates: ContributionRates::default(),
            brackets: standard_brackets(),
        }
    }
}
