use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Statutory contribution rates applied to basic salary, as fractions.
///
/// Defaults are EPF 8% (employee), EPF 12% (employer) and ETF 3%
/// (employer only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContributionRates {
    /// Employee retirement contribution (EPF), deducted from pay.
    pub employee: Decimal,

    /// Employer retirement contribution (EPF).
    pub employer: Decimal,

    /// Employer-only trust fund contribution (ETF).
    pub employer_secondary: Decimal,
}

impl ContributionRates {
    pub const EMPLOYEE: Decimal = dec!(0.08);
    pub const EMPLOYER: Decimal = dec!(0.12);
    pub const EMPLOYER_SECONDARY: Decimal = dec!(0.03);

    /// Checks that every rate lies in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rates = [
            ("employee", self.employee),
            ("employer", self.employer),
            ("employer_secondary", self.employer_secondary),
        ];
        for (field, value) in rates {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(ConfigError::RateOutOfRange { field, value });
            }
        }
        Ok(())
    }
}

impl Default for ContributionRates {
    fn default() -> Self {
        Self {
            employee: Self::EMPLOYEE,
            employer: Self::EMPLOYER,
            employer_secondary: Self::EMPLOYER_SECONDARY,
        }
    }
}
