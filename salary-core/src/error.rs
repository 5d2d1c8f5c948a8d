//! Error types shared by the salary calculations.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::TaxScheduleError;

/// A calculation input that was rejected before any figure was produced.
///
/// Each variant identifies the field that failed and carries the offending
/// value so a form layer can attach the message to the right control.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidInput {
    /// Basic salary was zero or negative.
    #[error("basic salary must be positive, got {0}")]
    NonPositiveBasicSalary(Decimal),

    /// An incentive carried a negative amount.
    #[error("incentive {id} ('{label}') has negative amount {amount}")]
    NegativeIncentive {
        id: u32,
        label: String,
        amount: Decimal,
    },

    /// Two incentives in the same request share an identifier.
    #[error("incentive id {0} appears more than once")]
    DuplicateIncentiveId(u32),

    /// Gross income passed to the tax engine was negative.
    #[error("gross income must be non-negative, got {0}")]
    NegativeGrossIncome(Decimal),

    /// Cost to company was zero or negative.
    #[error("cost to company must be positive, got {0}")]
    NonPositiveCostToCompany(Decimal),

    /// A percentage input fell outside 0..=100.
    #[error("{field} must be between 0 and 100 percent, got {value}")]
    PercentageOutOfRange { field: &'static str, value: Decimal },

    /// An amount, or a figure derived from it, exceeds the decimal range.
    #[error("{field} is too large to calculate")]
    AmountOutOfRange { field: &'static str },
}

impl InvalidInput {
    /// Name of the input field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NonPositiveBasicSalary(_) => "basic_salary",
            Self::NegativeIncentive { .. } | Self::DuplicateIncentiveId(_) => "incentives",
            Self::NegativeGrossIncome(_) => "gross_income",
            Self::NonPositiveCostToCompany(_) => "cost_to_company",
            Self::PercentageOutOfRange { field, .. } | Self::AmountOutOfRange { field } => field,
        }
    }
}

/// Invalid calculator configuration (rates or tax schedule).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid tax schedule: {0}")]
    Schedule(#[from] TaxScheduleError),

    #[error("{field} rate must be between 0 and 1, got {value}")]
    RateOutOfRange { field: &'static str, value: Decimal },
}
