//! Progressive income tax.
//!
//! A [`TaxSchedule`] is an ordered, contiguous list of [`TaxBracket`]s. The
//! tax on an income is the sum, over every bracket the income reaches, of
//! the part of the income inside that bracket times the bracket rate.
//!
//! # Standard schedule (monthly)
//!
//! | Lower   | Upper   | Rate |
//! |---------|---------|------|
//! | 0       | 150,000 | 0%   |
//! | 150,000 | 233,333 | 6%   |
//! | 233,333 | 275,000 | 18%  |
//! | 275,000 | 316,667 | 24%  |
//! | 316,667 | 358,333 | 30%  |
//! | 358,333 | none    | 36%  |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::compute_tax;
//!
//! assert_eq!(compute_tax(dec!(150000)).unwrap(), dec!(0));
//! // (233,333 - 150,000) x 6%
//! assert_eq!(compute_tax(dec!(233333)).unwrap(), dec!(4999.98));
//! ```

use std::sync::OnceLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::TaxBracket;
use crate::calculations::common::round_half_up;
use crate::error::InvalidInput;

/// Reasons a list of brackets cannot form a schedule.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaxScheduleError {
    #[error("tax schedule has no brackets")]
    Empty,

    #[error("first bracket must start at 0, got {lower}")]
    NonZeroStart { lower: Decimal },

    #[error("bracket {index}: upper bound {upper} must exceed lower bound {lower}")]
    EmptyBracket {
        index: usize,
        lower: Decimal,
        upper: Decimal,
    },

    #[error("bracket {index}: lower bound {lower} does not continue from previous upper bound {expected}")]
    NotContiguous {
        index: usize,
        expected: Decimal,
        lower: Decimal,
    },

    #[error("bracket {index}: rate must be between 0 and 1, got {rate}")]
    InvalidRate { index: usize, rate: Decimal },

    #[error("bracket {0} is unbounded but is not the last bracket")]
    UnboundedNotLast(usize),
}

/// A validated progressive tax table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxSchedule {
    brackets: Vec<TaxBracket>,
}

impl TaxSchedule {
    /// Builds a schedule after checking that the brackets start at zero, are
    /// contiguous and non-empty, and carry rates in `[0, 1]`.
    ///
    /// A schedule whose last bracket is bounded is accepted; income above
    /// that bound is left untaxed.
    ///
    /// # Errors
    ///
    /// Returns the first [`TaxScheduleError`] found, scanning brackets in order.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use salary_core::{TaxBracket, TaxSchedule, TaxScheduleError};
    ///
    /// let gap = vec![
    ///     TaxBracket::new(dec!(0), Some(dec!(1000)), dec!(0)),
    ///     TaxBracket::new(dec!(1500), None, dec!(0.1)),
    /// ];
    ///
    /// assert!(matches!(
    ///     TaxSchedule::new(gap),
    ///     Err(TaxScheduleError::NotContiguous { index: 1, .. })
    /// ));
    /// ```
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, TaxScheduleError> {
        if brackets.is_empty() {
            return Err(TaxScheduleError::Empty);
        }

        let first = brackets[0].lower_bound;
        if !first.is_zero() {
            return Err(TaxScheduleError::NonZeroStart { lower: first });
        }

        let last = brackets.len() - 1;
        let mut previous_upper: Option<Decimal> = None;

        for (index, bracket) in brackets.iter().enumerate() {
            let lower = bracket.lower_bound;
            if let Some(expected) = previous_upper
                && lower != expected
            {
                return Err(TaxScheduleError::NotContiguous {
                    index,
                    expected,
                    lower,
                });
            }
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(TaxScheduleError::InvalidRate {
                    index,
                    rate: bracket.rate,
                });
            }
            match bracket.upper_bound {
                Some(upper) if upper <= lower => {
                    return Err(TaxScheduleError::EmptyBracket {
                        index,
                        lower,
                        upper,
                    });
                }
                Some(upper) => previous_upper = Some(upper),
                None if index != last => return Err(TaxScheduleError::UnboundedNotLast(index)),
                None => {}
            }
        }

        Ok(Self { brackets })
    }

    /// The process-wide standard schedule.
    pub fn standard() -> &'static TaxSchedule {
        static STANDARD: OnceLock<TaxSchedule> = OnceLock::new();
        STANDARD.get_or_init(|| Self {
            brackets: standard_brackets(),
        })
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Upper bound of the top bracket when the schedule is capped.
    pub fn ceiling(&self) -> Option<Decimal> {
        self.brackets.last().and_then(|bracket| bracket.upper_bound)
    }

    /// Tax owed on `gross_income`, at full precision.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::NegativeGrossIncome`] for a negative income.
    pub fn tax_on(
        &self,
        gross_income: Decimal,
    ) -> Result<Decimal, InvalidInput> {
        if gross_income < Decimal::ZERO {
            return Err(InvalidInput::NegativeGrossIncome(gross_income));
        }

        let mut tax = Decimal::ZERO;
        let mut remaining = gross_income;

        for bracket in &self.brackets {
            if remaining.is_zero() {
                break;
            }
            let taxed = match bracket.span() {
                Some(span) => remaining.min(span),
                None => remaining,
            };
            debug!(
                lower = %bracket.lower_bound,
                taxed = %taxed,
                rate = %bracket.rate,
                "applying tax bracket"
            );
            tax += taxed * bracket.rate;
            remaining -= taxed;
        }

        if !remaining.is_zero() {
            warn!(
                gross_income = %gross_income,
                ceiling = ?self.ceiling(),
                untaxed = %remaining,
                "income above top bracket is not taxed by this schedule"
            );
        }

        Ok(tax)
    }
}

fn standard_brackets() -> Vec<TaxBracket> {
    vec![
        TaxBracket::new(dec!(0), Some(dec!(150000)), dec!(0)),
        TaxBracket::new(dec!(150000), Some(dec!(233333)), dec!(0.06)),
        TaxBracket::new(dec!(233333), Some(dec!(275000)), dec!(0.18)),
        TaxBracket::new(dec!(275000), Some(dec!(316667)), dec!(0.24)),
        TaxBracket::new(dec!(316667), Some(dec!(358333)), dec!(0.30)),
        TaxBracket::new(dec!(358333), None, dec!(0.36)),
    ]
}

/// Tax on `gross_income` under the standard schedule, rounded to cents.
///
/// # Errors
///
/// Returns [`InvalidInput::NegativeGrossIncome`] for a negative income.
pub fn compute_tax(gross_income: Decimal) -> Result<Decimal, InvalidInput> {
    TaxSchedule::standard()
        .tax_on(gross_income)
        .map(round_half_up)
}
