//! Payroll breakdown for a basic salary plus incentives.
//!
//! # Steps
//!
//! | Step | Figure |
//! |------|--------|
//! | 1    | Total incentives: sum of incentive amounts |
//! | 2    | Gross salary: basic + total incentives |
//! | 3    | Employee contribution (EPF): basic × 8% |
//! | 4    | Employer contribution (EPF): basic × 12% |
//! | 5    | Employer secondary contribution (ETF): basic × 3% |
//! | 6    | Tax: progressive schedule applied to gross |
//! | 7    | Net salary: gross − employee contribution − tax |
//!
//! Contributions are charged on basic salary only; incentives raise gross
//! and therefore tax, but not the contributions. All steps run at full
//! precision and the result is rounded once when it is assembled.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::{Incentive, PayrollInput, compute_payroll};
//!
//! let input = PayrollInput::new(dec!(100000.00))
//!     .with_incentive(Incentive::new(1, "Performance", dec!(25000.00)));
//!
//! let result = compute_payroll(&input).unwrap();
//!
//! assert_eq!(result.gross_salary, dec!(125000.00));
//! assert_eq!(result.employee_contribution, dec!(8000.00));
//! assert_eq!(result.tax_amount, dec!(0.00));
//! assert_eq!(result.net_salary, dec!(117000.00));
//! ```

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::TaxSchedule;
use crate::error::{ConfigError, InvalidInput};
use crate::models::{ContributionRates, PayrollFigures, PayrollInput, PayrollResult};

/// Calculator combining a tax schedule with contribution rates.
#[derive(Debug, Clone)]
pub struct PayrollCalculator<'a> {
    schedule: &'a TaxSchedule,
    rates: ContributionRates,
}

impl<'a> PayrollCalculator<'a> {
    /// Creates a calculator after validating `rates`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RateOutOfRange`] if any rate is outside `[0, 1]`.
    pub fn new(
        schedule: &'a TaxSchedule,
        rates: ContributionRates,
    ) -> Result<Self, ConfigError> {
        rates.validate()?;
        Ok(Self { schedule, rates })
    }

    /// Computes the full payroll breakdown for `input`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if:
    /// - basic salary is zero or negative
    /// - an incentive amount is negative
    /// - two incentives share an id
    /// - a sum or product exceeds the [`Decimal`] range
    pub fn calculate(
        &self,
        input: &PayrollInput,
    ) -> Result<PayrollResult, InvalidInput> {
        self.validate(input)?;

        let basic = input.basic_salary;

        // Steps 1-2
        let total_incentives = input
            .total_incentives()
            .ok_or(InvalidInput::AmountOutOfRange {
                field: "incentives",
            })?;
        let gross = basic
            .checked_add(total_incentives)
            .ok_or(InvalidInput::AmountOutOfRange {
                field: "gross_salary",
            })?;

        // Steps 3-5
        let employee_contribution = contribution(basic, self.rates.employee)?;
        let employer_contribution = contribution(basic, self.rates.employer)?;
        let employer_secondary_contribution =
            contribution(basic, self.rates.employer_secondary)?;

        // Step 6
        let tax_amount = self.schedule.tax_on(gross)?;

        debug!(
            basic = %basic,
            gross = %gross,
            employee_contribution = %employee_contribution,
            tax = %tax_amount,
            "payroll calculated"
        );

        // Step 7 and totals are formed from the rounded parts
        PayrollResult::try_from(PayrollFigures {
            basic,
            total_incentives,
            employee_contribution,
            employer_contribution,
            employer_secondary_contribution,
            tax_amount,
        })
    }

    fn validate(
        &self,
        input: &PayrollInput,
    ) -> Result<(), InvalidInput> {
        if input.basic_salary <= Decimal::ZERO {
            return Err(InvalidInput::NonPositiveBasicSalary(input.basic_salary));
        }

        let mut seen = HashSet::with_capacity(input.incentives.len());
        for incentive in &input.incentives {
            if incentive.amount < Decimal::ZERO {
                return Err(InvalidInput::NegativeIncentive {
                    id: incentive.id,
                    label: incentive.label.clone(),
                    amount: incentive.amount,
                });
            }
            if !seen.insert(incentive.id) {
                return Err(InvalidInput::DuplicateIncentiveId(incentive.id));
            }
        }
        Ok(())
    }
}

/// `basic × rate`, the base of every contribution.
fn contribution(
    basic: Decimal,
    rate: Decimal,
) -> Result<Decimal, InvalidInput> {
    basic
        .checked_mul(rate)
        .ok_or(InvalidInput::AmountOutOfRange {
            field: "basic_salary",
        })
}

impl Default for PayrollCalculator<'static> {
    fn default() -> Self {
        Self {
            schedule: TaxSchedule::standard(),
            rates: ContributionRates::default(),
        }
    }
}

/// Payroll breakdown using the standard schedule and statutory rates.
///
/// # Errors
///
/// See [`PayrollCalculator::calculate`].
pub fn compute_payroll(input: &PayrollInput) -> Result<PayrollResult, InvalidInput> {
    PayrollCalculator::default().calculate(input)
}
