//! Cost-to-company breakdown using flat percentages.
//!
//! The employer's total cost is reduced by the combined contribution
//! percentages to give gross salary, and a flat tax percentage of gross
//! gives net salary:
//!
//! ```text
//! contribution_deduction = ctc × (employee% + employer%) / 100
//! gross_salary           = ctc − contribution_deduction
//! tax_amount             = gross_salary × tax% / 100
//! net_salary             = gross_salary − tax_amount
//! ```
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::{CostToCompanyInput, compute_cost_to_company};
//!
//! let input = CostToCompanyInput {
//!     cost_to_company: dec!(100000),
//!     employee_percent: dec!(8),
//!     employer_percent: dec!(3),
//!     tax_percent: dec!(5),
//! };
//!
//! let result = compute_cost_to_company(&input).unwrap();
//!
//! assert_eq!(result.gross_salary, dec!(89000.00));
//! assert_eq!(result.net_salary, dec!(84550.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{is_valid_percent, percent_to_fraction, round_half_up};
use crate::error::InvalidInput;

/// Inputs for the cost-to-company form. Percentages are whole numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostToCompanyInput {
    pub cost_to_company: Decimal,

    /// Employee contribution percentage (EPF).
    pub employee_percent: Decimal,

    /// Employer contribution percentage (ETF).
    pub employer_percent: Decimal,

    /// Flat income tax percentage applied to gross.
    pub tax_percent: Decimal,
}

/// Result of the cost-to-company breakdown, rounded to cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostToCompanyResult {
    pub cost_to_company: Decimal,
    pub contribution_deduction: Decimal,
    pub gross_salary: Decimal,
    pub tax_amount: Decimal,
    pub net_salary: Decimal,
}

/// Splits a cost to company into gross and net salary.
///
/// # Errors
///
/// Returns [`InvalidInput`] if the cost to company is not positive, any
/// percentage lies outside `0..=100`, or the two contribution percentages
/// together exceed 100.
pub fn compute_cost_to_company(
    input: &CostToCompanyInput
) -> Result<CostToCompanyResult, InvalidInput> {
    validate(input)?;

    let ctc = input.cost_to_company;
    let contribution_deduction =
        ctc * percent_to_fraction(input.employee_percent + input.employer_percent);
    let gross = ctc - contribution_deduction;
    let tax = gross * percent_to_fraction(input.tax_percent);

    let contribution_deduction = round_half_up(contribution_deduction);
    let tax_amount = round_half_up(tax);
    let gross_salary = round_half_up(ctc) - contribution_deduction;

    Ok(CostToCompanyResult {
        cost_to_company: round_half_up(ctc),
        contribution_deduction,
        gross_salary,
        tax_amount,
        net_salary: gross_salary - tax_amount,
    })
}

fn validate(input: &CostToCompanyInput) -> Result<(), InvalidInput> {
    if input.cost_to_company <= Decimal::ZERO {
        return Err(InvalidInput::NonPositiveCostToCompany(
            input.cost_to_company,
        ));
    }

    let percentages = [
        ("employee_percent", input.employee_percent),
        ("employer_percent", input.employer_percent),
        ("tax_percent", input.tax_percent),
    ];
    for (field, value) in percentages {
        if !is_valid_percent(value) {
            return Err(InvalidInput::PercentageOutOfRange { field, value });
        }
    }

    let combined = input.employee_percent + input.employer_percent;
    if !is_valid_percent(combined) {
        return Err(InvalidInput::PercentageOutOfRange {
            field: "contribution_percent",
            value: combined,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn input(
        ctc: Decimal,
        employee: Decimal,
        employer: Decimal,
        tax: Decimal,
    ) -> CostToCompanyInput {
        CostToCompanyInput {
            cost_to_company: ctc,
            employee_percent: employee,
            employer_percent: employer,
            tax_percent: tax,
        }
    }

    #[test]
    fn computes_gross_and_net() {
        let result = compute_cost_to_company(&input(dec!(100000), dec!(8), dec!(3), dec!(5)));

        assert_eq!(
            result,
            Ok(CostToCompanyResult {
                cost_to_company: dec!(100000.00),
                contribution_deduction: dec!(11000.00),
                gross_salary: dec!(89000.00),
                tax_amount: dec!(4450.00),
                net_salary: dec!(84550.00),
            })
        );
    }

    #[test]
    fn whole_amounts_are_reported_in_cents() {
        let result =
            compute_cost_to_company(&input(dec!(100000), dec!(0), dec!(0), dec!(0))).unwrap();

        assert_eq!(result.cost_to_company.to_string(), "100000.00");
        assert_eq!(result.contribution_deduction.to_string(), "0.00");
        assert_eq!(result.tax_amount.to_string(), "0.00");
        assert_eq!(result.net_salary.to_string(), "100000.00");
    }

    #[test]
    fn zero_percentages_pass_ctc_through() {
        let result =
            compute_cost_to_company(&input(dec!(5432.10), dec!(0), dec!(0), dec!(0))).unwrap();

        assert_eq!(result.gross_salary, dec!(5432.10));
        assert_eq!(result.net_salary, dec!(5432.10));
    }

    #[test]
    fn rounds_fractional_cents_once() {
        let result =
            compute_cost_to_company(&input(dec!(1234.57), dec!(8), dec!(3), dec!(12.5))).unwrap();

        // 1234.57 x 11% = 135.8027
        assert_eq!(result.contribution_deduction, dec!(135.80));
        assert_eq!(result.gross_salary, dec!(1098.77));
        // 1098.7673 x 12.5% = 137.3459...
        assert_eq!(result.tax_amount, dec!(137.35));
        assert_eq!(result.net_salary, dec!(961.42));
    }

    #[test]
    fn rejects_non_positive_ctc() {
        let result = compute_cost_to_company(&input(dec!(0), dec!(8), dec!(3), dec!(5)));

        assert_eq!(result, Err(InvalidInput::NonPositiveCostToCompany(dec!(0))));
    }

    #[test]
    fn rejects_employer_percent_above_hundred() {
        let result = compute_cost_to_company(&input(dec!(1000), dec!(8), dec!(101), dec!(5)));

        assert_eq!(
            result,
            Err(InvalidInput::PercentageOutOfRange {
                field: "employer_percent",
                value: dec!(101),
            })
        );
    }

    #[test]
    fn rejects_combined_contributions_above_hundred() {
        let result = compute_cost_to_company(&input(dec!(1000), dec!(60), dec!(45), dec!(5)));

        assert_eq!(
            result,
            Err(InvalidInput::PercentageOutOfRange {
                field: "contribution_percent",
                value: dec!(105),
            })
        );
    }

    #[test]
    fn rejects_negative_tax_percent() {
        let result = compute_cost_to_company(&input(dec!(1000), dec!(8), dec!(3), dec!(-1)));

        assert_eq!(
            result,
            Err(InvalidInput::PercentageOutOfRange {
                field: "tax_percent",
                value: dec!(-1),
            })
        );
    }
}
