use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::error::InvalidInput;

/// Complete payroll breakdown for one calculation.
///
/// Every figure is rounded to two decimal places and carries a scale of 2.
/// Derived totals are formed from the rounded parts, so the identities
/// between fields hold exactly on the values a caller sees. Tax is computed
/// on the unrounded gross; with sub-cent inputs the reported gross can
/// therefore differ by a cent from the amount that was taxed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    pub basic: Decimal,
    pub total_incentives: Decimal,
    pub gross_salary: Decimal,
    pub employee_contribution: Decimal,
    pub employer_contribution: Decimal,
    pub employer_secondary_contribution: Decimal,
    pub tax_amount: Decimal,
    pub net_salary: Decimal,
    pub total_deductions: Decimal,
    pub total_employer_contribution: Decimal,
}

/// Unrounded figures produced by the calculator.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PayrollFigures {
    pub basic: Decimal,
    pub total_incentives: Decimal,
    pub employee_contribution: Decimal,
    pub employer_contribution: Decimal,
    pub employer_secondary_contribution: Decimal,
    pub tax_amount: Decimal,
}

fn checked(
    value: Option<Decimal>,
    field: &'static str,
) -> Result<Decimal, InvalidInput> {
    value.ok_or(InvalidInput::AmountOutOfRange { field })
}

impl TryFrom<PayrollFigures> for PayrollResult {
    type Error = InvalidInput;

    fn try_from(figures: PayrollFigures) -> Result<Self, Self::Error> {
        let basic = round_half_up(figures.basic);
        let total_incentives = round_half_up(figures.total_incentives);
        let employee_contribution = round_half_up(figures.employee_contribution);
        let employer_contribution = round_half_up(figures.employer_contribution);
        let employer_secondary_contribution =
            round_half_up(figures.employer_secondary_contribution);
        let tax_amount = round_half_up(figures.tax_amount);

        let gross_salary = checked(basic.checked_add(total_incentives), "gross_salary")?;
        let total_deductions = checked(
            employee_contribution.checked_add(tax_amount),
            "total_deductions",
        )?;
        let net_salary = checked(gross_salary.checked_sub(total_deductions), "net_salary")?;
        let total_employer_contribution = checked(
            employer_contribution.checked_add(employer_secondary_contribution),
            "total_employer_contribution",
        )?;

        Ok(Self {
            basic,
            total_incentives,
            gross_salary,
            employee_contribution,
            employer_contribution,
            employer_secondary_contribution,
            tax_amount,
            net_salary,
            total_deductions,
            total_employer_contribution,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn rounds_each_component_once() {
        let result = PayrollResult::try_from(PayrollFigures {
            basic: dec!(100000.004),
            total_incentives: dec!(0.005),
            employee_contribution: dec!(8000.0003),
            employer_contribution: dec!(12000.0005),
            employer_secondary_contribution: dec!(3000.0001),
            tax_amount: dec!(12.345),
        })
        .unwrap();

        assert_eq!(result.basic, dec!(100000.00));
        assert_eq!(result.total_incentives, dec!(0.01));
        assert_eq!(result.tax_amount, dec!(12.35));
    }

    #[test]
    fn totals_agree_with_rounded_components() {
        let result = PayrollResult::try_from(PayrollFigures {
            basic: dec!(123456.78),
            total_incentives: dec!(1000),
            employee_contribution: dec!(9876.5424),
            employer_contribution: dec!(14814.8136),
            employer_secondary_contribution: dec!(3703.7034),
            tax_amount: dec!(0.4449),
        })
        .unwrap();

        assert_eq!(result.gross_salary, result.basic + result.total_incentives);
        assert_eq!(
            result.net_salary,
            result.gross_salary - result.employee_contribution - result.tax_amount
        );
        assert_eq!(
            result.total_deductions,
            result.employee_contribution + result.tax_amount
        );
        assert_eq!(
            result.total_employer_contribution,
            result.employer_contribution + result.employer_secondary_contribution
        );
    }

    #[test]
    fn every_field_has_two_decimal_places() {
        let result = PayrollResult::try_from(PayrollFigures {
            basic: dec!(100000),
            total_incentives: dec!(25000),
            employee_contribution: dec!(8000),
            employer_contribution: dec!(12000),
            employer_secondary_contribution: dec!(3000),
            tax_amount: dec!(0),
        })
        .unwrap();

        let fields = [
            result.basic,
            result.total_incentives,
            result.gross_salary,
            result.employee_contribution,
            result.employer_contribution,
            result.employer_secondary_contribution,
            result.tax_amount,
            result.net_salary,
            result.total_deductions,
            result.total_employer_contribution,
        ];
        for value in fields {
            assert_eq!(value.scale(), 2, "{value} is not in cents");
        }
        assert_eq!(result.gross_salary.to_string(), "125000.00");
        assert_eq!(result.tax_amount.to_string(), "0.00");
    }

    #[test]
    fn overflowing_gross_is_rejected() {
        let result = PayrollResult::try_from(PayrollFigures {
            basic: Decimal::MAX,
            total_incentives: dec!(1),
            employee_contribution: dec!(0),
            employer_contribution: dec!(0),
            employer_secondary_contribution: dec!(0),
            tax_amount: dec!(0),
        });

        assert_eq!(
            result,
            Err(InvalidInput::AmountOutOfRange {
                field: "gross_salary"
            })
        );
    }
}
