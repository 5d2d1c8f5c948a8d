//! Rendering of calculation results as text or CSV.

use std::io::Write;

use anyhow::Result;
use rust_decimal::Decimal;
use salary_core::{CostToCompanyResult, PayrollResult, TaxBracket, TaxSchedule, round_half_up};
use serde::Serialize;

/// Width of the label column in text output.
const LABEL_WIDTH: usize = 32;

/// Formats an amount with two decimals and `,` thousands separators.
pub fn format_amount(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let fixed = format!("{:.2}", rounded.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{sign}{grouped}.{cents}")
}

/// Formats a fractional rate as a percentage, e.g. `0.06` as `6%`.
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

fn line(
    out: &mut dyn Write,
    label: &str,
    value: Decimal,
) -> Result<()> {
    writeln!(out, "{label:<LABEL_WIDTH$}{:>16}", format_amount(value))?;
    Ok(())
}

// ─── Text ────────────────────────────────────────────────────────────────────

pub fn write_payroll_text(
    out: &mut dyn Write,
    result: &PayrollResult,
) -> Result<()> {
    line(out, "Basic salary", result.basic)?;
    line(out, "Total incentives", result.total_incentives)?;
    line(out, "Gross salary", result.gross_salary)?;
    writeln!(out)?;
    line(out, "Employee contribution (EPF)", result.employee_contribution)?;
    line(out, "Income tax", result.tax_amount)?;
    line(out, "Total deductions", result.total_deductions)?;
    line(out, "Net salary", result.net_salary)?;
    writeln!(out)?;
    line(out, "Employer contribution (EPF)", result.employer_contribution)?;
    line(out, "Employer contribution (ETF)", result.employer_secondary_contribution)?;
    line(out, "Total employer contribution", result.total_employer_contribution)?;
    Ok(())
}

pub fn write_tax_text(
    out: &mut dyn Write,
    gross_income: Decimal,
    tax_amount: Decimal,
) -> Result<()> {
    line(out, "Gross income", gross_income)?;
    line(out, "Income tax", tax_amount)?;
    Ok(())
}

pub fn write_cost_to_company_text(
    out: &mut dyn Write,
    result: &CostToCompanyResult,
) -> Result<()> {
    line(out, "Cost to company", result.cost_to_company)?;
    line(out, "Contribution deduction", result.contribution_deduction)?;
    line(out, "Gross salary", result.gross_salary)?;
    line(out, "Income tax", result.tax_amount)?;
    line(out, "Net salary", result.net_salary)?;
    Ok(())
}

/// One row per bracket; an unbounded top bracket shows `and above`.
pub fn write_schedule_text(
    out: &mut dyn Write,
    schedule: &TaxSchedule,
) -> Result<()> {
    writeln!(out, "{:>16}  {:>16}  {:>6}", "From", "To", "Rate")?;
    for bracket in schedule.brackets() {
        let upper = bracket
            .upper_bound
            .map(format_amount)
            .unwrap_or_else(|| "and above".to_string());
        writeln!(
            out,
            "{:>16}  {:>16}  {:>6}",
            format_amount(bracket.lower_bound),
            upper,
            format_rate(bracket.rate)
        )?;
    }
    Ok(())
}

/// Payroll results headed by the employee identifier, separated by blank lines.
pub fn write_batch_text(
    out: &mut dyn Write,
    results: &[(String, PayrollResult)],
) -> Result<()> {
    for (i, (employee, result)) in results.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "== {employee} ==")?;
        write_payroll_text(out, result)?;
    }
    Ok(())
}

// ─── CSV ─────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct TaxRow {
    gross_income: Decimal,
    tax_amount: Decimal,
}

/// A payroll result keyed by employee, flattened for CSV.
#[derive(Serialize)]
struct PayrollRow<'a> {
    employee: &'a str,
    basic: Decimal,
    total_incentives: Decimal,
    gross_salary: Decimal,
    employee_contribution: Decimal,
    employer_contribution: Decimal,
    employer_secondary_contribution: Decimal,
    tax_amount: Decimal,
    net_salary: Decimal,
    total_deductions: Decimal,
    total_employer_contribution: Decimal,
}

impl<'a> PayrollRow<'a> {
    fn new(
        employee: &'a str,
        result: &PayrollResult,
    ) -> Self {
        Self {
            employee,
            basic: result.basic,
            total_incentives: result.total_incentives,
            gross_salary: result.gross_salary,
            employee_contribution: result.employee_contribution,
            employer_contribution: result.employer_contribution,
            employer_secondary_contribution: result.employer_secondary_contribution,
            tax_amount: result.tax_amount,
            net_salary: result.net_salary,
            total_deductions: result.total_deductions,
            total_employer_contribution: result.total_employer_contribution,
        }
    }
}

fn write_csv_rows<T: Serialize>(
    out: &mut dyn Write,
    rows: impl IntoIterator<Item = T>,
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_payroll_csv(
    out: &mut dyn Write,
    result: &PayrollResult,
) -> Result<()> {
    write_csv_rows(out, [result])
}

pub fn write_tax_csv(
    out: &mut dyn Write,
    gross_income: Decimal,
    tax_amount: Decimal,
) -> Result<()> {
    write_csv_rows(
        out,
        [TaxRow {
            gross_income,
            tax_amount,
        }],
    )
}

pub fn write_cost_to_company_csv(
    out: &mut dyn Write,
    result: &CostToCompanyResult,
) -> Result<()> {
    write_csv_rows(out, [result])
}

/// Same columns as the schedule input file, so the output can be reloaded.
pub fn write_schedule_csv(
    out: &mut dyn Write,
    schedule: &TaxSchedule,
) -> Result<()> {
    write_csv_rows(out, schedule.brackets().iter().map(TaxBracket::clone))
}

pub fn write_batch_csv(
    out: &mut dyn Write,
    results: &[(String, PayrollResult)],
) -> Result<()> {
    write_csv_rows(
        out,
        results
            .iter()
            .map(|(employee, result)| PayrollRow::new(employee, result)),
    )
}
