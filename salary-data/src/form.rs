//! Raw form text to validated calculator inputs.
//!
//! Forms hold exactly what the user typed. `parse` turns that text into
//! numeric inputs and collects every field-level problem at once; `submit`
//! also runs the calculation and reports core validation failures against
//! the field they concern.

use std::fmt;

use rust_decimal::Decimal;
use salary_core::{
    CostToCompanyInput, CostToCompanyResult, Incentive, InvalidInput, PayrollCalculator,
    PayrollInput, PayrollResult, compute_cost_to_company,
};
use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`).
/// Empty or whitespace-only input is treated as 0.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::debug!(input = %s, "invalid decimal: {}", e);
        ParseDecimalError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Problems with a single `Label=amount` incentive entry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IncentiveParseError {
    #[error("incentive label is empty")]
    EmptyLabel,

    #[error("incentive amount is missing")]
    MissingAmount,

    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),
}

/// Parses `Label=amount` (or a bare amount) into an [`Incentive`] with the
/// given id. A bare amount is labelled `Incentive <id>`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_data::parse_incentive;
///
/// let incentive = parse_incentive("Performance = 25,000", 1).unwrap();
///
/// assert_eq!(incentive.label, "Performance");
/// assert_eq!(incentive.amount, dec!(25000));
/// ```
pub fn parse_incentive(
    entry: &str,
    id: u32,
) -> Result<Incentive, IncentiveParseError> {
    let (label, raw_amount) = match entry.split_once('=') {
        Some((label, amount)) => {
            let label = label.trim();
            if label.is_empty() {
                return Err(IncentiveParseError::EmptyLabel);
            }
            (label.to_string(), amount)
        }
        None => (format!("Incentive {id}"), entry),
    };

    if raw_amount.trim().is_empty() {
        return Err(IncentiveParseError::MissingAmount);
    }
    let amount = parse_decimal(raw_amount)
        .map_err(|_| IncentiveParseError::InvalidAmount(raw_amount.trim().to_string()))?;

    Ok(Incentive::new(id, label, amount))
}

/// A message attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl From<&InvalidInput> for FieldError {
    fn from(err: &InvalidInput) -> Self {
        let field = match err {
            InvalidInput::NegativeIncentive { id, .. } => incentive_field(*id),
            other => other.field().to_string(),
        };
        Self::new(field, err.to_string())
    }
}

/// Field name used for the n-th incentive entry (1-based, matching its id).
fn incentive_field(id: u32) -> String {
    format!("incentive {id}")
}

/// Every field-level problem found in one submission.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{}", join_errors(.errors))]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl FormErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// First error reported for `field`, if any.
    pub fn for_field(
        &self,
        field: &str,
    ) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.field == field)
    }
}

impl From<Vec<FieldError>> for FormErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

impl From<InvalidInput> for FormErrors {
    fn from(err: InvalidInput) -> Self {
        Self {
            errors: vec![FieldError::from(&err)],
        }
    }
}

/// Parses a required numeric field, recording any problem in `errors`.
fn required_decimal(
    field: &str,
    raw: &str,
    errors: &mut Vec<FieldError>,
) -> Option<Decimal> {
    if raw.trim().is_empty() {
        errors.push(FieldError::new(field, "is required"));
        return None;
    }
    match parse_decimal(raw) {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(FieldError::new(
                field,
                format!("'{}' is not a valid number", raw.trim()),
            ));
            None
        }
    }
}

/// Raw text for the basic-salary-plus-incentives form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayrollForm {
    pub basic_salary: String,

    /// One `Label=amount` entry per incentive, in display order.
    pub incentives: Vec<String>,
}

impl PayrollForm {
    pub fn new(basic_salary: impl Into<String>) -> Self {
        Self {
            basic_salary: basic_salary.into(),
            incentives: Vec::new(),
        }
    }

    pub fn with_incentive(
        mut self,
        entry: impl Into<String>,
    ) -> Self {
        self.incentives.push(entry.into());
        self
    }

    /// Converts the form text into a [`PayrollInput`].
    ///
    /// Incentives receive ids `1..=n` in entry order.
    ///
    /// # Errors
    ///
    /// Returns [`FormErrors`] listing every field that could not be parsed.
    pub fn parse(&self) -> Result<PayrollInput, FormErrors> {
        let mut errors = Vec::new();

        let basic_salary = required_decimal("basic_salary", &self.basic_salary, &mut errors);

        let mut incentives = Vec::with_capacity(self.incentives.len());
        for (id, entry) in (1u32..).zip(&self.incentives) {
            match parse_incentive(entry, id) {
                Ok(incentive) => incentives.push(incentive),
                Err(e) => errors.push(FieldError::new(incentive_field(id), e.to_string())),
            }
        }

        match basic_salary {
            Some(basic_salary) if errors.is_empty() => Ok(PayrollInput {
                basic_salary,
                incentives,
            }),
            _ => Err(errors.into()),
        }
    }

    /// Parses the form and runs `calculator` on the result.
    ///
    /// # Errors
    ///
    /// Returns [`FormErrors`] for unparseable text or for input the
    /// calculator rejects.
    pub fn submit(
        &self,
        calculator: &PayrollCalculator<'_>,
    ) -> Result<PayrollResult, FormErrors> {
        let input = self.parse()?;
        Ok(calculator.calculate(&input)?)
    }
}

/// Raw text for the cost-to-company form. Percentages are whole numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostToCompanyForm {
    pub cost_to_company: String,
    pub employee_percent: String,
    pub employer_percent: String,
    pub tax_percent: String,
}

impl CostToCompanyForm {
    /// # Errors
    ///
    /// Returns [`FormErrors`] listing every missing or non-numeric field.
    pub fn parse(&self) -> Result<CostToCompanyInput, FormErrors> {
        let mut errors = Vec::new();

        let cost_to_company =
            required_decimal("cost_to_company", &self.cost_to_company, &mut errors);
        let employee_percent =
            required_decimal("employee_percent", &self.employee_percent, &mut errors);
        let employer_percent =
            required_decimal("employer_percent", &self.employer_percent, &mut errors);
        let tax_percent = required_decimal("tax_percent", &self.tax_percent, &mut errors);

        match (cost_to_company, employee_percent, employer_percent, tax_percent) {
            (Some(cost_to_company), Some(employee_percent), Some(employer_percent), Some(tax)) => {
                Ok(CostToCompanyInput {
                    cost_to_company,
                    employee_percent,
                    employer_percent,
                    tax_percent: tax,
                })
            }
            _ => Err(errors.into()),
        }
    }

    /// # Errors
    ///
    /// Returns [`FormErrors`] for unparseable text or rejected values.
    pub fn submit(&self) -> Result<CostToCompanyResult, FormErrors> {
        let input = self.parse()?;
        Ok(compute_cost_to_company(&input)?)
    }
}

/// Raw text for the single-amount tax form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxForm {
    pub gross_income: String,
}

impl TaxForm {
    pub fn new(gross_income: impl Into<String>) -> Self {
        Self {
            gross_income: gross_income.into(),
        }
    }

    /// # Errors
    ///
    /// Returns [`FormErrors`] when the gross income is blank or not a number.
    pub fn parse(&self) -> Result<Decimal, FormErrors> {
        let mut errors = Vec::new();
        match required_decimal("gross_income", &self.gross_income, &mut errors) {
            Some(gross_income) => Ok(gross_income),
            None => Err(errors.into()),
        }
    }
}
