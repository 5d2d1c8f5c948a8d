use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Incentive;

/// Validated numeric inputs for one payroll calculation.
///
/// Values are built fresh for every request. Adding or removing an incentive
/// consumes the input and hands back a new one, so earlier requests never
/// observe later edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInput {
    pub basic_salary: Decimal,
    #[serde(default)]
    pub incentives: Vec<Incentive>,
}

impl PayrollInput {
    /// Creates an input with no incentives.
    pub fn new(basic_salary: Decimal) -> Self {
        Self {
            basic_salary,
            incentives: Vec::new(),
        }
    }

    /// Returns a copy of this input with `incentive` appended.
    pub fn with_incentive(
        mut self,
        incentive: Incentive,
    ) -> Self {
        self.incentives.push(incentive);
        self
    }

    /// Returns a copy of this input without the incentive identified by `id`.
    ///
    /// Unknown ids leave the sequence unchanged.
    pub fn without_incentive(
        mut self,
        id: u32,
    ) -> Self {
        self.incentives.retain(|incentive| incentive.id != id);
        self
    }

    /// Next identifier above every id in this input.
    ///
    /// Returns `None` once `u32::MAX` is taken.
    pub fn next_incentive_id(&self) -> Option<u32> {
        match self.incentives.iter().map(|incentive| incentive.id).max() {
            Some(id) => id.checked_add(1),
            None => Some(1),
        }
    }

    /// Sum of all incentive amounts, at full precision.
    ///
    /// Returns `None` if the sum overflows [`Decimal`].
    pub fn total_incentives(&self) -> Option<Decimal> {
        self.incentives
            .iter()
            .try_fold(Decimal::ZERO, |total, incentive| {
                total.checked_add(incentive.amount)
            })
    }
}
