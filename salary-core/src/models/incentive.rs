use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An extra payment on top of basic salary (bonus, allowance, commission).
///
/// `id` is assigned by the caller and must be unique within one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incentive {
    pub id: u32,
    pub label: String,
    pub amount: Decimal,
}

impl Incentive {
    pub fn new(
        id: u32,
        label: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            amount,
        }
    }
}
