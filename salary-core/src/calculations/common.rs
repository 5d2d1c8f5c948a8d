//! Rounding and percentage helpers shared by the calculators.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value to two decimal places, half away from zero.
///
/// The result always carries a scale of 2, so whole amounts print as
/// `117000.00`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(4999.984)), dec!(4999.98));
/// assert_eq!(round_half_up(dec!(4999.985)), dec!(4999.99));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Converts a whole-number percentage (`8` for 8%) to a fraction.
pub fn percent_to_fraction(percent: Decimal) -> Decimal {
    percent / Decimal::ONE_HUNDRED
}

/// Returns `true` if `percent` lies in `0..=100`.
pub fn is_valid_percent(percent: Decimal) -> bool {
    percent >= Decimal::ZERO && percent <= Decimal::ONE_HUNDRED
}
