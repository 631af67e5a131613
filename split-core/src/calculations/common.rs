//! Rounding helpers shared by the calculator and the currency formatter.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use split_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(29.994)), dec!(29.99));
/// assert_eq!(round_half_up(dec!(29.995)), dec!(30.00));
/// assert_eq!(round_half_up(dec!(-4.125)), dec!(-4.13)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    round_half_up_dp(value, 2)
}

/// Rounds `value` to `dp` decimal places, half away from zero.
///
/// Used for currencies whose minor unit is not the cent (e.g. JPY has none).
pub fn round_half_up_dp(
    value: Decimal,
    dp: u32,
) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
