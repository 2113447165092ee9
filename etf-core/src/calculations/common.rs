//! Shared rounding helpers for the calculation modules.
//!
//! Rounding is a presentation concern applied exactly once, when a result
//! record is constructed; intermediate values always stay unrounded.

use rust_decimal::Decimal;

/// Rounds a currency value to cents using half-up rounding.
///
/// Values at exactly half a cent round away from zero, following standard
/// financial convention.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use etf_core::calculations::common::round_currency;
///
/// assert_eq!(round_currency(dec!(665.704)), dec!(665.70));
/// assert_eq!(round_currency(dec!(665.705)), dec!(665.71));
/// assert_eq!(round_currency(dec!(-665.705)), dec!(-665.71));
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a fraction (yield, rate, return) to basis-point precision, i.e.
/// four decimal places, using the same half-up convention as
/// [`round_currency`].
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use etf_core::calculations::common::round_fraction;
///
/// assert_eq!(round_fraction(dec!(0.023562)), dec!(0.0236));
/// assert_eq!(round_fraction(dec!(0.198962)), dec!(0.1990));
/// ```
pub fn round_fraction(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(4, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
