//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no shared state.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::models::Season;

/// Decimal places kept on a predicted price
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use seasonal_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Apply the season's multiplier to a base price.
///
/// Result is rounded to [`PRICE_DECIMAL_PLACES`]. Rounding is exact decimal
/// rounding of the true product, so `0.015` rounds to `0.02`. Returns `None`
/// when the product does not fit in a `Decimal`.
pub fn apply_multiplier(base_price: Decimal, season: Season) -> Option<Decimal> {
    base_price
        .checked_mul(season.multiplier())
        .map(|price| round_money(price, PRICE_DECIMAL_PLACES))
}
