//! Decimal rounding for reported measurements.
//!
//! Rounding works on the exact decimal value of the `f64`, so `0.015`
//! (stored as 0.01499999...) rounds to `0.01` at two places rather than
//! `0.02`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Magnitude from which values are reported as-is instead of rounded
const ROUNDING_LIMIT: f64 = 1e21;

/// Most decimal places a `Decimal` can carry
pub const MAX_DECIMAL_PLACES: u32 = 28;

/// Magnitude below which every supported precision rounds to zero
const ZERO_LIMIT: f64 = 1e-29;

/// Round `value` to `places` decimal places, ties away from zero.
///
/// `places` is clamped to [`MAX_DECIMAL_PLACES`]. Non-finite values and
/// values with magnitude of at least 1e21 are returned unchanged. A negative
/// value that rounds to zero yields `-0.0`.
pub fn round_to_places(value: f64, places: u32) -> f64 {
    if !value.is_finite() || value.abs() >= ROUNDING_LIMIT {
        return value;
    }

    let places = places.min(MAX_DECIMAL_PLACES);
    if value.abs() < ZERO_LIMIT {
        return signed_zero(value);
    }

    let exact = match Decimal::from_f64_retain(value) {
        Some(exact) => exact,
        None => return value,
    };
    let rounded = exact.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);

    match rounded.to_string().parse::<f64>() {
        Ok(result) if result == 0.0 => signed_zero(value),
        Ok(result) => result,
        Err(_) => value,
    }
}

fn signed_zero(value: f64) -> f64 {
    if value < 0.0 {
        -0.0
    } else {
        0.0
    }
}
