// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Two-decimal rendering of sensor readings.
//!
//! The exact binary value of the `f64` is rounded to the nearest hundredth. Exact ties round
//! away from zero, the way JavaScript's `toFixed(2)` renders them. Two consequences are easy
//! to trip over:
//!
//! - `1.005` renders as `"1.00"` because the stored double is slightly below the tie.
//! - `0.125` is an exact tie and renders as `"0.13"`, while `{:.2}` alone would give `"0.12"`.
//!
//! A result that would read `-0.00` is shown as `"0.00"`. NaN and infinities are rejected.

use crate::error::MalformedReason;

/// Digits after the decimal point.
pub const DECIMALS: usize = 2;

/// Formats a reading with exactly [`DECIMALS`] fractional digits.
///
/// # Errors
///
/// Returns [`MalformedReason::NonFinite`] for NaN and infinities.
///
/// # Examples
///
/// ```
/// use sensor_display_core::format_reading;
///
/// assert_eq!(format_reading(3.0).unwrap(), "3.00");
/// assert_eq!(format_reading(-2.1).unwrap(), "-2.10");
/// assert_eq!(format_reading(0.125).unwrap(), "0.13");
/// assert_eq!(format_reading(-0.001).unwrap(), "0.00");
/// assert!(format_reading(f64::NAN).is_err());
/// ```
pub fn format_reading(value: f64) -> Result<String, MalformedReason> {
    if !value.is_finite() {
        return Err(MalformedReason::NonFinite { value });
    }

    if let Some(hundredths) = tie_away_from_zero(value) {
        return Ok(render_hundredths(hundredths));
    }

    let text = format!("{value:.prec$}", prec = DECIMALS);

    match text.strip_prefix('-') {
        Some(unsigned) if is_zero(unsigned) => Ok(unsigned.to_owned()),
        _ => Ok(text),
    }
}

/// Hundredths of `value` rounded away from zero, if `value` sits exactly halfway between two
/// hundredths.
///
/// A double is a dyadic rational, so `(2k + 1) / 200` is representable only when 25 divides
/// `2k + 1`: the ties are exactly the odd multiples of `1/8`.
fn tie_away_from_zero(value: f64) -> Option<i64> {
    // Scaling by a power of two is exact
    let eighths = value * 8.0;

    // Every double at or above 2^53 is an even integer
    if eighths.fract() != 0.0 || eighths % 2.0 == 0.0 {
        return None;
    }

    #[allow(clippy::cast_possible_truncation)]
    let eighths = eighths as i64;
    Some((25 * eighths + eighths.signum()) / 2)
}

fn render_hundredths(hundredths: i64) -> String {
    let sign = if hundredths < 0 { "-" } else { "" };
    let magnitude = hundredths.unsigned_abs();
    format!("{sign}{}.{:02}", magnitude / 100, magnitude % 100)
}

fn is_zero(digits: &str) -> bool {
    digits.bytes().all(|b| b == b'0' || b == b'.')
}
