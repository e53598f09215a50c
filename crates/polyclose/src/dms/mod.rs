//! Degrees/minutes/seconds arithmetic.
//!
//! - `Angle`: one DMS triple, exact in integer arc-seconds.
//! - `parse_dms` / `parse_angle_fields`: text input (`D:M:S` or `D M S`).
//! - `to_seconds` / `from_seconds`: conversion to and from arc-seconds. The
//!   only rounding in the whole pipeline happens in `from_seconds`.
//!
//! Arc-second totals are `i128`: any `i64` degree count times 3600 fits, and
//! so do sums over any realistic number of sides.

mod parse;
mod types;

pub use parse::{parse_angle_fields, parse_dms};
pub use types::Angle;

use crate::cfg::{DEGREES_PER_TRIANGLE, SECONDS_PER_DEGREE, SECONDS_PER_MINUTE};

const DEG: i128 = SECONDS_PER_DEGREE as i128;
const MIN: i128 = SECONDS_PER_MINUTE as i128;

/// `d·3600 + m·60 + s`. Exact and order-preserving.
#[inline]
pub fn to_seconds(angle: Angle) -> i128 {
    i128::from(angle.degrees()) * DEG + i128::from(angle.minutes()) * MIN + i128::from(angle.seconds())
}

/// Round `total` to the nearest integer (ties to even), then decompose.
///
/// Division is floor-based, so negative totals decompose into a negative
/// degree count with minutes and seconds still in `[0, 60)`:
/// `-1″ ↦ (-1, 59, 59)`.
pub fn from_seconds(total: f64) -> Angle {
    from_whole_seconds(total.round_ties_even() as i128)
}

/// Integer counterpart of [`from_seconds`]; no rounding involved.
///
/// Degree counts outside `i64` saturate. Corrected angles and their sums never
/// get there: a correction only shrinks an angle or grows it toward the
/// required sum.
pub fn from_whole_seconds(total: i128) -> Angle {
    let degrees = total.div_euclid(DEG);
    let rest = total.rem_euclid(DEG);
    let degrees = i64::try_from(degrees).unwrap_or(if degrees < 0 { i64::MIN } else { i64::MAX });
    // Both fit: rest is in [0, 3600).
    Angle::from_parts_unchecked(degrees, (rest / MIN) as i64, (rest % MIN) as i64)
}

/// Interior-angle sum of a simple polygon, in degrees: `(sides-2)·180`.
///
/// Pre: `sides >= 3` (checked by callers).
#[inline]
pub fn expected_sum_degrees(sides: usize) -> i64 {
    (sides as i64 - 2) * DEGREES_PER_TRIANGLE
}

/// [`expected_sum_degrees`] in arc-seconds.
#[inline]
pub fn expected_sum_seconds(sides: usize) -> i128 {
    i128::from(expected_sum_degrees(sides)) * DEG
}

#[cfg(test)]
mod tests;
