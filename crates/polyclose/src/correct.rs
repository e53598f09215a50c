//! Proportional closure-error correction.
//!
//! Model
//! - Sum the measured angles in arc-seconds and compare against
//!   `(n-2)·180°`. The signed difference is the closure error.
//! - Each angle absorbs `-(error · angle / total)`: larger angles take a
//!   larger share, so the relative shape is kept.
//! - Corrections are real-valued; rounding happens once, when the corrected
//!   seconds are decomposed back into DMS. The rounded set may therefore miss
//!   the required sum by a few seconds (`CorrectionResult::residual_seconds`).

use crate::cfg::MIN_SIDES;
use crate::dms::{expected_sum_seconds, from_seconds, from_whole_seconds, to_seconds, Angle};
use crate::error::AngleError;

/// Output of [`correct_angles`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorrectionResult {
    /// Same length and order as the input.
    pub corrected: Vec<Angle>,
    /// Measured sum minus required sum, in arc-seconds, before correction.
    pub error_seconds: i128,
}

impl CorrectionResult {
    #[inline]
    pub fn sides(&self) -> usize {
        self.corrected.len()
    }

    /// Required interior-angle sum in arc-seconds.
    #[inline]
    pub fn expected_seconds(&self) -> i128 {
        expected_sum_seconds(self.sides())
    }

    pub fn corrected_sum_seconds(&self) -> i128 {
        self.corrected.iter().copied().map(to_seconds).sum()
    }

    /// Corrected sum as DMS, e.g. `540°0'0"`.
    pub fn corrected_sum(&self) -> Angle {
        from_whole_seconds(self.corrected_sum_seconds())
    }

    /// What rounding left over: corrected sum minus required sum.
    pub fn residual_seconds(&self) -> i128 {
        self.corrected_sum_seconds() - self.expected_seconds()
    }

    /// True when the corrected set closes exactly.
    pub fn is_exact(&self) -> bool {
        self.residual_seconds() == 0
    }

    /// Per-angle change applied, in whole arc-seconds (`corrected - measured`).
    ///
    /// Returns `None` if `measured` does not line up with `corrected`.
    pub fn adjustments(&self, measured: &[Angle]) -> Option<Vec<i128>> {
        if measured.len() != self.corrected.len() {
            return None;
        }
        Some(
            measured
                .iter()
                .zip(&self.corrected)
                .map(|(m, c)| to_seconds(*c) - to_seconds(*m))
                .collect(),
        )
    }
}

/// Distribute the closure error of `angles` proportionally.
///
/// Errors
/// - `TooFewAngles` if `sides < 3`; `SideCountMismatch` if `angles.len() != sides`.
/// - `OutOfRange` (1-based index) for an angle outside the DMS ranges.
/// - `Degenerate` when every angle is zero yet the sum misses the target.
///
/// With a zero closure error the input comes back unchanged.
pub fn correct_angles(angles: &[Angle], sides: usize) -> Result<CorrectionResult, AngleError> {
    if sides < MIN_SIDES {
        return Err(AngleError::TooFewAngles(sides));
    }
    if angles.len() != sides {
        return Err(AngleError::SideCountMismatch {
            sides,
            angles: angles.len(),
        });
    }
    if let Some((i, a)) = angles.iter().enumerate().find(|(_, a)| !a.is_well_formed()) {
        return Err(AngleError::OutOfRange {
            index: i + 1,
            angle: *a,
        });
    }

    let measured: Vec<i128> = angles.iter().copied().map(to_seconds).collect();
    let total: i128 = measured.iter().sum();
    let expected = expected_sum_seconds(sides);
    let error_seconds = total - expected;

    if error_seconds == 0 {
        return Ok(CorrectionResult {
            corrected: angles.to_vec(),
            error_seconds,
        });
    }
    if total == 0 {
        return Err(AngleError::Degenerate { error_seconds });
    }

    let err = error_seconds as f64;
    let weight = total as f64;
    let corrected = measured
        .iter()
        .map(|&s| {
            let s = s as f64;
            let correction = -(err * s / weight);
            from_seconds(s + correction)
        })
        .collect();
    Ok(CorrectionResult {
        corrected,
        error_seconds,
    })
}
