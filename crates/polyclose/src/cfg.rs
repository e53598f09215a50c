//! Fixed constants shared by the engine and the display helpers.
//!
//! Policy
//! - Unit conversions are exact integers; only display defaults are floats.
//! - Display defaults mirror the reference canvas (350 px square, 80% fill).

/// Arc-seconds in one degree.
pub const SECONDS_PER_DEGREE: i64 = 3600;
/// Arc-seconds in one minute.
pub const SECONDS_PER_MINUTE: i64 = 60;
/// Degrees contributed by each side beyond the second: `(n-2)·180`.
pub const DEGREES_PER_TRIANGLE: i64 = 180;
/// Smallest polygon the engine accepts.
pub const MIN_SIDES: usize = 3;

/// Edge length used by the turtle walk; callers rescale afterwards.
pub const UNIT_EDGE: f64 = 1.0;
/// Extents at or below this are treated as zero when fitting a viewport.
pub(crate) const EXTENT_EPS: f64 = 1e-12;

/// Default square viewport side (display units).
pub const DEFAULT_VIEW_SIZE: f64 = 350.0;
/// Fraction of the viewport the polygon fills at zoom 1.
pub const DEFAULT_MARGIN: f64 = 0.8;
/// Multiplicative zoom step.
pub const ZOOM_STEP: f64 = 1.2;
/// Zoom clamp range.
pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 2.0;
