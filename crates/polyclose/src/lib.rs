//! Closure-error correction for measured polygon interior angles.
//!
//! Two pure components:
//! - `dms` + `correct`: degrees/minutes/seconds arithmetic and proportional
//!   redistribution of the closure error against `(n-2)·180°`.
//! - `polygon`: turtle reconstruction of the polygon outline from corrected
//!   interior angles, plus optional viewport fitting for display.
//!
//! Nothing here performs I/O or holds shared state; every call returns a
//! fresh value. Presentation layers (see the `cli` crate) parse user input
//! with [`parse_dms`] and call [`correct_angles`] and [`build_polygon`].

pub mod api;
pub mod cfg;
pub mod correct;
pub mod dms;
pub mod error;
pub mod polygon;
pub mod synth;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use correct::{correct_angles, CorrectionResult};
pub use dms::{expected_sum_degrees, from_seconds, parse_angle_fields, parse_dms, to_seconds, Angle};
pub use error::{AngleError, ErrorKind, FormatIssue};
pub use nalgebra::Vector2 as Vec2;
pub use polygon::{build_polygon, PolygonGeometry};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::correct::{correct_angles, CorrectionResult};
    pub use crate::dms::{parse_angle_fields, parse_dms, Angle};
    pub use crate::error::{AngleError, ErrorKind, FormatIssue};
    pub use crate::polygon::view::{fit_to_viewport, ViewCfg, Zoom};
    pub use crate::polygon::{build_polygon, Bounds2, PolygonGeometry};
    pub use nalgebra::Vector2 as Vec2;
}
