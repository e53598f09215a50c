//! Curated surface for presentation adapters.
//!
//! The three entry points a front-end needs, plus the display helpers that
//! sit on top of the geometry. Everything else is reachable through the
//! module tree.

// Correction engine
pub use crate::correct::{correct_angles, CorrectionResult};
pub use crate::dms::{parse_angle_fields, parse_dms, Angle};
// Geometry
pub use crate::polygon::view::{fit_to_viewport, ViewCfg, Zoom};
pub use crate::polygon::{build_polygon, Bounds2, PolygonGeometry};
// Errors
pub use crate::error::{AngleError, ErrorKind, FormatIssue};
