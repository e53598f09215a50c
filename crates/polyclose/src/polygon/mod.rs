//! Polygon outline from corrected interior angles.
//!
//! Purpose
//! - Rebuild a drawable vertex ring by walking the boundary: at every vertex
//!   the heading turns by the exterior angle `180° - interior`.
//! - Expose raw, unscaled vertices plus the decimal angles; fitting them to a
//!   screen is the caller's business (`view` offers the reference policy).
//!
//! Conventions
//! - Start at the origin with heading 0 (+x), unit edges, y pointing up.
//! - The ring is closed: the last vertex is a copy of the first.

mod build;
pub mod view;

pub use build::{build_polygon, Bounds2, PolygonGeometry};

#[cfg(test)]
mod tests;
