//! Display helpers: fit a `PolygonGeometry` into a square viewport.
//!
//! Policy (reference canvas)
//! - scale = `min(size/width, size/height) · margin · zoom`
//! - the bounding-box centre lands on the viewport centre
//! - screen y points down
//!
//! Zoom is caller-owned state; nothing here remembers it between calls.

use nalgebra::Vector2;

use super::PolygonGeometry;
use crate::cfg::{DEFAULT_MARGIN, DEFAULT_VIEW_SIZE, EXTENT_EPS, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};

/// Clamped zoom factor, `1.0` by default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zoom(f64);

impl Default for Zoom {
    fn default() -> Self {
        Zoom(1.0)
    }
}

impl Zoom {
    /// Clamp an arbitrary factor into `[ZOOM_MIN, ZOOM_MAX]`.
    pub fn new(level: f64) -> Self {
        if level.is_nan() {
            return Zoom::default();
        }
        Zoom(level.clamp(ZOOM_MIN, ZOOM_MAX))
    }
    #[inline]
    pub fn level(self) -> f64 {
        self.0
    }
    #[must_use]
    pub fn zoom_in(self) -> Self {
        Zoom((self.0 * ZOOM_STEP).min(ZOOM_MAX))
    }
    #[must_use]
    pub fn zoom_out(self) -> Self {
        Zoom((self.0 / ZOOM_STEP).max(ZOOM_MIN))
    }
}

/// Viewport parameters.
#[derive(Clone, Copy, Debug)]
pub struct ViewCfg {
    /// Side of the square viewport.
    pub size: f64,
    /// Fraction of the viewport filled at zoom 1.
    pub margin: f64,
    pub zoom: Zoom,
}

impl Default for ViewCfg {
    fn default() -> Self {
        Self {
            size: DEFAULT_VIEW_SIZE,
            margin: DEFAULT_MARGIN,
            zoom: Zoom::default(),
        }
    }
}

impl ViewCfg {
    /// Scale factor for `geom`, or `None` if it has no extent at all.
    pub fn scale_for(&self, geom: &PolygonGeometry) -> Option<f64> {
        let b = geom.bounds();
        let fit = [b.width(), b.height()]
            .into_iter()
            .filter(|e| *e > EXTENT_EPS)
            .map(|e| self.size / e)
            .fold(None, |acc: Option<f64>, s| Some(acc.map_or(s, |a| a.min(s))))?;
        Some(fit * self.margin * self.zoom.level())
    }
}

/// Map the vertex ring into viewport coordinates (closing vertex included).
pub fn fit_to_viewport(geom: &PolygonGeometry, cfg: ViewCfg) -> Option<Vec<Vector2<f64>>> {
    let scale = cfg.scale_for(geom)?;
    let c = geom.bounds().center();
    let half = cfg.size * 0.5;
    Some(
        geom.vertices
            .iter()
            .map(|v| Vector2::new((v.x - c.x) * scale + half, half - (v.y - c.y) * scale))
            .collect(),
    )
}
