use nalgebra::Vector2;

use crate::cfg::{MIN_SIDES, UNIT_EDGE};
use crate::dms::Angle;
use crate::error::AngleError;

/// Vertex ring plus the decimal angles it was built from.
///
/// Invariants
/// - `vertices.len() == decimal_angles.len() + 1` and
///   `vertices.first() == vertices.last()`.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonGeometry {
    pub vertices: Vec<Vector2<f64>>,
    /// Interior angles in decimal degrees, input order.
    pub decimal_angles: Vec<f64>,
    /// Where the walk ended before the ring was closed.
    traverse_end: Vector2<f64>,
}

/// Axis-aligned bounds of a vertex set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Bounds2 {
    /// `None` for an empty set.
    pub fn of(points: &[Vector2<f64>]) -> Option<Self> {
        let first = *points.first()?;
        Some(points.iter().fold(
            Bounds2 {
                min: first,
                max: first,
            },
            |b, p| Bounds2 {
                min: b.min.inf(p),
                max: b.max.sup(p),
            },
        ))
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        (self.min + self.max) * 0.5
    }
}

impl PolygonGeometry {
    /// Number of polygon vertices (the closing copy excluded).
    #[inline]
    pub fn sides(&self) -> usize {
        self.decimal_angles.len()
    }

    /// Distinct vertices, without the closing copy.
    #[inline]
    pub fn corners(&self) -> &[Vector2<f64>] {
        &self.vertices[..self.sides()]
    }

    pub fn bounds(&self) -> Bounds2 {
        // Non-empty by construction.
        Bounds2::of(&self.vertices).unwrap_or(Bounds2 {
            min: Vector2::zeros(),
            max: Vector2::zeros(),
        })
    }

    /// Gap between where the walk ended and where it started.
    ///
    /// Zero (up to float noise) only when the angles also describe closed
    /// edge lengths; with unit edges this holds for regular polygons.
    pub fn misclosure(&self) -> f64 {
        (self.traverse_end - self.vertices[0]).norm()
    }
}

/// Walk the boundary turning by `180° - angle` at each vertex.
///
/// Errors: `TooFewAngles` for fewer than three angles.
pub fn build_polygon(angles: &[Angle]) -> Result<PolygonGeometry, AngleError> {
    if angles.len() < MIN_SIDES {
        return Err(AngleError::TooFewAngles(angles.len()));
    }
    let decimal_angles: Vec<f64> = angles.iter().map(Angle::to_decimal_degrees).collect();

    let mut vertices = Vec::with_capacity(angles.len() + 1);
    let mut pos = Vector2::zeros();
    let mut heading: f64 = 0.0;
    for interior in &decimal_angles {
        vertices.push(pos);
        heading += (180.0 - interior).to_radians();
        pos += Vector2::new(heading.cos(), heading.sin()) * UNIT_EDGE;
    }
    vertices.push(vertices[0]);

    Ok(PolygonGeometry {
        vertices,
        decimal_angles,
        traverse_end: pos,
    })
}
