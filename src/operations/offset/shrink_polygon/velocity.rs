use crate::error::{GeometryError, Result};
use crate::math::kernel_2d::cross2;
use crate::math::polygon_2d::segment_direction;
use crate::math::{Point2, Vector2, TOLERANCE};

/// Per-vertex displacement for one unit of inward offset.
///
/// Moving vertex `i` to `p[i] + v[i] * t` pushes both incident edges inward
/// by `t`, as long as no topology change happens before `t`.
#[derive(Debug, Clone)]
pub struct VelocityField {
    velocities: Vec<Vector2>,
}

impl VelocityField {
    /// Builds the field for a counter-clockwise polygon.
    ///
    /// For vertex `i` with unit directions `vl` (to the predecessor) and `vr`
    /// (to the successor), the velocity is `(vl + vr) / cross2(vr, vl)`: the
    /// angle bisector scaled by `1 / sin(θ/2)`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if two consecutive vertices
    /// coincide, and `GeometryError::Degenerate` for fewer than 3 vertices or
    /// a vertex whose incident edges are parallel.
    pub fn build(points: &[Point2]) -> Result<Self> {
        let n = points.len();
        if n < 3 {
            return Err(GeometryError::Degenerate(format!(
                "velocity field needs at least 3 vertices, got {n}"
            ))
            .into());
        }

        let mut velocities = Vec::with_capacity(n);
        for i in 0..n {
            let cur = &points[i];
            let vl = segment_direction(cur, &points[(i + n - 1) % n])?;
            let vr = segment_direction(cur, &points[(i + 1) % n])?;
            let factor = cross2(&vr, &vl);
            if factor.abs() < TOLERANCE {
                return Err(GeometryError::Degenerate(format!(
                    "vertex {i} at ({}, {}) has parallel incident edges",
                    cur.x, cur.y
                ))
                .into());
            }
            velocities.push((vl + vr) / factor);
        }

        Ok(Self { velocities })
    }

    /// Number of vertices covered by the field.
    #[must_use]
    pub fn len(&self) -> usize {
        self.velocities.len()
    }

    /// Returns `true` if the field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.velocities.is_empty()
    }

    /// Velocity of vertex `i`.
    #[must_use]
    pub fn velocity(&self, i: usize) -> Vector2 {
        self.velocities[i]
    }

    /// Position of vertex `i` after offsetting by `t`.
    #[must_use]
    pub fn position_at(&self, points: &[Point2], i: usize, t: f64) -> Point2 {
        points[i] + self.velocities[i] * t
    }

    /// Every vertex moved by its velocity times `t`.
    #[must_use]
    pub fn advance(&self, points: &[Point2], t: f64) -> Vec<Point2> {
        points
            .iter()
            .zip(&self.velocities)
            .map(|(p, v)| p + v * t)
            .collect()
    }
}
