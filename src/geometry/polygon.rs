use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;

/// A closed polygon stored as a cyclic sequence of vertices.
///
/// The last vertex connects back to the first; the closing vertex is not
/// repeated. Index arithmetic is modulo [`Polygon2::len`].
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon2 {
    pub points: Vec<Point2>,
}

impl Polygon2 {
    /// Creates a polygon from its vertices.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns vertex `i` with cyclic wrap-around.
    ///
    /// # Panics
    ///
    /// Panics if the polygon is empty.
    #[must_use]
    pub fn vertex(&self, i: usize) -> Point2 {
        self.points[i % self.points.len()]
    }

    /// Signed area: positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    /// Unsigned enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Returns `true` if the vertices wind counter-clockwise.
    #[must_use]
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Returns a new polygon with the vertex order reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Consumes the polygon, returning its vertices.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }
}

impl From<Vec<Point2>> for Polygon2 {
    fn from(points: Vec<Point2>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Polygon2 {
        Polygon2::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ])
    }

    #[test]
    fn ccw_square_area() {
        let sq = square();
        assert!(sq.is_ccw());
        assert_relative_eq!(sq.area(), 4.0);
    }

    #[test]
    fn reversed_flips_winding() {
        let rev = square().reversed();
        assert!(!rev.is_ccw());
        assert_relative_eq!(rev.signed_area(), -4.0);
        assert_eq!(rev.points[0], Point2::new(0.0, 2.0));
    }

    #[test]
    fn vertex_wraps() {
        let sq = square();
        assert_eq!(sq.vertex(4), sq.points[0]);
        assert_eq!(sq.vertex(7), sq.points[3]);
    }
}
