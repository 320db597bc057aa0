use super::kernel_2d::cross2;
use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Rotates a closed polygon so it starts at the leftmost vertex (smallest x),
/// breaking ties by smallest y. Ensures deterministic output for tests.
#[must_use]
pub fn rotate_to_canonical_start(points: &[Point2]) -> Vec<Point2> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if pt.x < b.x - TOLERANCE || (pt.x - b.x).abs() < TOLERANCE && pt.y < b.y {
            best = i;
        }
    }
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if the two points coincide.
pub fn segment_direction(a: &Point2, b: &Point2) -> Result<Vector2> {
    let d = b - a;
    let len = d.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(d / len)
}

/// Removes vertices that do not contribute to the polygon outline.
///
/// A vertex is dropped when it lies within `tolerance` of its predecessor,
/// or when its two incident edges are parallel (`|sin θ| <= tolerance`),
/// which covers both straight 180° vertices and zero-width spikes. Removal
/// repeats until no such vertex remains or fewer than 3 vertices are left.
#[must_use]
pub fn remove_degenerate_vertices(points: &[Point2], tolerance: f64) -> Vec<Point2> {
    let mut pts = points.to_vec();
    while pts.len() >= 3 {
        match find_degenerate_vertex(&pts, tolerance) {
            Some(i) => {
                pts.remove(i);
            }
            None => break,
        }
    }
    pts
}

fn find_degenerate_vertex(points: &[Point2], tolerance: f64) -> Option<usize> {
    let n = points.len();
    (0..n).find(|&i| {
        let prev = &points[(i + n - 1) % n];
        let cur = &points[i];
        let next = &points[(i + 1) % n];
        if (cur - prev).norm() <= tolerance {
            return true;
        }
        match (segment_direction(cur, prev), segment_direction(cur, next)) {
            (Ok(to_prev), Ok(to_next)) => cross2(&to_prev, &to_next).abs() <= tolerance,
            _ => true,
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn unit_square() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]
    }

    #[test]
    fn signed_area_ccw_square() {
        let area = signed_area_2d(&unit_square());
        assert!((area - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = unit_square();
        pts.reverse();
        let area = signed_area_2d(&pts);
        assert!((area + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[p(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area_2d(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn canonical_start_rotation() {
        let pts = vec![p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(0.0, 0.0)];
        let rotated = rotate_to_canonical_start(&pts);
        assert!(rotated[0].x.abs() < TOLERANCE);
        assert!(rotated[0].y.abs() < TOLERANCE);
        assert!((rotated[1].x - 1.0).abs() < TOLERANCE);
        assert_eq!(rotated.len(), 4);
    }

    #[test]
    fn segment_direction_basic() {
        let dir = segment_direction(&p(0.0, 0.0), &p(3.0, 4.0)).unwrap();
        assert!((dir.x - 0.6).abs() < TOLERANCE);
        assert!((dir.y - 0.8).abs() < TOLERANCE);
    }

    #[test]
    fn segment_direction_zero_length() {
        assert!(segment_direction(&p(1.0, 1.0), &p(1.0, 1.0)).is_err());
    }

    #[test]
    fn clean_polygon_is_untouched() {
        let pts = unit_square();
        assert_eq!(remove_degenerate_vertices(&pts, 1e-9), pts);
    }

    #[test]
    fn removes_duplicate_vertex() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        assert_eq!(remove_degenerate_vertices(&pts, 1e-9).len(), 4);
    }

    #[test]
    fn removes_straight_vertex() {
        let pts = vec![p(0.0, 0.0), p(0.5, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        let cleaned = remove_degenerate_vertices(&pts, 1e-9);
        assert_eq!(cleaned.len(), 4);
        assert!(!cleaned.contains(&p(0.5, 0.0)));
    }

    #[test]
    fn removes_spike_and_resulting_duplicates() {
        // Unit square with a zero-width spike out to (3, 0.5) on its right edge.
        let pts = vec![
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(1.0, 0.5),
            p(3.0, 0.5),
            p(1.0, 0.5),
            p(1.0, 1.0),
            p(0.0, 1.0),
        ];
        let cleaned = remove_degenerate_vertices(&pts, 1e-9);
        assert_eq!(cleaned.len(), 4);
        assert!((signed_area_2d(&cleaned) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn collapsed_polygon_shrinks_below_three() {
        let pts = vec![p(2.0, 2.0); 5];
        assert!(remove_degenerate_vertices(&pts, 1e-9).len() < 3);
    }
}
