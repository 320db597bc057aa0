use std::iter;

use super::collision::CollisionEvent;
use crate::math::Point2;

/// Cyclic index run from `vertex` forward, up to and including `left`.
#[must_use]
pub fn split_left(vertex: usize, left: usize, n: usize) -> Vec<usize> {
    (0..n)
        .map(|o| (vertex + o) % n)
        .take_while(|&i| i != left)
        .chain(iter::once(left))
        .collect()
}

/// Cyclic index run from `right` forward, up to and including `vertex`.
#[must_use]
pub fn split_right(vertex: usize, right: usize, n: usize) -> Vec<usize> {
    (0..n)
        .map(|o| (right + o) % n)
        .take_while(|&i| i != vertex)
        .chain(iter::once(vertex))
        .collect()
}

/// Splits `points` (already advanced to the event time) into the two
/// polygons on either side of the collision.
///
/// Both halves contain the colliding vertex.
#[must_use]
pub fn split_at(points: &[Point2], event: &CollisionEvent) -> (Vec<Point2>, Vec<Point2>) {
    let n = points.len();
    let left = split_left(event.vertex, event.left, n)
        .into_iter()
        .map(|i| points[i])
        .collect();
    let right = split_right(event.vertex, event.right, n)
        .into_iter()
        .map(|i| points[i])
        .collect();
    (left, right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_without_wrap() {
        assert_eq!(split_left(2, 8, 12), vec![2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(split_right(2, 9, 12), vec![9, 10, 11, 0, 1, 2]);
    }

    #[test]
    fn runs_with_wrap() {
        assert_eq!(split_left(5, 1, 6), vec![5, 0, 1]);
        assert_eq!(split_right(5, 2, 6), vec![2, 3, 4, 5]);
    }

    #[test]
    fn halves_cover_every_index_once_plus_pivot() {
        let n = 9;
        for vertex in 0..n {
            for left in 0..n {
                let right = (left + 1) % n;
                if left == (vertex + n - 1) % n || right == (vertex + 1) % n {
                    continue;
                }
                let l = split_left(vertex, left, n);
                let r = split_right(vertex, right, n);
                assert_eq!(l.len() + r.len(), n + 1);
                assert!(l.len() < n && r.len() < n);
                let mut all: Vec<_> = l.iter().chain(&r).copied().collect();
                all.sort_unstable();
                all.dedup();
                assert_eq!(all.len(), n);
            }
        }
    }

    #[test]
    fn split_points_share_pivot() {
        let pts: Vec<Point2> = (0..6_i32)
            .map(|i| Point2::new(f64::from(i), f64::from(i * i)))
            .collect();
        let event = CollisionEvent {
            vertex: 1,
            left: 3,
            right: 4,
            time: 0.0,
            position: pts[1],
        };
        let (left, right) = split_at(&pts, &event);
        assert_eq!(left, vec![pts[1], pts[2], pts[3]]);
        assert_eq!(right, vec![pts[4], pts[5], pts[0], pts[1]]);
    }
}
