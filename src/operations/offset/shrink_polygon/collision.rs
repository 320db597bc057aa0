use std::cmp::Ordering;

use super::velocity::VelocityField;
use crate::math::kernel_2d::{cross2, solve_quadratic};
use crate::math::{Point2, Vector2, TOLERANCE};

/// A topology change: vertex `vertex` meets edge `(left, right)` at `time`.
///
/// `right` is always `left + 1` (cyclic). Edge collapses are reported in the
/// same form: when edge `(i-1, i)` shrinks to nothing, vertex `i` meets
/// edge `(i-2, i-1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    pub vertex: usize,
    pub left: usize,
    pub right: usize,
    pub time: f64,
    /// Position of `vertex` at `time`.
    pub position: Point2,
}

impl CollisionEvent {
    /// Total order used to pick a winner among simultaneous events:
    /// time first, then the index triple.
    #[must_use]
    pub fn priority_cmp(&self, other: &Self) -> Ordering {
        self.time
            .total_cmp(&other.time)
            .then(self.vertex.cmp(&other.vertex))
            .then(self.left.cmp(&other.left))
            .then(self.right.cmp(&other.right))
    }
}

/// Vertex/edge triples `(i, j, j+1)` that can collide, in lexicographic order.
///
/// Excludes `j = i-1` and `j+1 = i+1`, i.e. the two edges incident to `i`.
pub fn candidate_triples(n: usize) -> impl Iterator<Item = (usize, usize, usize)> {
    (0..n).flat_map(move |i| {
        (0..n).filter_map(move |j| {
            let k = (j + 1) % n;
            (j != (i + n - 1) % n && k != (i + 1) % n).then_some((i, j, k))
        })
    })
}

/// Offsets at which a point moving relative to the origin meets a segment.
///
/// The segment endpoints sit at `a0 + va·t` and `b0 + vb·t`, relative to the
/// moving vertex. Returns every root `t > -epsilon` of
/// `cross2(a(t), b(t)) = 0` where the endpoints lie on opposite sides of the
/// origin (`dot(a(t), b(t)) < epsilon`).
#[must_use]
pub fn collinear_times(
    a0: &Vector2,
    b0: &Vector2,
    va: &Vector2,
    vb: &Vector2,
    epsilon: f64,
) -> Vec<f64> {
    let ca = cross2(va, vb);
    let cb = cross2(a0, vb) - cross2(b0, va);
    let cc = cross2(a0, b0);
    solve_quadratic(ca, cb, cc)
        .into_iter()
        .filter(|&t| t > -epsilon && (a0 + va * t).dot(&(b0 + vb * t)) < epsilon)
        .collect()
}

/// Offset at which edge `(i-1, i)` shrinks to zero length, if it ever does.
#[must_use]
pub fn edge_collapse_time(points: &[Point2], field: &VelocityField, i: usize) -> Option<f64> {
    let n = points.len();
    let prev = (i + n - 1) % n;
    let edge = points[i] - points[prev];
    let len = edge.norm();
    if len < TOLERANCE {
        return Some(0.0);
    }
    let dir = edge / len;
    // Closing speed of the two endpoints along the edge.
    let rate = dir.dot(&field.velocity(prev)) - dir.dot(&field.velocity(i));
    (rate > TOLERANCE).then(|| len / rate)
}

/// Collects every collision event of the polygon under `field`.
///
/// Vertex/edge collinearities come first in triple order, followed by edge
/// collapses in vertex order. An empty result means no topology change ever
/// happens.
#[must_use]
pub fn find_events(
    points: &[Point2],
    field: &VelocityField,
    epsilon: f64,
) -> Vec<CollisionEvent> {
    let n = points.len();
    let mut events = Vec::new();

    for (i, j, k) in candidate_triples(n) {
        let vi = field.velocity(i);
        let times = collinear_times(
            &(points[j] - points[i]),
            &(points[k] - points[i]),
            &(field.velocity(j) - vi),
            &(field.velocity(k) - vi),
            epsilon,
        );
        events.extend(times.into_iter().map(|time| CollisionEvent {
            vertex: i,
            left: j,
            right: k,
            time,
            position: field.position_at(points, i, time),
        }));
    }

    for i in 0..n {
        let Some(time) = edge_collapse_time(points, field, i) else {
            continue;
        };
        if time <= -epsilon {
            continue;
        }
        events.push(CollisionEvent {
            vertex: i,
            left: (i + n - 2) % n,
            right: (i + n - 1) % n,
            time,
            position: field.position_at(points, i, time),
        });
    }

    events
}

/// The event that happens first, ties broken by [`CollisionEvent::priority_cmp`].
#[must_use]
pub fn earliest(events: &[CollisionEvent]) -> Option<&CollisionEvent> {
    events.iter().min_by(|a, b| a.priority_cmp(b))
}
