use tracing::{debug, trace};

use super::collision::{earliest, find_events};
use super::options::ShrinkOptions;
use super::split::split_at;
use super::velocity::VelocityField;
use crate::geometry::Polygon2;
use crate::math::polygon_2d::{remove_degenerate_vertices, signed_area_2d};
use crate::math::Point2;

/// Counters describing how the shrink unfolded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShrinkStats {
    /// Collision events that split a polygon.
    pub splits: usize,
    /// Branches dropped for exceeding the depth bound.
    pub truncated: usize,
    /// Branches that eroded away (too few vertices, no enclosed area, an
    /// inverted triangle, or a degenerate velocity field).
    pub vanished: usize,
}

/// A polygon snapshot still waiting to be shrunk by `remaining`.
#[derive(Debug)]
struct ShrinkTask {
    points: Vec<Point2>,
    remaining: f64,
    depth: usize,
}

enum Step {
    Emit(Polygon2),
    Split(ShrinkTask, ShrinkTask),
    Vanish,
    Truncate,
}

/// Shrinks a counter-clockwise polygon by `offset`.
///
/// Tasks are processed depth-first with the left half of every split before
/// the right half, so output order matches a recursive left-then-right walk.
pub(super) fn run(
    points: Vec<Point2>,
    offset: f64,
    options: &ShrinkOptions,
) -> (Vec<Polygon2>, ShrinkStats) {
    let mut stats = ShrinkStats::default();
    let mut output = Vec::new();
    let mut pending = vec![ShrinkTask {
        points,
        remaining: offset,
        depth: 0,
    }];

    while let Some(task) = pending.pop() {
        match step(task, options) {
            Step::Emit(polygon) => output.push(polygon),
            Step::Split(left, right) => {
                stats.splits += 1;
                pending.push(right);
                pending.push(left);
            }
            Step::Vanish => stats.vanished += 1,
            Step::Truncate => stats.truncated += 1,
        }
    }

    (output, stats)
}

fn step(task: ShrinkTask, options: &ShrinkOptions) -> Step {
    if task.depth > options.max_depth {
        debug!(
            depth = task.depth,
            vertices = task.points.len(),
            "depth bound exceeded, dropping branch"
        );
        return Step::Truncate;
    }

    let points = remove_degenerate_vertices(&task.points, options.weld_tolerance);
    if points.len() < 3 {
        trace!(depth = task.depth, "branch collapsed below 3 vertices");
        return Step::Vanish;
    }
    // A split half that winds the wrong way is a sliver left by a
    // near-simultaneous collapse; it encloses nothing.
    if signed_area_2d(&points) <= 0.0 {
        trace!(depth = task.depth, "branch has no positive area");
        return Step::Vanish;
    }

    let field = match VelocityField::build(&points) {
        Ok(field) => field,
        Err(err) => {
            debug!(depth = task.depth, %err, "degenerate velocity field, dropping branch");
            return Step::Vanish;
        }
    };

    if points.len() == 3 {
        return shrink_triangle(&points, &field, task.remaining);
    }

    let events = find_events(&points, &field, options.epsilon);
    trace!(
        depth = task.depth,
        vertices = points.len(),
        events = events.len(),
        remaining = task.remaining,
        "collision events found"
    );

    match earliest(&events) {
        Some(event) if event.time <= task.remaining => {
            trace!(
                vertex = event.vertex,
                left = event.left,
                right = event.right,
                time = event.time,
                "splitting at collision"
            );
            let advanced = field.advance(&points, event.time);
            let (left, right) = split_at(&advanced, event);
            let remaining = task.remaining - event.time;
            let depth = task.depth + 1;
            Step::Split(
                ShrinkTask {
                    points: left,
                    remaining,
                    depth,
                },
                ShrinkTask {
                    points: right,
                    remaining,
                    depth,
                },
            )
        }
        _ => Step::Emit(Polygon2::new(field.advance(&points, task.remaining))),
    }
}

/// A triangle has no topology change other than collapsing to its incenter,
/// after which every edge points backwards.
fn shrink_triangle(points: &[Point2], field: &VelocityField, offset: f64) -> Step {
    let advanced = field.advance(points, offset);
    let before = points[1] - points[0];
    let after = advanced[1] - advanced[0];
    if before.dot(&after) < 0.0 {
        trace!(offset, "triangle inverted");
        return Step::Vanish;
    }
    Step::Emit(Polygon2::new(advanced))
}
