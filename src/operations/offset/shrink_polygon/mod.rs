pub mod collision;
mod driver;
pub mod options;
pub mod split;
pub mod velocity;

use tracing::debug;

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::Polygon2;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::{Point2, TOLERANCE};

pub use driver::ShrinkStats;
pub use options::{ShrinkOptions, Winding};

/// Shrinks a simple polygon by pushing every edge inward by a distance.
///
/// The erosion is simulated as continuous vertex motion. Whenever an edge
/// collapses or a vertex runs into a non-adjacent edge before the target
/// distance is reached, the polygon is split there and both halves continue
/// independently with the remaining distance. Parts that erode away simply
/// produce no output.
///
/// # Algorithm
///
/// 1. Normalize the input to counter-clockwise winding
/// 2. Drop degenerate vertices and build the per-vertex velocity field
/// 3. Find the earliest collision event; if it happens within the remaining
///    distance, split there and repeat on both halves
/// 4. Otherwise move every vertex by the remaining distance
#[derive(Debug)]
pub struct ShrinkPolygon2D {
    points: Vec<Point2>,
    distance: f64,
    options: ShrinkOptions,
}

/// Result of a [`ShrinkPolygon2D`] run.
#[derive(Debug, Clone)]
pub struct ShrinkReport {
    /// Counter-clockwise output polygons, possibly none.
    pub polygons: Vec<Polygon2>,
    /// How many splits, truncations and vanished branches occurred.
    pub stats: ShrinkStats,
    /// Whether the input was reversed to make it counter-clockwise.
    pub reversed_input: bool,
}

impl ShrinkReport {
    /// Returns `true` if no branch was cut off by the depth bound.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.stats.truncated == 0
    }

    /// Sum of the areas of all output polygons.
    #[must_use]
    pub fn total_area(&self) -> f64 {
        self.polygons.iter().map(Polygon2::area).sum()
    }
}

impl ShrinkPolygon2D {
    /// Creates a new shrink operation with default options.
    #[must_use]
    pub fn new(points: Vec<Point2>, distance: f64) -> Self {
        Self {
            points,
            distance,
            options: ShrinkOptions::default(),
        }
    }

    /// Replaces the options.
    #[must_use]
    pub fn with_options(mut self, options: ShrinkOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the shrink.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the polygon has fewer than 3
    /// vertices or non-finite coordinates, `GeometryError::ParameterOutOfRange`
    /// for a negative or non-finite distance or invalid options, and
    /// `GeometryError::Degenerate` if the polygon encloses no area.
    pub fn execute(&self) -> Result<ShrinkReport> {
        self.options.validate()?;

        if self.points.len() < 3 {
            return Err(OperationError::InvalidInput(format!(
                "at least 3 vertices required for polygon shrink, got {}",
                self.points.len()
            ))
            .into());
        }
        if let Some(bad) = self
            .points
            .iter()
            .find(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(OperationError::InvalidInput(format!(
                "non-finite vertex ({}, {})",
                bad.x, bad.y
            ))
            .into());
        }
        if !(self.distance.is_finite() && self.distance >= 0.0) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "distance",
                value: self.distance,
                min: 0.0,
                max: f64::MAX,
            }
            .into());
        }

        let area = signed_area_2d(&self.points);
        if area.abs() < TOLERANCE {
            return Err(GeometryError::Degenerate("polygon encloses no area".to_owned()).into());
        }

        let reversed_input = match self.options.winding {
            Winding::Detect => area < 0.0,
            Winding::CounterClockwise => false,
            Winding::Clockwise => true,
        };
        let mut points = self.points.clone();
        if reversed_input {
            points.reverse();
        }

        debug!(
            vertices = points.len(),
            distance = self.distance,
            reversed_input,
            "shrinking polygon"
        );
        let (polygons, stats) = driver::run(points, self.distance, &self.options);
        debug!(
            polygons = polygons.len(),
            splits = stats.splits,
            truncated = stats.truncated,
            vanished = stats.vanished,
            "shrink finished"
        );

        Ok(ShrinkReport {
            polygons,
            stats,
            reversed_input,
        })
    }
}

/// Shrinks `points` inward by `offset` with default options.
///
/// Accepts either winding. Returns a success flag and the resulting
/// counter-clockwise polygons. The flag is `false` when the input is not a
/// usable polygon or when the depth bound cut off part of the result; an
/// empty list with `true` means the polygon eroded away completely.
#[must_use]
pub fn offset_polygon_inwards(points: &[Point2], offset: f64) -> (bool, Vec<Vec<Point2>>) {
    match ShrinkPolygon2D::new(points.to_vec(), offset).execute() {
        Ok(report) => (
            report.is_complete(),
            report.polygons.into_iter().map(Polygon2::into_points).collect(),
        ),
        Err(err) => {
            debug!(%err, "polygon shrink rejected input");
            (false, Vec::new())
        }
    }
}
