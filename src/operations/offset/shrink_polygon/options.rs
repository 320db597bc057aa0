use crate::error::{GeometryError, Result};

/// Default threshold for root filtering and the collision feasibility test.
pub const DEFAULT_EPSILON: f64 = 1e-3;

/// Default bound on split depth before a branch is truncated.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Default distance / sine threshold for dropping degenerate vertices.
pub const DEFAULT_WELD_TOLERANCE: f64 = 1e-9;

/// How the input vertex order is interpreted.
///
/// The shrink driver works on counter-clockwise polygons; any other order is
/// reversed before processing. Output polygons are always counter-clockwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Winding {
    /// Decide from the sign of the polygon's signed area.
    #[default]
    Detect,
    /// The input is known to be counter-clockwise and is used as-is.
    CounterClockwise,
    /// The input is known to be clockwise and is always reversed.
    Clockwise,
}

/// Tuning parameters for [`super::ShrinkPolygon2D`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShrinkOptions {
    /// Roots with `t <= -epsilon` are discarded, and a collinearity is only
    /// a collision when the dot product of the two relative positions is
    /// below `epsilon`.
    pub epsilon: f64,
    /// Branches deeper than this many splits produce no output.
    pub max_depth: usize,
    /// Vertices closer than this to their predecessor, or whose incident
    /// edges have `|sin θ|` at most this, are removed before each step.
    pub weld_tolerance: f64,
    /// Orientation policy for the input polygon.
    pub winding: Winding,
}

impl Default for ShrinkOptions {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            max_depth: DEFAULT_MAX_DEPTH,
            weld_tolerance: DEFAULT_WELD_TOLERANCE,
            winding: Winding::Detect,
        }
    }
}

impl ShrinkOptions {
    /// Sets the collision threshold.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the split depth bound.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the degenerate-vertex threshold.
    #[must_use]
    pub fn with_weld_tolerance(mut self, weld_tolerance: f64) -> Self {
        self.weld_tolerance = weld_tolerance;
        self
    }

    /// Sets the orientation policy.
    #[must_use]
    pub fn with_winding(mut self, winding: Winding) -> Self {
        self.winding = winding;
        self
    }

    /// Checks that every threshold is usable.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if `epsilon` is not a
    /// positive finite number or `weld_tolerance` is negative or non-finite.
    pub fn validate(&self) -> Result<()> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "epsilon",
                value: self.epsilon,
                min: f64::MIN_POSITIVE,
                max: f64::MAX,
            }
            .into());
        }
        if !(self.weld_tolerance.is_finite() && self.weld_tolerance >= 0.0) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "weld_tolerance",
                value: self.weld_tolerance,
                min: 0.0,
                max: f64::MAX,
            }
            .into());
        }
        Ok(())
    }
}
