use super::Vector2;

/// Relative size below which a polynomial coefficient is treated as zero.
const COEFFICIENT_EPS: f64 = 1e-12;

/// Relative size of a discriminant still treated as a double root.
const DISCRIMINANT_EPS: f64 = 1e-12;

/// Z-component of the 3D cross product of `v` and `w` lifted into the XY plane.
///
/// Positive when `w` is counter-clockwise from `v`.
#[must_use]
pub fn cross2(v: &Vector2, w: &Vector2) -> f64 {
    v.x * w.y - v.y * w.x
}

/// Real roots of `a·t² + b·t + c = 0`, in ascending order.
///
/// A leading coefficient that is negligible next to the others degrades the
/// equation to `b·t + c = 0`. When `b` is negligible as well the equation is
/// either never or always satisfied, and neither case has a discrete root, so
/// the result is empty.
///
/// A discriminant that is nonzero only by rounding noise is clamped to zero,
/// so exact double roots survive floating-point evaluation as a single root.
#[must_use]
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Vec<f64> {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return Vec::new();
    }
    let scale = a.abs().max(b.abs()).max(c.abs());
    if scale == 0.0 {
        return Vec::new();
    }

    if a.abs() <= COEFFICIENT_EPS * scale {
        if b.abs() <= COEFFICIENT_EPS * scale {
            return Vec::new();
        }
        return vec![-c / b];
    }

    let four_ac = 4.0 * a * c;
    let d = b * b - four_ac;
    if d.abs() <= DISCRIMINANT_EPS * (b * b + four_ac.abs()) {
        return vec![-b / (2.0 * a)];
    }
    if d < 0.0 {
        return Vec::new();
    }

    // Avoid cancellation between -b and √d for the smaller-magnitude root.
    let q = -0.5 * (b + b.signum() * d.sqrt());
    let (r0, r1) = (q / a, c / q);
    if r0 <= r1 {
        vec![r0, r1]
    } else {
        vec![r1, r0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cross2_orientation() {
        let x = Vector2::new(1.0, 0.0);
        let y = Vector2::new(0.0, 1.0);
        assert_relative_eq!(cross2(&x, &y), 1.0);
        assert_relative_eq!(cross2(&y, &x), -1.0);
        assert_relative_eq!(cross2(&x, &x), 0.0);
    }

    #[test]
    fn cross2_matches_lifted_cross() {
        let v = Vector2::new(2.0, -3.0);
        let w = Vector2::new(0.5, 4.0);
        let lifted = nalgebra::Vector3::new(v.x, v.y, 0.0)
            .cross(&nalgebra::Vector3::new(w.x, w.y, 0.0));
        assert_relative_eq!(cross2(&v, &w), lifted.z);
    }

    #[test]
    fn two_roots_sorted() {
        // (t - 0.5)(t + 1) * 2 = 2t² + t - 1
        let roots = solve_quadratic(2.0, 1.0, -1.0);
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], -1.0);
        assert_relative_eq!(roots[1], 0.5);
    }

    #[test]
    fn negative_leading_coefficient() {
        let roots = solve_quadratic(-4.0, -2.0, 2.0);
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], -1.0);
        assert_relative_eq!(roots[1], 0.5);
    }

    #[test]
    fn double_root() {
        // 4t² - 8t + 4 = 4(t - 1)²
        let roots = solve_quadratic(4.0, -8.0, 4.0);
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 1.0);
    }

    #[test]
    fn double_root_with_rounding_noise() {
        // (t - 1)² nudged so the discriminant is slightly negative.
        let roots = solve_quadratic(1.0, -2.0, 1.0 + 1e-15);
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn near_double_root_merges() {
        let roots = solve_quadratic(1.0, -2.0, 1.0 - 1e-15);
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn no_real_roots() {
        assert!(solve_quadratic(1.0, 0.0, 1.0).is_empty());
    }

    #[test]
    fn degenerate_leading_coefficient_is_linear() {
        let roots = solve_quadratic(0.0, 2.0, -3.0);
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 1.5);
    }

    #[test]
    fn constant_equation_has_no_roots() {
        assert!(solve_quadratic(0.0, 0.0, 5.0).is_empty());
        assert!(solve_quadratic(0.0, 0.0, 0.0).is_empty());
    }

    #[test]
    fn non_finite_coefficients_have_no_roots() {
        assert!(solve_quadratic(f64::NAN, 1.0, 1.0).is_empty());
        assert!(solve_quadratic(1.0, f64::INFINITY, 1.0).is_empty());
    }
}
