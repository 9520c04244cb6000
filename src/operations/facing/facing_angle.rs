use crate::error::{GeometryError, Result};
use crate::math::{is_zero_vector, Angle, Point2};

/// Returns the angle that turns an object at `origin` so its forward axis
/// (+x) points at `target`.
///
/// The result is in degrees, counter-clockwise from +x, within `(-180, 180]`.
/// When `target == origin` there is no direction and [`Angle::ZERO`] is
/// returned. Non-finite coordinates propagate as a NaN angle.
#[must_use]
pub fn compute_facing_angle(target: Point2, origin: Point2) -> Angle {
    FacingAngle::new(target, origin).execute()
}

/// Like [`compute_facing_angle`], but rejects input it would otherwise
/// paper over.
///
/// # Errors
///
/// Returns [`GeometryError::NonFinite`] if either point has a NaN or infinite
/// coordinate, and [`GeometryError::ZeroVector`] if the points coincide.
pub fn try_facing_angle(target: Point2, origin: Point2) -> Result<Angle> {
    if !target.iter().all(|c| c.is_finite()) {
        return Err(GeometryError::NonFinite("target").into());
    }
    if !origin.iter().all(|c| c.is_finite()) {
        return Err(GeometryError::NonFinite("origin").into());
    }
    Angle::of_vector(&(target - origin)).ok_or_else(|| GeometryError::ZeroVector.into())
}

/// Computes the facing angle from `origin` toward `target`.
pub struct FacingAngle {
    target: Point2,
    origin: Point2,
    fallback: Angle,
}

impl FacingAngle {
    /// Creates a new `FacingAngle` computation with a zero fallback.
    #[must_use]
    pub fn new(target: Point2, origin: Point2) -> Self {
        Self {
            target,
            origin,
            fallback: Angle::ZERO,
        }
    }

    /// Sets the angle returned when `target` and `origin` coincide.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Angle) -> Self {
        self.fallback = fallback;
        self
    }

    /// Executes the computation.
    #[must_use]
    pub fn execute(&self) -> Angle {
        let direction = self.target - self.origin;
        if is_zero_vector(&direction) {
            tracing::debug!(
                x = self.origin.x,
                y = self.origin.y,
                fallback = self.fallback.degrees(),
                "target coincides with origin, using fallback angle"
            );
            return self.fallback;
        }
        Angle::from_radians(direction.y.atan2(direction.x))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::BowsightError;
    use crate::math::Vector2;

    const TOL: f64 = 1e-9;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn sample_pairs() -> Vec<(Point2, Point2)> {
        let coords = [-7.5, -1.0, 0.0, 0.25, 3.0, 120.0];
        let mut pairs = Vec::new();
        for &tx in &coords {
            for &ty in &coords {
                for &(ox, oy) in &[(0.0, 0.0), (2.0, -3.0), (-50.5, 10.0)] {
                    let (target, origin) = (p(tx, ty), p(ox, oy));
                    if target != origin {
                        pairs.push((target, origin));
                    }
                }
            }
        }
        pairs
    }

    // ── concrete scenarios ──

    #[test]
    fn cardinal_and_diagonal_directions() {
        let o = p(0.0, 0.0);
        let cases = [
            (p(1.0, 0.0), 0.0),
            (p(0.0, 1.0), 90.0),
            (p(-1.0, 0.0), 180.0),
            (p(0.0, -1.0), -90.0),
            (p(1.0, 1.0), 45.0),
        ];
        for (target, expected) in cases {
            let a = compute_facing_angle(target, o);
            assert_abs_diff_eq!(a.degrees(), expected, epsilon = TOL);
        }
    }

    #[test]
    fn coincident_points_fall_back_to_zero() {
        let a = compute_facing_angle(p(5.0, 5.0), p(5.0, 5.0));
        assert_eq!(a, Angle::ZERO);
        for (target, _) in sample_pairs() {
            assert_eq!(compute_facing_angle(target, target), Angle::ZERO);
        }
    }

    #[test]
    fn negative_zero_y_maps_to_positive_half_turn() {
        let a = compute_facing_angle(p(-1.0, -0.0), p(0.0, 0.0));
        assert_abs_diff_eq!(a.degrees(), 180.0, epsilon = TOL);
    }

    #[test]
    fn custom_fallback_is_used_only_when_degenerate() {
        let fallback = Angle::from_degrees(33.0);
        let a = FacingAngle::new(p(1.0, 1.0), p(1.0, 1.0))
            .with_fallback(fallback)
            .execute();
        assert_eq!(a, fallback);

        let b = FacingAngle::new(p(1.0, 2.0), p(1.0, 1.0))
            .with_fallback(fallback)
            .execute();
        assert_abs_diff_eq!(b.degrees(), 90.0, epsilon = TOL);
    }

    // ── properties ──

    #[test]
    fn forward_axis_points_at_target() {
        for (target, origin) in sample_pairs() {
            let a = compute_facing_angle(target, origin);
            assert!(a.degrees() > -180.0 && a.degrees() <= 180.0, "a={a}");
            let d = (target - origin).normalize();
            let u = a.unit_vector();
            // Parallel and same direction.
            assert!((u.x * d.y - u.y * d.x).abs() < 1e-5, "a={a} d={d:?}");
            assert!(u.dot(&d) > 0.0, "a={a} d={d:?}");
        }
    }

    #[test]
    fn translation_invariant() {
        let offset = Vector2::new(13.25, -4.5);
        for (target, origin) in sample_pairs() {
            let a = compute_facing_angle(target, origin);
            let b = compute_facing_angle(target + offset, origin + offset);
            assert_abs_diff_eq!(a.degrees(), b.degrees(), epsilon = 1e-6);
        }
    }

    #[test]
    fn positive_scale_invariant() {
        for (target, origin) in sample_pairs() {
            let d = target - origin;
            let a = compute_facing_angle(target, origin);
            for k in [0.001, 0.5, 2.0, 1000.0] {
                let b = compute_facing_angle(origin + d * k, origin);
                assert_abs_diff_eq!(a.degrees(), b.degrees(), epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn negative_scale_flips_half_turn() {
        for (target, origin) in sample_pairs() {
            let d = target - origin;
            let a = compute_facing_angle(target, origin);
            let b = compute_facing_angle(origin - d * 3.0, origin);
            // Compare on the circle so 180 and -180 count as equal.
            let diff = Angle::from_degrees(b.degrees() - a.opposite().degrees());
            assert!(diff.degrees().abs() < 1e-6, "a={a} b={b}");
        }
    }

    #[test]
    fn nan_propagates() {
        let a = compute_facing_angle(p(f64::NAN, 1.0), p(0.0, 0.0));
        assert!(a.degrees().is_nan());
    }

    // ── try_facing_angle ──

    #[test]
    fn strict_variant_matches_lenient_one() {
        let a = try_facing_angle(p(-2.0, 2.0), p(0.0, 0.0)).unwrap();
        assert_abs_diff_eq!(a.degrees(), 135.0, epsilon = TOL);
    }

    #[test]
    fn strict_variant_rejects_coincident_points() {
        let err = try_facing_angle(p(5.0, 5.0), p(5.0, 5.0)).unwrap_err();
        assert!(matches!(err, BowsightError::Geometry(GeometryError::ZeroVector)));
    }

    #[test]
    fn strict_variant_rejects_non_finite() {
        let err = try_facing_angle(p(f64::INFINITY, 0.0), p(0.0, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            BowsightError::Geometry(GeometryError::NonFinite("target"))
        ));
        let err = try_facing_angle(p(1.0, 0.0), p(0.0, f64::NAN)).unwrap_err();
        assert!(matches!(
            err,
            BowsightError::Geometry(GeometryError::NonFinite("origin"))
        ));
    }
}
