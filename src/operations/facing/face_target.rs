use crate::math::{is_zero_vector, Angle, Point2};

use super::{DegeneratePolicy, FacingAngle, Orientable};

/// Turns an object toward a target point. One call per host tick.
pub struct FaceTarget {
    target: Point2,
    policy: DegeneratePolicy,
    fallback: Angle,
}

impl FaceTarget {
    /// Creates a new `FaceTarget` operation with [`DegeneratePolicy::Reset`]
    /// and a zero fallback.
    #[must_use]
    pub fn new(target: Point2) -> Self {
        Self {
            target,
            policy: DegeneratePolicy::default(),
            fallback: Angle::ZERO,
        }
    }

    /// Sets what happens when the target sits on the object.
    #[must_use]
    pub fn with_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the angle applied under [`DegeneratePolicy::Reset`].
    #[must_use]
    pub fn with_fallback(mut self, fallback: Angle) -> Self {
        self.fallback = fallback;
        self
    }

    /// Executes the operation, rotating `object` in place.
    ///
    /// Returns the angle that was applied, or `None` if the target sat on the
    /// object and the policy is [`DegeneratePolicy::Hold`].
    pub fn execute<O: Orientable + ?Sized>(&self, object: &mut O) -> Option<Angle> {
        let origin = object.position();

        if self.policy == DegeneratePolicy::Hold && is_zero_vector(&(self.target - origin)) {
            tracing::debug!(x = origin.x, y = origin.y, "holding rotation");
            return None;
        }

        let angle = FacingAngle::new(self.target, origin)
            .with_fallback(self.fallback)
            .execute();
        tracing::trace!(angle = angle.degrees(), "facing target");
        object.set_facing(angle);
        Some(angle)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::{Transform2, Vector2};
    use crate::operations::facing::forward;

    /// Records every angle it is given.
    struct Recorder {
        position: Point2,
        applied: Vec<Angle>,
    }

    impl Recorder {
        fn at(x: f64, y: f64) -> Self {
            Self {
                position: Point2::new(x, y),
                applied: Vec::new(),
            }
        }
    }

    impl Orientable for Recorder {
        fn position(&self) -> Point2 {
            self.position
        }

        fn set_facing(&mut self, angle: Angle) {
            self.applied.push(angle);
        }
    }

    fn hold_toward(x: f64, y: f64) -> FaceTarget {
        FaceTarget::new(Point2::new(x, y)).with_policy(DegeneratePolicy::Hold)
    }

    #[test]
    fn applies_angle_toward_target() {
        let mut obj = Recorder::at(10.0, 10.0);
        let applied = FaceTarget::new(Point2::new(10.0, 20.0)).execute(&mut obj);
        assert_eq!(obj.applied.len(), 1);
        assert_eq!(applied, Some(obj.applied[0]));
        assert_abs_diff_eq!(obj.applied[0].degrees(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn reset_applies_fallback_when_degenerate() {
        let mut obj = Recorder::at(5.0, 5.0);
        let fallback = Angle::from_degrees(-45.0);
        let applied = FaceTarget::new(Point2::new(5.0, 5.0))
            .with_fallback(fallback)
            .execute(&mut obj);
        assert_eq!(applied, Some(fallback));
        assert_eq!(obj.applied, vec![fallback]);
    }

    #[test]
    fn hold_leaves_sink_untouched_when_degenerate() {
        let mut obj = Recorder::at(5.0, 5.0);
        let applied = FaceTarget::new(Point2::new(5.0, 5.0))
            .with_policy(DegeneratePolicy::Hold)
            .execute(&mut obj);
        assert!(applied.is_none());
        assert!(obj.applied.is_empty());
    }

    #[test]
    fn hold_keeps_previous_rotation_across_ticks() {
        let mut t = Transform2::translation(0.0, 0.0);

        hold_toward(0.0, 3.0).execute(&mut t);
        assert_abs_diff_eq!(forward(&t), Vector2::new(0.0, 1.0), epsilon = 1e-12);

        // Pointer lands on the object: rotation survives.
        hold_toward(0.0, 0.0).execute(&mut t);
        assert_abs_diff_eq!(forward(&t), Vector2::new(0.0, 1.0), epsilon = 1e-12);

        hold_toward(-2.0, 0.0).execute(&mut t);
        assert_abs_diff_eq!(forward(&t), Vector2::new(-1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn works_through_trait_object() {
        let mut t = Transform2::translation(1.0, 1.0);
        let obj: &mut dyn Orientable = &mut t;
        let applied = FaceTarget::new(Point2::new(2.0, 2.0)).execute(obj);
        let degrees = applied.map_or(f64::NAN, Angle::degrees);
        assert_abs_diff_eq!(degrees, 45.0, epsilon = 1e-9);
    }
}
