//! Turning objects toward a target point.
//!
//! [`compute_facing_angle`] is the pure core. [`FaceTarget`] is the per-tick
//! step a host loop calls: it reads the object's position from an
//! [`Orientable`] sink, computes the angle and writes it back.

mod face_target;
mod facing_angle;

pub use face_target::FaceTarget;
pub use facing_angle::{compute_facing_angle, try_facing_angle, FacingAngle};

use crate::math::{Angle, Point2, Transform2, Vector2};

/// What to do when the target coincides with the object's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Apply the fallback angle.
    #[default]
    Reset,
    /// Leave the object's rotation as it was.
    Hold,
}

/// An object whose in-plane orientation can be set from a facing angle.
pub trait Orientable {
    /// Current position, in the same space as the targets it is turned toward.
    fn position(&self) -> Point2;

    /// Sets the in-plane rotation. Roll and pitch, if the object has them,
    /// stay at zero.
    fn set_facing(&mut self, angle: Angle);
}

impl Orientable for Transform2 {
    fn position(&self) -> Point2 {
        Point2::from(self.translation.vector)
    }

    fn set_facing(&mut self, angle: Angle) {
        self.rotation = angle.rotation();
    }
}

/// Forward axis (+x) of a transform in the parent space.
#[must_use]
pub fn forward(transform: &Transform2) -> Vector2 {
    transform.rotation * Vector2::x()
}
