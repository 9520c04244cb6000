pub mod angle;

pub use angle::Angle;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// In-plane rotation.
pub type UnitComplex = nalgebra::UnitComplex<f64>;

/// Rigid in-plane transform: a translation plus a rotation.
pub type Transform2 = nalgebra::Isometry2<f64>;

/// 3D rotation, used when handing an in-plane angle to a 3D transform.
pub type UnitQuaternion = nalgebra::UnitQuaternion<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns `true` when both components of `v` are exactly zero.
///
/// This is the degenerate-direction test: only an exact zero has no direction,
/// tiny vectors still yield a well-defined `atan2`.
#[allow(clippy::float_cmp)]
#[must_use]
pub fn is_zero_vector(v: &Vector2) -> bool {
    v.x == 0.0 && v.y == 0.0
}
