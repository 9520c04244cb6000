//! In-plane angles measured in degrees.
//!
//! Angles are counter-clockwise from the positive x-axis about the axis
//! perpendicular to the plane, normalized to `(-180, 180]`.

use super::{UnitComplex, UnitQuaternion, Vector2};

/// A normalized in-plane rotation angle.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle {
    degrees: f64,
}

impl Angle {
    /// The zero angle. Also the fallback for a zero-length direction.
    pub const ZERO: Self = Self { degrees: 0.0 };

    /// Creates an angle from degrees, wrapping into `(-180, 180]`.
    ///
    /// Non-finite input yields a NaN angle.
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            degrees: normalize_degrees(degrees),
        }
    }

    /// Creates an angle from radians, wrapping into `(-180, 180]`.
    #[must_use]
    pub fn from_radians(radians: f64) -> Self {
        Self::from_degrees(radians.to_degrees())
    }

    /// Returns the direction angle of `v`, or `None` for the zero vector.
    #[must_use]
    pub fn of_vector(v: &Vector2) -> Option<Self> {
        if super::is_zero_vector(v) {
            return None;
        }
        Some(Self::from_radians(v.y.atan2(v.x)))
    }

    /// Angle in degrees, within `(-180, 180]`.
    #[must_use]
    pub fn degrees(self) -> f64 {
        self.degrees
    }

    /// Angle in radians, within `(-π, π]`.
    #[must_use]
    pub fn radians(self) -> f64 {
        self.degrees.to_radians()
    }

    /// The angle pointing the opposite way.
    #[must_use]
    pub fn opposite(self) -> Self {
        Self::from_degrees(self.degrees + 180.0)
    }

    /// Whether the angle holds a real value rather than NaN.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.degrees.is_finite()
    }

    /// The local forward axis (+x) rotated by this angle.
    #[must_use]
    pub fn unit_vector(self) -> Vector2 {
        let (sin, cos) = self.radians().sin_cos();
        Vector2::new(cos, sin)
    }

    /// In-plane rotation by this angle.
    #[must_use]
    pub fn rotation(self) -> UnitComplex {
        UnitComplex::new(self.radians())
    }

    /// 3D rotation about +z by this angle, with roll and pitch left at zero.
    #[must_use]
    pub fn to_quaternion(self) -> UnitQuaternion {
        UnitQuaternion::from_euler_angles(0.0, 0.0, self.radians())
    }
}

impl From<UnitComplex> for Angle {
    fn from(rotation: UnitComplex) -> Self {
        Self::from_radians(rotation.angle())
    }
}

impl std::fmt::Display for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees)
    }
}

fn normalize_degrees(degrees: f64) -> f64 {
    if degrees > -180.0 && degrees <= 180.0 {
        return degrees;
    }
    // rem_euclid may round up to exactly 360.0 for tiny negative inputs.
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}
