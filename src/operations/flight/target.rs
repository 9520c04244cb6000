use crate::math::Point2;

/// Vertical hit zone on a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    Head,
    UpperBody,
    Legs,
}

impl BodyPart {
    /// Wire name used by game clients.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::UpperBody => "upperBody",
            Self::Legs => "legs",
        }
    }
}

impl std::fmt::Display for BodyPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collision radius and zone boundaries of a target.
///
/// Zone boundaries are vertical offsets from the target center, in screen
/// space (+y down): anything above `head_below` is the head, anything above
/// `legs_from` the upper body, the rest legs.
#[derive(Debug, Clone, Copy)]
pub struct TargetParams {
    pub radius: f64,
    pub head_below: f64,
    pub legs_from: f64,
}

impl Default for TargetParams {
    fn default() -> Self {
        Self {
            radius: 50.0,
            head_below: -30.0,
            legs_from: 20.0,
        }
    }
}

/// A circular target split into body-part zones.
#[derive(Debug, Clone, Copy)]
pub struct HitTarget {
    center: Point2,
    params: TargetParams,
}

impl HitTarget {
    #[must_use]
    pub fn new(center: Point2, params: TargetParams) -> Self {
        Self { center, params }
    }

    /// Center of the collision circle; zone offsets are measured from it.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Returns the body part struck by an arrow tip at `point`, or `None`
    /// if the point lies on or outside the collision radius.
    #[must_use]
    pub fn check(&self, point: Point2) -> Option<BodyPart> {
        let distance = nalgebra::distance(&point, &self.center);
        if distance < self.params.radius {
            Some(self.classify(point))
        } else {
            None
        }
    }

    /// Body part for a point by its vertical offset alone.
    #[must_use]
    pub fn classify(&self, point: Point2) -> BodyPart {
        let dy = point.y - self.center.y;
        if dy < self.params.head_below {
            BodyPart::Head
        } else if dy < self.params.legs_from {
            BodyPart::UpperBody
        } else {
            BodyPart::Legs
        }
    }
}
