use crate::math::Point2;

/// Axis-aligned region an arrow may fly in. Arrows leaving it are dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub min: Point2,
    pub max: Point2,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            min: Point2::new(-100.0, -100.0),
            max: Point2::new(1000.0, 1000.0),
        }
    }
}

impl Arena {
    #[must_use]
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// Whether `point` lies inside the arena, boundary included.
    #[must_use]
    pub fn contains(&self, point: Point2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}
