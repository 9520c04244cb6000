use crate::error::{OperationError, Result};
use crate::math::{Angle, Point2};
use crate::operations::facing::compute_facing_angle;

/// Launch state of an arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowShot {
    start: Point2,
    angle: Angle,
    speed: f64,
}

impl ArrowShot {
    /// Creates a shot leaving `start` along `angle` at `speed` units per second.
    ///
    /// # Errors
    ///
    /// Returns an error if `start`, `angle` or `speed` is not finite, or if
    /// `speed` is negative.
    pub fn new(start: Point2, angle: Angle, speed: f64) -> Result<Self> {
        if !start.iter().all(|c| c.is_finite()) {
            let reason = format!("shot start {start} is not finite");
            return Err(OperationError::InvalidInput(reason).into());
        }
        if !angle.is_finite() {
            let reason = "shot angle is not finite".to_owned();
            return Err(OperationError::InvalidInput(reason).into());
        }
        if !speed.is_finite() || speed < 0.0 {
            let reason = format!("shot speed must be finite and non-negative, got {speed}");
            return Err(OperationError::InvalidInput(reason).into());
        }
        Ok(Self {
            start,
            angle,
            speed,
        })
    }

    /// Creates a shot from `start` aimed straight at `aim_point`.
    ///
    /// If the two points coincide the shot leaves along the zero angle.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ArrowShot::new`].
    pub fn aimed(start: Point2, aim_point: Point2, speed: f64) -> Result<Self> {
        Self::new(start, compute_facing_angle(aim_point, start), speed)
    }

    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    #[must_use]
    pub fn angle(&self) -> Angle {
        self.angle
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }
}
