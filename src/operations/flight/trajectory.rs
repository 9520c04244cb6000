use crate::error::{GeometryError, Result};
use crate::math::{Angle, Point2, Vector2};

use super::{ArrowShot, FlightParams};

/// Seconds elapsed between two millisecond timestamps.
///
/// The difference is taken in `f64`, so any pair of stamps gives a finite
/// result.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn elapsed_seconds(spawn_ms: i64, now_ms: i64) -> f64 {
    (now_ms as f64 - spawn_ms as f64) / 1000.0
}

/// Parabolic path of a shot under constant gravity.
///
/// `P(t) = start + v0 * t + 0.5 * g * t^2`, with `v0` the launch direction
/// scaled by the shot speed.
#[derive(Debug, Clone, Copy)]
pub struct Trajectory {
    shot: ArrowShot,
    velocity: Vector2,
    gravity: Vector2,
}

impl Trajectory {
    /// Creates the trajectory of `shot` under the gravity in `params`.
    #[must_use]
    pub fn new(shot: ArrowShot, params: FlightParams) -> Self {
        Self {
            shot,
            velocity: shot.angle().unit_vector() * shot.speed(),
            gravity: params.gravity,
        }
    }

    #[must_use]
    pub fn shot(&self) -> &ArrowShot {
        &self.shot
    }

    #[must_use]
    pub fn initial_velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Position `elapsed` seconds after launch.
    ///
    /// # Errors
    ///
    /// Returns an error if `elapsed` is negative or not finite.
    pub fn position_at(&self, elapsed: f64) -> Result<Point2> {
        let t = check_elapsed(elapsed)?;
        Ok(self.shot.start() + self.velocity * t + self.gravity * (0.5 * t * t))
    }

    /// Velocity `elapsed` seconds after launch.
    ///
    /// # Errors
    ///
    /// Returns an error if `elapsed` is negative or not finite.
    pub fn velocity_at(&self, elapsed: f64) -> Result<Vector2> {
        let t = check_elapsed(elapsed)?;
        Ok(self.velocity + self.gravity * t)
    }

    /// Direction the arrow's nose points `elapsed` seconds after launch.
    ///
    /// The nose follows the velocity. While the velocity is zero (a
    /// zero-speed shot at launch) the launch angle is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if `elapsed` is negative or not finite.
    pub fn heading_at(&self, elapsed: f64) -> Result<Angle> {
        let velocity = self.velocity_at(elapsed)?;
        Ok(Angle::of_vector(&velocity).unwrap_or(self.shot.angle()))
    }
}

fn check_elapsed(elapsed: f64) -> Result<f64> {
    if elapsed.is_finite() && elapsed >= 0.0 {
        Ok(elapsed)
    } else {
        Err(GeometryError::ParameterOutOfRange {
            parameter: "elapsed",
            value: elapsed,
            min: 0.0,
            max: f64::INFINITY,
        }
        .into())
    }
}
