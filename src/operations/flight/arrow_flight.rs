use crate::error::{GeometryError, Result};
use crate::math::{Angle, Point2};

use super::{Arena, BodyPart, HitTarget, Trajectory};

/// Where an arrow is at a given moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightStatus {
    InFlight { position: Point2, heading: Angle },
    Hit {
        position: Point2,
        body_part: BodyPart,
    },
    OutOfBounds { position: Point2 },
}

impl FlightStatus {
    /// Whether the arrow is finished and should be removed.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InFlight { .. })
    }

    #[must_use]
    pub fn position(&self) -> Point2 {
        match *self {
            Self::InFlight { position, .. }
            | Self::Hit { position, .. }
            | Self::OutOfBounds { position } => position,
        }
    }
}

/// A single arrow flying toward a target inside an arena.
pub struct ArrowFlight {
    trajectory: Trajectory,
    target: HitTarget,
    arena: Arena,
}

impl ArrowFlight {
    #[must_use]
    pub fn new(trajectory: Trajectory, target: HitTarget, arena: Arena) -> Self {
        Self {
            trajectory,
            target,
            arena,
        }
    }

    #[must_use]
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Samples the flight `elapsed` seconds after launch.
    ///
    /// A hit on the target wins over leaving the arena.
    ///
    /// # Errors
    ///
    /// Returns an error if `elapsed` is negative or not finite.
    pub fn sample(&self, elapsed: f64) -> Result<FlightStatus> {
        let position = self.trajectory.position_at(elapsed)?;

        if let Some(body_part) = self.target.check(position) {
            tracing::debug!(x = position.x, y = position.y, %body_part, "arrow hit target");
            return Ok(FlightStatus::Hit {
                position,
                body_part,
            });
        }

        if !self.arena.contains(position) {
            tracing::debug!(x = position.x, y = position.y, "arrow left the arena");
            return Ok(FlightStatus::OutOfBounds { position });
        }

        let heading = self.trajectory.heading_at(elapsed)?;
        tracing::trace!(elapsed, heading = heading.degrees(), "arrow in flight");
        Ok(FlightStatus::InFlight { position, heading })
    }

    /// Samples at a fixed `step` until the flight ends, up to `max_time`
    /// seconds. Returns the terminal status with its time, or `None` if the
    /// arrow was still flying at `max_time`.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not positive or `max_time` is invalid.
    pub fn run(&self, step: f64, max_time: f64) -> Result<Option<(f64, FlightStatus)>> {
        if !(step.is_finite() && step > 0.0) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "step",
                value: step,
                min: f64::MIN_POSITIVE,
                max: f64::INFINITY,
            }
            .into());
        }
        let max_ticks = f64::from(u32::MAX);
        if !(max_time >= 0.0 && max_time / step < max_ticks) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "max_time",
                value: max_time,
                min: 0.0,
                max: step * max_ticks,
            }
            .into());
        }
        let mut tick: u32 = 0;
        loop {
            let t = f64::from(tick) * step;
            if t > max_time {
                return Ok(None);
            }
            let status = self.sample(t)?;
            if status.is_terminal() {
                return Ok(Some((t, status)));
            }
            tick += 1;
        }
    }
}
