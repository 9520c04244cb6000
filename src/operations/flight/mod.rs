//! Arrow flight: a shot fired along a facing angle, flown under constant
//! gravity, and tested against a single target and the arena bounds.
//!
//! Coordinates follow screen space (+y down), which is why the default
//! gravity points along +y.

mod arena;
mod arrow_flight;
mod shot;
mod target;
mod trajectory;

pub use arena::Arena;
pub use arrow_flight::{ArrowFlight, FlightStatus};
pub use shot::ArrowShot;
pub use target::{BodyPart, HitTarget, TargetParams};
pub use trajectory::{elapsed_seconds, Trajectory};

use crate::math::Vector2;

/// Parameters shared by every arrow in flight.
#[derive(Debug, Clone, Copy)]
pub struct FlightParams {
    /// Constant acceleration, in units per second squared.
    pub gravity: Vector2,
}

impl Default for FlightParams {
    fn default() -> Self {
        Self {
            gravity: Vector2::new(0.0, 60.0),
        }
    }
}
