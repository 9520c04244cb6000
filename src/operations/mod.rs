pub mod facing;
pub mod flight;
