//! 2D facing angles and arrow flight for aiming games.
//!
//! The host engine owns the frame loop, input and transforms. Each tick it
//! passes the pointer position in and applies the returned angle:
//!
//! ```
//! use bowsight::math::{Point2, Transform2};
//! use bowsight::operations::facing::{compute_facing_angle, FaceTarget};
//!
//! let angle = compute_facing_angle(Point2::new(0.0, 1.0), Point2::origin());
//! assert!((angle.degrees() - 90.0).abs() < 1e-9);
//!
//! let mut bow = Transform2::translation(25.0, 350.0);
//! FaceTarget::new(Point2::new(425.0, 350.0)).execute(&mut bow);
//! ```

pub mod error;
pub mod math;
pub mod operations;

pub use error::{BowsightError, Result};
pub use math::Angle;
pub use operations::facing::compute_facing_angle;
