//! Bowsight demo: a bow that follows a scripted pointer, then fires.
//!
//! Usage:
//! ```text
//! cargo run --example aim
//! RUST_LOG=bowsight=trace cargo run --example aim
//! ```

use bowsight::math::{Point2, Transform2};
use bowsight::operations::facing::{forward, DegeneratePolicy, FaceTarget};
use bowsight::operations::flight::{
    Arena, ArrowFlight, ArrowShot, FlightParams, FlightStatus, HitTarget, TargetParams, Trajectory,
};

const TICK: f64 = 0.016;
const SHOT_SPEED: f64 = 420.0;

fn main() -> bowsight::Result<()> {
    // Default: WARN for everything, INFO for bowsight and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=bowsight=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("aim=info".parse().unwrap_or_default())
        .add_directive("bowsight=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut bow = Transform2::translation(25.0, 350.0);
    let pointer_path = [
        Point2::new(400.0, 350.0),
        Point2::new(400.0, 200.0),
        Point2::new(25.0, 350.0),
        Point2::new(25.0, 100.0),
        Point2::new(430.0, 300.0),
    ];

    for (tick, pointer) in pointer_path.iter().enumerate() {
        let applied = FaceTarget::new(*pointer)
            .with_policy(DegeneratePolicy::Hold)
            .execute(&mut bow);
        let f = forward(&bow);
        match applied {
            Some(angle) => tracing::info!(tick, %angle, fx = f.x, fy = f.y, "bow turned"),
            None => tracing::info!(tick, fx = f.x, fy = f.y, "pointer on bow, rotation held"),
        }
    }

    let start = Point2::from(bow.translation.vector);
    let shot = ArrowShot::aimed(start, pointer_path[pointer_path.len() - 1], SHOT_SPEED)?;
    let target = HitTarget::new(Point2::new(425.0, 350.0), TargetParams::default());
    let center = target.center();
    tracing::info!(angle = %shot.angle(), cx = center.x, cy = center.y, "arrow loosed");

    let trajectory = Trajectory::new(shot, FlightParams::default());
    let flight = ArrowFlight::new(trajectory, target, Arena::default());

    match flight.run(TICK, 10.0)? {
        Some((t, status)) => {
            let p = status.position();
            if let FlightStatus::Hit { body_part, .. } = status {
                tracing::info!(t, x = p.x, y = p.y, %body_part, "hit");
            } else {
                tracing::info!(t, x = p.x, y = p.y, "missed");
            }
        }
        None => tracing::warn!("arrow still in flight after 10s"),
    }

    Ok(())
}
