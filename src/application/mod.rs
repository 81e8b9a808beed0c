mod camera;
mod command;
mod scheduler;
mod session;

pub use camera::{Camera, Transform, MAX_SCALE, MIN_SCALE, ZOOM_PER_DELTA};
pub use command::Command;
pub use scheduler::FixedRate;
pub use session::{Session, TickOutcome};
