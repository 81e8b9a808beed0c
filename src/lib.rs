// Domain layer - board rules and sparse generations
pub mod domain;

// Application layer - session context, camera, tick scheduling
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

pub mod config;
pub mod error;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Generation, GridSpec, Pattern, presets};
pub use application::{Camera, Command, FixedRate, Session, TickOutcome};
pub use rendering::{PixelBuffer, Renderer, Rgba, draw_hud};
pub use config::Config;
pub use error::LifeError;
