//! Command-line configuration shared by the binaries.

use clap::Parser;

use crate::domain::{Algorithm, GridSpec, Pattern, presets};
use crate::error::{LifeError, Result};
use crate::rendering::Rgba;

#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Config {
    /// Side of the square board in cells
    #[arg(long, default_value_t = GridSpec::DEFAULT_SIDE)]
    pub grid_size: u32,

    /// Initial window width in pixels
    #[arg(long, default_value_t = 500)]
    pub viewport_width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 500)]
    pub viewport_height: u32,

    /// Simulation ticks per second
    #[arg(long, default_value_t = 60)]
    pub sim_hz: u32,

    /// Render ticks per second
    #[arg(long, default_value_t = 60)]
    pub render_hz: u32,

    /// Side of the random square seeded by a reset
    #[arg(long, default_value_t = 90)]
    pub seed_size: u32,

    /// Seed the board with a random square on start
    #[arg(long)]
    pub seed_on_start: bool,

    /// Cursor paint colour as #RRGGBB or #RGB; unreadable values paint black
    #[arg(long, default_value = "#FF0000")]
    pub paint_color: String,

    /// Step implementation: sparse or sparse-parallel
    #[arg(long, default_value = "sparse")]
    pub algorithm: Algorithm,

    /// Preset placed at the board centre on start
    #[arg(long)]
    pub pattern: Option<String>,

    /// Start paused
    #[arg(long)]
    pub paused: bool,

    /// Fixed RNG seed for reproducible resets
    #[arg(long)]
    pub rng_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: GridSpec::DEFAULT_SIDE,
            viewport_width: 500,
            viewport_height: 500,
            sim_hz: 60,
            render_hz: 60,
            seed_size: 90,
            seed_on_start: false,
            paint_color: Rgba::PAINT.to_hex(),
            algorithm: Algorithm::default(),
            pattern: None,
            paused: false,
            rng_seed: None,
        }
    }
}

impl Config {
    pub fn grid(&self) -> GridSpec {
        GridSpec::new(self.grid_size)
    }

    /// Reject settings the loops cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(LifeError::InvalidConfig("grid size must be positive".into()));
        }
        if self.grid_size > u16::MAX as u32 {
            return Err(LifeError::InvalidConfig(format!(
                "grid size {} exceeds texture limit {}",
                self.grid_size,
                u16::MAX
            )));
        }
        if self.sim_hz == 0 || self.render_hz == 0 {
            return Err(LifeError::InvalidConfig("tick rates must be positive".into()));
        }
        if self.seed_size > self.grid_size {
            return Err(LifeError::InvalidConfig(format!(
                "seed size {} larger than grid {}",
                self.seed_size, self.grid_size
            )));
        }
        if self.viewport_width == 0 || self.viewport_height == 0 {
            return Err(LifeError::InvalidConfig("viewport must be non-empty".into()));
        }
        self.pattern()?;
        Ok(())
    }

    /// Resolve the paint colour, logging and falling back to opaque black
    pub fn paint_rgba(&self) -> Rgba {
        Rgba::parse_or_default(&self.paint_color)
    }

    /// Resolve the optional start pattern
    pub fn pattern(&self) -> Result<Option<Pattern>> {
        self.pattern.as_deref().map(presets::find).transpose()
    }
}
