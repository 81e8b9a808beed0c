use rand::{SeedableRng, rngs::StdRng};

use super::{Camera, Command};
use crate::config::Config;
use crate::domain::{Algorithm, Generation, GridSpec, Pattern};
use crate::error::Result;
use crate::rendering::{PixelBuffer, Rgba};

/// What a simulation tick did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Advanced one generation
    Stepped,
    /// Paused; the board was only repainted
    Paused,
    /// First tick after a reset; the fresh board was kept as-is
    ResetConsumed,
}

/// Session owns all mutable state shared by the simulation and render loops.
/// Both loops and the input handlers run on one thread and borrow it in turn.
pub struct Session {
    generation: Generation,
    buffer: PixelBuffer,
    camera: Camera,
    algorithm: Algorithm,
    paused: bool,
    pending_reset: bool,
    paint_color: Rgba,
    cursor: (i64, i64),
    steps: u64,
    rng: StdRng,
}

impl Session {
    /// Empty board with a camera centred on it
    pub fn new(grid: GridSpec, viewport: (f32, f32)) -> Self {
        Self {
            generation: Generation::new(grid),
            buffer: PixelBuffer::new(grid.side(), grid.side()),
            camera: Camera::new(grid.side(), viewport.0, viewport.1),
            algorithm: Algorithm::default(),
            paused: false,
            pending_reset: false,
            paint_color: Rgba::PAINT,
            cursor: (0, 0),
            steps: 0,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Build a session from validated command-line settings
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let viewport = (config.viewport_width as f32, config.viewport_height as f32);
        let mut session = Self::new(config.grid(), viewport)
            .with_algorithm(config.algorithm)
            .with_paint_color(config.paint_rgba())
            .with_paused(config.paused);
        if let Some(seed) = config.rng_seed {
            session = session.with_seed(seed);
        }
        if config.seed_on_start {
            session.reset(config.seed_size);
        }
        if let Some(pattern) = config.pattern()? {
            let placed = session.place_pattern(&pattern);
            log::info!("placed {} ({} cells)", pattern.name, placed);
        }
        log::info!(
            "board {0}x{0}, {1} step ({2}), simulation {3} Hz, render {4} Hz",
            config.grid_size,
            config.algorithm,
            config.algorithm.description(),
            config.sim_hz,
            config.render_hz
        );
        Ok(session)
    }

    /// Use a seeded RNG for reproducible resets
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_paint_color(mut self, color: Rgba) -> Self {
        self.paint_color = color;
        self
    }

    pub fn with_paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    pub fn grid(&self) -> GridSpec {
        self.generation.grid()
    }

    pub fn generation(&self) -> &Generation {
        &self.generation
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_reset_pending(&self) -> bool {
        self.pending_reset
    }

    pub fn paint_color(&self) -> Rgba {
        self.paint_color
    }

    /// Last known pointer position in grid cells
    pub fn cursor(&self) -> (i64, i64) {
        self.cursor
    }

    /// Generations computed since the last reset
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Apply one input command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveCursor { x, y } => {
                self.cursor = self.camera.screen_to_cell(x, y);
            }
            Command::Paint { x, y } => self.add_life(x, y),
            Command::PaintAt { x, y } => {
                let (gx, gy) = self.camera.screen_to_cell(x, y);
                self.add_life(gx, gy);
            }
            Command::Pan { dx, dy } => {
                self.camera.pan(dx, dy);
                log::debug!("camera moved to ({:.0}, {:.0})", self.camera.x, self.camera.y);
            }
            Command::Zoom(delta) => {
                self.camera.zoom(delta);
                log::debug!("camera scale {:.1}", self.camera.scale);
            }
            Command::TogglePause => {
                self.paused = !self.paused;
                log::info!("{}", if self.paused { "paused" } else { "resumed" });
            }
            Command::ResetCamera => {
                let side = self.grid().side();
                self.camera.reset(side);
            }
            Command::Reset(size) => self.reset(size),
            Command::Resize { width, height } => self.camera.resize(width, height),
            Command::SetPaintColor(color) => {
                self.paint_color = color;
                log::debug!("paint colour {}", color.to_hex());
            }
        }
    }

    /// Mark a cell alive and paint it; off-board coordinates are ignored
    pub fn add_life(&mut self, x: i64, y: i64) {
        if self.generation.add_life(x, y) {
            self.buffer.set_pixel(x, y, Rgba::LIFE);
        }
    }

    /// Place a preset centred on the board
    pub fn place_pattern(&mut self, pattern: &Pattern) -> usize {
        let centre = self.grid().side() as i64 / 2;
        let placed = pattern.place_centered(&mut self.generation, centre, centre);
        self.draw_generation();
        placed
    }

    /// Replace the board with a random square of side `size` and
    /// suppress the next simulation step
    pub fn reset(&mut self, size: u32) {
        self.generation = Generation::random_square(self.grid(), size, &mut self.rng);
        self.pending_reset = true;
        self.steps = 0;
        self.buffer.clear();
        self.draw_generation();
        log::info!("board reset: size {}, {} live cells", size, self.generation.live_count());
    }

    /// One simulation tick: step unless paused or a reset is pending, then repaint
    pub fn simulation_tick(&mut self) -> TickOutcome {
        let outcome = if self.pending_reset {
            self.pending_reset = false;
            TickOutcome::ResetConsumed
        } else if self.paused {
            TickOutcome::Paused
        } else {
            self.generation = self.generation.step_with(self.algorithm);
            self.steps += 1;
            TickOutcome::Stepped
        };
        self.draw_generation();
        outcome
    }

    /// Paint every tracked cell; dead tracked cells restore the background
    fn draw_generation(&mut self) {
        for cell in self.generation.iter() {
            let color = if cell.alive { Rgba::LIFE } else { Rgba::BACKGROUND };
            self.buffer.set_pixel(cell.x as i64, cell.y as i64, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    fn session() -> Session {
        Session::new(GridSpec::new(64), (100.0, 100.0)).with_seed(3)
    }

    #[test]
    fn test_paint_marks_cell_and_pixel() {
        let mut session = session();
        session.apply(Command::Paint { x: 5, y: 6 });
        assert!(session.generation().is_alive(5, 6));
        assert_eq!(session.buffer().get(5, 6), Some(Rgba::LIFE));
    }

    #[test]
    fn test_paint_off_board_is_ignored() {
        let mut session = session();
        session.apply(Command::Paint { x: -3, y: 6 });
        session.apply(Command::Paint { x: 64, y: 0 });
        assert!(session.generation().is_empty());
    }

    #[test]
    fn test_paused_tick_keeps_generation() {
        let mut session = session().with_paused(true);
        session.place_pattern(&presets::blinker());
        let before = session.generation().clone();
        assert_eq!(session.simulation_tick(), TickOutcome::Paused);
        assert_eq!(session.generation(), &before);
        assert_eq!(session.steps(), 0);

        session.apply(Command::TogglePause);
        assert_eq!(session.simulation_tick(), TickOutcome::Stepped);
        assert_ne!(session.generation(), &before);
    }

    #[test]
    fn test_dying_cell_is_repainted_background() {
        let mut session = session();
        session.add_life(10, 10);
        session.simulation_tick();
        assert_eq!(session.buffer().get(10, 10), Some(Rgba::BACKGROUND));
    }

    #[test]
    fn test_cursor_follows_camera() {
        let mut session = session();
        // Camera centred on (32, 32) in a 100×100 viewport at scale 1
        session.apply(Command::MoveCursor { x: 50.0, y: 50.0 });
        assert_eq!(session.cursor(), (32, 32));
        session.apply(Command::Zoom(10.0));
        session.apply(Command::MoveCursor { x: 52.5, y: 50.0 });
        assert_eq!(session.cursor(), (33, 32));
    }

    #[test]
    fn test_paint_at_uses_camera_after_earlier_commands() {
        let mut session = session();
        // Zoom lands before the paint in the same batch
        session.apply(Command::Zoom(10.0));
        session.apply(Command::MoveCursor { x: 52.5, y: 50.0 });
        session.apply(Command::PaintAt { x: 52.5, y: 50.0 });
        assert_eq!(session.cursor(), (33, 32));
        assert!(session.generation().is_alive(33, 32));
    }

    #[test]
    fn test_reset_camera_command() {
        let mut session = session();
        session.apply(Command::Zoom(50.0));
        session.apply(Command::Pan { dx: 40.0, dy: -20.0 });
        session.apply(Command::ResetCamera);
        let camera = session.camera();
        assert_eq!((camera.x, camera.y, camera.scale), (32.0, 32.0, 1.0));
    }

    #[test]
    fn test_paint_colour_command() {
        let mut session = session();
        session.apply(Command::SetPaintColor(Rgba::LIFE));
        assert_eq!(session.paint_color(), Rgba::LIFE);
    }
}
