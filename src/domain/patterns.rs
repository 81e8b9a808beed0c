use super::Generation;
use crate::error::LifeError;

/// A named arrangement of live cells, relative to its top-left corner
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: u32,
    pub height: u32,
    pub cells: &'static [(u32, u32)],
}

impl Pattern {
    pub fn new(name: &'static str, description: &'static str, cells: &'static [(u32, u32)]) -> Self {
        let width = cells.iter().map(|&(x, _)| x).max().map_or(0, |x| x + 1);
        let height = cells.iter().map(|&(_, y)| y).max().map_or(0, |y| y + 1);
        Self { name, description, width, height, cells }
    }

    /// Add the pattern with its top-left corner at `(x, y)`.
    /// Cells falling off the board are skipped; returns how many were placed.
    pub fn place_on(&self, generation: &mut Generation, x: i64, y: i64) -> usize {
        let mut placed = 0;
        for &(dx, dy) in self.cells {
            if generation.add_life(x + dx as i64, y + dy as i64) {
                placed += 1;
            }
        }
        placed
    }

    /// Add the pattern centred on `(x, y)`
    pub fn place_centered(&self, generation: &mut Generation, x: i64, y: i64) -> usize {
        self.place_on(generation, x - self.width as i64 / 2, y - self.height as i64 / 2)
    }
}

/// Small library of classic seeds
pub mod presets {
    use super::*;

    pub fn glider() -> Pattern {
        Pattern::new("glider", "Moves diagonally (period 4)", &[
            (1, 0),
            (2, 1),
            (0, 2), (1, 2), (2, 2),
        ])
    }

    pub fn blinker() -> Pattern {
        Pattern::new("blinker", "Oscillator (period 2)", &[(0, 0), (1, 0), (2, 0)])
    }

    pub fn block() -> Pattern {
        Pattern::new("block", "Still life", &[
            (0, 0), (1, 0),
            (0, 1), (1, 1),
        ])
    }

    /// Lightweight spaceship
    pub fn lwss() -> Pattern {
        Pattern::new("lwss", "Lightweight spaceship (period 4)", &[
            (1, 0), (4, 0),
            (0, 1),
            (0, 2), (4, 2),
            (0, 3), (1, 3), (2, 3), (3, 3),
        ])
    }

    pub fn r_pentomino() -> Pattern {
        Pattern::new("r-pentomino", "Methuselah, stabilizes at gen 1103", &[
            (1, 0), (2, 0),
            (0, 1), (1, 1),
            (1, 2),
        ])
    }

    pub fn acorn() -> Pattern {
        Pattern::new("acorn", "Methuselah, stabilizes at gen 5206", &[
            (1, 0),
            (3, 1),
            (0, 2), (1, 2), (4, 2), (5, 2), (6, 2),
        ])
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![glider(), blinker(), block(), lwss(), r_pentomino(), acorn()]
    }

    /// Look a preset up by name, ignoring case
    pub fn find(name: &str) -> Result<Pattern, LifeError> {
        all_patterns()
            .into_iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| LifeError::UnknownPattern(name.to_owned()))
    }
}
