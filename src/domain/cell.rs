/// Cell is one tracked square of the board.
/// `neighbors` is only meaningful for the generation that produced it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
    pub alive: bool,
    pub neighbors: u8,
}

impl Cell {
    /// Fresh live cell with no recorded neighbors
    pub const fn alive(x: u32, y: u32) -> Self {
        Self { x, y, alive: true, neighbors: 0 }
    }

    /// Dead cell that was touched by `neighbors` live cells
    pub const fn touched(x: u32, y: u32, neighbors: u8) -> Self {
        Self { x, y, alive: false, neighbors }
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        self.alive
    }

    /// The board's fixed rule:
    /// 1. Exactly 3 neighbors: alive
    /// 2. Exactly 2 neighbors: keep the previous state
    /// 3. Anything else: dead
    pub const fn next_state(alive: bool, neighbors: u8) -> bool {
        match neighbors {
            3 => true,
            2 => alive,
            _ => false,
        }
    }

    /// Pure function returning this cell advanced by one generation
    pub const fn evolve(self, neighbors: u8) -> Self {
        Self {
            x: self.x,
            y: self.y,
            alive: Self::next_state(self.alive, neighbors),
            neighbors,
        }
    }
}
