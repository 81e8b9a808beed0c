/// GridSpec describes the fixed square board and its linear key scheme.
/// Coordinates outside `[0, side)` are rejected, never wrapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpec {
    side: u32,
}

/// Offsets of the 8-connected neighborhood
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

impl GridSpec {
    /// Side length used by the original web canvas
    pub const DEFAULT_SIDE: u32 = 720;

    pub const fn new(side: u32) -> Self {
        Self { side }
    }

    pub const fn side(&self) -> u32 {
        self.side
    }

    /// Total number of addressable cells
    pub const fn len(&self) -> usize {
        self.side as usize * self.side as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.side == 0
    }

    /// Check whether a signed coordinate lies on the board
    pub const fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.side as i64 && y < self.side as i64
    }

    /// Linear key `y * side + x` for on-board coordinates
    pub const fn key(&self, x: i64, y: i64) -> Option<usize> {
        if self.contains(x, y) {
            Some(y as usize * self.side as usize + x as usize)
        } else {
            None
        }
    }

    /// Inverse of [`GridSpec::key`]
    pub const fn coords(&self, key: usize) -> (u32, u32) {
        let side = self.side as usize;
        ((key % side) as u32, (key / side) as u32)
    }

    /// On-board neighbors of `(x, y)` as `(x, y, key)`
    pub fn neighbors(&self, x: u32, y: u32) -> impl Iterator<Item = (u32, u32, usize)> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dx, dy)| {
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            self.key(nx, ny).map(|key| (nx as u32, ny as u32, key))
        })
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIDE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_row_major() {
        let grid = GridSpec::new(10);
        assert_eq!(grid.key(3, 2), Some(23));
        assert_eq!(grid.coords(23), (3, 2));
    }

    #[test]
    fn test_out_of_range_has_no_key() {
        let grid = GridSpec::new(10);
        assert_eq!(grid.key(-1, 0), None);
        assert_eq!(grid.key(0, -1), None);
        assert_eq!(grid.key(10, 0), None);
        assert_eq!(grid.key(0, 10), None);
    }

    #[test]
    fn test_corner_has_three_neighbors() {
        let grid = GridSpec::new(10);
        assert_eq!(grid.neighbors(0, 0).count(), 3);
        assert_eq!(grid.neighbors(9, 9).count(), 3);
        assert_eq!(grid.neighbors(5, 5).count(), 8);
    }

    #[test]
    fn test_edge_does_not_wrap_rows() {
        let grid = GridSpec::new(10);
        let keys: Vec<usize> = grid.neighbors(9, 5).map(|(_, _, k)| k).collect();
        // (0, 6) would be key 60 under raw index arithmetic
        assert!(!keys.contains(&60));
        assert_eq!(keys.len(), 5);
    }
}
