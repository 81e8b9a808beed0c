//! Sparse generation of tracked cells.
//!
//! Only cells that are alive, or that touch a live cell, are materialised.
//! A key missing from the mapping is a dead cell with no live neighbors.

use std::collections::HashMap;

use rand::Rng;
use rayon::prelude::*;

use super::{Algorithm, Cell, GridSpec};

/// Neighbor tallies keyed by linear coordinate
type NeighborCounts = HashMap<usize, u8>;

/// Generation maps linear keys to the cells tracked at one simulation tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Generation {
    grid: GridSpec,
    cells: HashMap<usize, Cell>,
}

impl Generation {
    /// Create an empty generation on the given board
    pub fn new(grid: GridSpec) -> Self {
        Self {
            grid,
            cells: HashMap::new(),
        }
    }

    /// Seed `size * size / 5` distinct live cells inside a `size`-sided square
    /// centred on the board. `size` is clamped to the board side.
    pub fn random_square<R: Rng + ?Sized>(grid: GridSpec, size: u32, rng: &mut R) -> Self {
        let mut generation = Self::new(grid);
        let size = size.min(grid.side());
        if size == 0 {
            return generation;
        }

        let origin = grid.side() / 2 - size / 2;
        let area = size as usize * size as usize;
        let amount = area / 5;

        for idx in rand::seq::index::sample(rng, area, amount) {
            let x = origin + (idx % size as usize) as u32;
            let y = origin + (idx / size as usize) as u32;
            generation.add_life(x as i64, y as i64);
        }
        generation
    }

    pub const fn grid(&self) -> GridSpec {
        self.grid
    }

    /// Number of tracked cells, alive or touched
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of live cells
    pub fn live_count(&self) -> usize {
        self.cells.values().filter(|cell| cell.is_alive()).count()
    }

    /// Get the tracked cell at `(x, y)`, if any
    pub fn get(&self, x: i64, y: i64) -> Option<&Cell> {
        self.grid.key(x, y).and_then(|key| self.cells.get(&key))
    }

    pub fn is_alive(&self, x: i64, y: i64) -> bool {
        self.get(x, y).is_some_and(|cell| cell.is_alive())
    }

    /// Iterate over every tracked cell
    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.values()
    }

    /// Iterate over live cells only
    pub fn live_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.values().filter(|cell| cell.is_alive())
    }

    /// Mark `(x, y)` alive, creating it if absent.
    /// Off-board coordinates are ignored; returns whether the cell was placed.
    pub fn add_life(&mut self, x: i64, y: i64) -> bool {
        let Some(key) = self.grid.key(x, y) else {
            return false;
        };
        self.cells
            .entry(key)
            .and_modify(|cell| cell.alive = true)
            .or_insert_with(|| Cell::alive(x as u32, y as u32));
        true
    }

    /// Produce the next generation with the serial counter
    pub fn step(&self) -> Self {
        self.assemble(self.count_neighbors())
    }

    /// Produce the next generation, counting neighbors in parallel with rayon
    pub fn step_parallel(&self) -> Self {
        self.assemble(self.count_neighbors_parallel())
    }

    /// Dispatch to the selected step implementation
    pub fn step_with(&self, algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Sparse => self.step(),
            Algorithm::SparseParallel => self.step_parallel(),
        }
    }

    /// Pass 1: every live cell adds one to each on-board neighbor.
    /// Reads only `self`, so the result does not depend on iteration order.
    fn count_neighbors(&self) -> NeighborCounts {
        let mut counts = NeighborCounts::with_capacity(self.cells.len() * 4);
        for cell in self.live_cells() {
            for (_, _, key) in self.grid.neighbors(cell.x, cell.y) {
                *counts.entry(key).or_insert(0) += 1;
            }
        }
        counts
    }

    fn count_neighbors_parallel(&self) -> NeighborCounts {
        self.cells
            .par_iter()
            .filter(|(_, cell)| cell.is_alive())
            .fold(NeighborCounts::new, |mut counts, (_, cell)| {
                for (_, _, key) in self.grid.neighbors(cell.x, cell.y) {
                    *counts.entry(key).or_insert(0) += 1;
                }
                counts
            })
            .reduce(NeighborCounts::new, |mut merged, partial| {
                for (key, n) in partial {
                    *merged.entry(key).or_insert(0) += n;
                }
                merged
            })
    }

    /// Pass 2: apply the rule to every live cell and every touched cell
    fn assemble(&self, counts: NeighborCounts) -> Self {
        let mut cells = HashMap::with_capacity(counts.len());

        for (&key, cell) in self.cells.iter().filter(|(_, cell)| cell.is_alive()) {
            let neighbors = counts.get(&key).copied().unwrap_or(0);
            cells.insert(key, cell.evolve(neighbors));
        }

        for (key, neighbors) in counts {
            cells.entry(key).or_insert_with(|| {
                let (x, y) = self.grid.coords(key);
                Cell::touched(x, y, 0).evolve(neighbors)
            });
        }

        Self { grid: self.grid, cells }
    }
}
