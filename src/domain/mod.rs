mod cell;
mod grid;
mod generation;
mod patterns;
mod algorithm;

pub use cell::Cell;
pub use grid::{GridSpec, NEIGHBOR_OFFSETS};
pub use generation::Generation;
pub use patterns::{Pattern, presets};
pub use algorithm::Algorithm;
