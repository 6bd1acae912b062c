//! Compute module - Grid storage and the generation-advance engine.

mod generation;
mod grid;
mod stats;

pub use generation::*;
pub use grid::*;
pub use stats::*;
