//! Conway's Game of Life on a toroidal grid.
//!
//! A deterministic cellular automaton evolving a 2D grid of binary cell
//! states under the standard 2-3 birth/survival rule, with wrap-around
//! edges, driven by a timed or single-step controller.
//!
//! # Architecture
//!
//! The crate is split into four modules:
//!
//! - `schema`: Configuration types for the application
//! - `compute`: Grid storage and the generation-advance engine
//! - `pattern`: Pattern file decoding with wrap placement
//! - `control`: The simulation state machine, command channel, and ticker
//!
//! # Example
//!
//! ```rust
//! use game_of_life::{
//!     compute::{Generation, Grid},
//! };
//!
//! // Seed a blinker on a 10x10 torus
//! let mut grid = Grid::new(10, 10).unwrap();
//! grid.set(5, 4, true);
//! grid.set(5, 5, true);
//! grid.set(5, 6, true);
//!
//! // Advance two generations; the blinker has period 2
//! let mut engine = Generation::new(&grid).unwrap();
//! engine.advance();
//! let back = engine.advance();
//! assert_eq!(back, grid);
//! ```

pub mod compute;
pub mod control;
pub mod pattern;
pub mod schema;

// Re-export commonly used types
pub use compute::{Generation, Grid, GridStats};
pub use control::{Command, Simulation, SimulationObserver, SimulationState, Speed};
pub use schema::SimConfig;
