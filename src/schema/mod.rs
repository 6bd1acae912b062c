//! Schema module - Configuration types for the Game of Life application.

mod config;

pub use config::*;
