//! Control module - Simulation state machine, commands, and tick scheduling.

mod command;
mod simulation;
mod speed;
mod state;
mod ticker;

pub use command::*;
pub use simulation::*;
pub use speed::*;
pub use state::*;
pub use ticker::*;
