//! Commands consumed by the simulation controller.

use std::path::PathBuf;

use super::Speed;

/// Control requests for the simulation.
///
/// External producers (UI widgets, the ticker thread, tests) post commands
/// through a channel; the controller consumes them on a single thread, so
/// state transitions, grid edits and generation advances are serialized and
/// a tick handled after a reset always observes the post-reset state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Begin running: counter to 1, periodic ticks started.
    Start,
    /// Suppress tick advances without stopping the tick source.
    Pause,
    /// Re-enable tick advances after a pause.
    Resume,
    /// Advance exactly one generation regardless of timer state.
    NextGeneration,
    /// Return to the initial state over a fresh all-dead grid.
    Reset,
    /// Kill every cell in place without changing state.
    Clear,
    /// Reset, then seed the grid from a pattern file.
    OpenPattern(PathBuf),
    /// Change the tick rate.
    SetSpeed(Speed),
    /// Flip one cell.
    ToggleCell { row: usize, column: usize },
    /// Set one cell explicitly (mouse-drag painting).
    SetCell {
        row: usize,
        column: usize,
        alive: bool,
    },
    /// Periodic tick from the scheduler.
    Tick,
    /// Stop the control loop.
    Shutdown,
}
