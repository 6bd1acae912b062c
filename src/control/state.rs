//! Simulation controller states.

/// Execution state of the simulation controller.
///
/// Exactly one state is active at a time. The state gates which control
/// actions are currently meaningful; it holds no grid data itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    /// Fresh or reset grid, waiting for cell edits or a pattern load.
    Initial,
    /// Grid has content; Start and single stepping are available.
    Startable,
    /// Periodic ticks advance the simulation.
    Running,
    /// Ticks are delivered but suppressed.
    Paused,
    /// Resumed after a pause; tick-equivalent to Running.
    Resumed,
    /// Advancing one generation at a time on request.
    SingleStep,
}

impl SimulationState {
    /// Whether a periodic tick should advance the generation in this state.
    #[inline]
    pub fn advances_on_tick(self) -> bool {
        matches!(self, SimulationState::Running | SimulationState::Resumed)
    }
}
