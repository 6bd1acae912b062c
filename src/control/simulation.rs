//! Simulation controller - owns the live grid and sequences execution states.

use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use log::{debug, warn};

use crate::compute::{Generation, Grid};
use crate::pattern::{PatternError, load_pattern};
use crate::schema::{ConfigError, SimConfig};

use super::{Command, SimulationState, Ticker};

/// Callbacks for the external renderer / status display.
///
/// `on_generation_advanced` fires on every redraw-worthy grid replacement:
/// each tick or manual step, after a reset, and after a successful pattern
/// load.
pub trait SimulationObserver: Send {
    fn on_generation_advanced(&mut self, _grid: &Grid, _generation: u64) {}
    fn on_load_failed(&mut self, _error: &PatternError) {}
}

/// Observer that ignores every notification.
pub struct NoopObserver;

impl SimulationObserver for NoopObserver {}

/// Command-driven Game of Life controller.
///
/// Exclusively owns the live [`Grid`] and the [`Generation`] engine.
/// Commands arrive through a channel and are applied one at a time on the
/// thread calling [`run`](Simulation::run), so grid edits, state changes and
/// generation advances never interleave. Observers and
/// [`snapshot`](Simulation::snapshot) callers only receive deep copies.
///
/// Invalid-for-state actions are the producer's concern (the original UI
/// disables the corresponding buttons); the controller applies whatever it
/// is sent, except ticks, which are suppressed outside Running/Resumed.
pub struct Simulation {
    config: SimConfig,
    grid: Grid,
    engine: Generation,
    state: SimulationState,
    generation_number: u64,
    interval: Duration,
    ticker: Option<Ticker>,
    commands: Sender<Command>,
    inbox: Receiver<Command>,
    observer: Box<dyn SimulationObserver>,
}

impl Simulation {
    /// Create a controller over a fresh all-dead grid.
    pub fn new(
        config: SimConfig,
        observer: Box<dyn SimulationObserver>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.rows, config.columns).expect("dimensions validated");
        let engine = Generation::new(&grid).expect("grid shape validated");
        let interval = config.tick_interval();
        let (commands, inbox) = mpsc::channel();

        Ok(Self {
            config,
            grid,
            engine,
            state: SimulationState::Initial,
            generation_number: 1,
            interval,
            ticker: None,
            commands,
            inbox,
            observer,
        })
    }

    /// Sender for posting commands from other threads (UI, ticker, tests).
    pub fn handle(&self) -> Sender<Command> {
        self.commands.clone()
    }

    /// Consume commands until [`Command::Shutdown`] or every sender is gone.
    ///
    /// Returns the controller so callers can inspect the final state.
    pub fn run(mut self) -> Self {
        while let Ok(command) = self.inbox.recv() {
            if command == Command::Shutdown {
                break;
            }
            self.apply(command);
        }
        self.ticker = None;
        self
    }

    /// Apply one command. Public for single-threaded embedding and tests.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Start => self.start(),
            Command::Pause => self.set_state(SimulationState::Paused),
            Command::Resume => self.set_state(SimulationState::Resumed),
            Command::NextGeneration => {
                self.set_state(SimulationState::SingleStep);
                self.step();
            }
            Command::Tick => {
                if self.state.advances_on_tick() {
                    self.step();
                }
            }
            Command::Reset => self.reset(),
            Command::Clear => {
                self.grid.clear();
                self.sync_engine();
            }
            Command::OpenPattern(path) => self.open_pattern(&path),
            Command::SetSpeed(speed) => {
                self.set_generations_per_second(speed.generations_per_second());
            }
            Command::ToggleCell { row, column } => {
                if row < self.grid.rows() && column < self.grid.columns() {
                    self.grid.toggle(row, column);
                    self.sync_engine();
                    self.mark_edited();
                }
            }
            Command::SetCell { row, column, alive } => {
                if row < self.grid.rows() && column < self.grid.columns() {
                    self.grid.set(row, column, alive);
                    self.sync_engine();
                    self.mark_edited();
                }
            }
            Command::Shutdown => {
                self.ticker = None;
            }
        }
    }

    /// Current execution state.
    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// Current generation counter (starts at 1).
    pub fn generation_number(&self) -> u64 {
        self.generation_number
    }

    /// Current tick interval.
    pub fn tick_interval(&self) -> Duration {
        self.interval
    }

    /// Deep copy of the live grid for rendering.
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    /// Configuration this controller was built from.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Change the tick rate; `gps == 0` leaves the interval unchanged.
    ///
    /// A running ticker is replaced by one at the new interval.
    pub fn set_generations_per_second(&mut self, gps: u32) {
        if gps == 0 {
            return;
        }
        self.interval = Duration::from_millis(1000 / u64::from(gps));
        if self.ticker.take().is_some() {
            self.ticker = Some(Ticker::spawn(self.interval, self.commands.clone()));
        }
    }

    fn start(&mut self) {
        self.generation_number = 1;
        self.set_state(SimulationState::Running);
        self.ticker = None;
        self.ticker = Some(Ticker::spawn(self.interval, self.commands.clone()));
    }

    /// One tick: advance, swap in the result, bump the counter, notify.
    fn step(&mut self) {
        self.grid = self.engine.advance();
        self.generation_number += 1;
        self.observer
            .on_generation_advanced(&self.grid, self.generation_number);
    }

    /// Back to Initial over a fresh all-dead grid and a fresh engine.
    fn reset(&mut self) {
        self.set_state(SimulationState::Initial);
        self.generation_number = 1;
        self.grid = Grid::new(self.config.rows, self.config.columns).expect("dimensions validated");
        self.engine = Generation::new(&self.grid).expect("grid shape validated");
        self.observer
            .on_generation_advanced(&self.grid, self.generation_number);
    }

    /// Reset, then decode the pattern file into the zeroed grid.
    ///
    /// On failure the grid is left reset-empty and the state Initial; this
    /// mirrors the original application, which resets before attempting the
    /// load.
    fn open_pattern(&mut self, path: &Path) {
        self.reset();
        match load_pattern(
            path,
            &mut self.grid,
            self.config.origin_row,
            self.config.origin_column,
        ) {
            Ok(()) => {
                self.engine =
                    Generation::new(&self.grid).expect("grid shape validated");
                self.generation_number = 1;
                self.set_state(SimulationState::Startable);
                self.observer
                    .on_generation_advanced(&self.grid, self.generation_number);
            }
            Err(error) => {
                warn!("pattern load from {} failed: {error}", path.display());
                self.observer.on_load_failed(&error);
            }
        }
    }

    /// First edit leaves the Initial state.
    fn mark_edited(&mut self) {
        if self.state == SimulationState::Initial {
            self.set_state(SimulationState::Startable);
        }
    }

    /// Push the live grid into the engine after a direct edit.
    fn sync_engine(&mut self) {
        self.engine
            .set_current(&self.grid)
            .expect("live grid and engine share the config's fixed shape");
    }

    fn set_state(&mut self, state: SimulationState) {
        if self.state != state {
            debug!("simulation state {:?} -> {:?}", self.state, state);
        }
        self.state = state;
    }
}
