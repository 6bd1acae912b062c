//! Periodic tick source for the simulation controller.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::debug;

use super::Command;

/// Periodic scheduler posting [`Command::Tick`] at a fixed interval.
///
/// Runs on its own thread but never touches the simulation directly; each
/// tick is a message handed to the controller's command channel, which keeps
/// all generation advances on the controller thread. Dropping the ticker
/// stops the thread. Speed changes are handled by replacing the ticker with
/// one at the new interval.
pub struct Ticker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawn a ticker posting into `commands` every `interval`.
    pub fn spawn(interval: Duration, commands: Sender<Command>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        debug!("starting ticker at {:?}", interval);

        let handle = thread::spawn(move || {
            while !flag.load(Ordering::Relaxed) {
                thread::sleep(interval);
                if flag.load(Ordering::Relaxed) {
                    break;
                }
                // Receiver gone means the control loop has shut down
                if commands.send(Command::Tick).is_err() {
                    break;
                }
            }
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
