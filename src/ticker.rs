use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, info};

/// A repeating timer on its own thread. Each elapsed interval sends the tick
/// count over a channel; `cancel` (or drop) stops the thread and joins it.
pub struct Ticker {
    ticks: Receiver<u64>,
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn spawn(interval: Duration) -> Self {
        let (tick_tx, ticks) = mpsc::channel();
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        info!("refresh ticker started ({}s)", interval.as_secs_f32());

        let handle = thread::spawn(move || {
            let mut count = 0u64;
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        count += 1;
                        if tick_tx.send(count).is_err() {
                            break;
                        }
                    }
                    // Explicit stop or the owning handle went away.
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            debug!("refresh ticker exited after {count} ticks");
        });

        Self {
            ticks,
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    /// Blocks until the next tick. `None` once the ticker has stopped.
    pub fn wait(&self) -> Option<u64> {
        if self.stop_tx.is_none() {
            return None;
        }
        self.ticks.recv().ok()
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn cancel(&mut self) {
        let Some(stop_tx) = self.stop_tx.take() else {
            return;
        };
        let _ = stop_tx.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        info!("refresh ticker cancelled");
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
