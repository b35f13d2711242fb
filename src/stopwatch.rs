use crate::clock::{Clock, SystemClock};
use std::sync::{Mutex, MutexGuard, PoisonError};

pub mod lap;

pub use lap::LapLog;

#[derive(Debug, Default)]
struct State {
    start_time: i64,
    finish_time: i64,
    running: bool,
    laps: Vec<LapLog>,
}

/// A thread-safe stopwatch that keeps a log of laps.
///
/// Every operation holds a single lock for its whole body, so readers never
/// observe a start time, finish time and running flag from different calls.
/// Timestamps are milliseconds as reported by the [`Clock`].
#[derive(Debug, Default)]
pub struct StopWatch<C = SystemClock> {
    clock: C,
    state: Mutex<State>,
}

impl StopWatch {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> StopWatch<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            state: Mutex::default(),
        }
    }

    // Each operation leaves the state consistent, so a panic elsewhere
    // while holding the lock does not invalidate it.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts the stopwatch. Does nothing if it is already running.
    pub fn start(&self) {
        let mut state = self.lock();

        if state.running {
            tracing::trace!(start_time = state.start_time, "stopwatch already running");
            return;
        }

        state.running = true;
        state.start_time = self.clock.now_millis();

        tracing::debug!(start_time = state.start_time, "started stopwatch");
    }

    /// Stops the stopwatch, recording the finish time even if it was not running.
    pub fn stop(&self) {
        let mut state = self.lock();

        state.running = false;
        state.finish_time = self.clock.now_millis();

        tracing::debug!(finish_time = state.finish_time, "stopped stopwatch");
    }

    /// Logs the current start and finish times as a lap.
    ///
    /// The clock is not read: a lap taken while running keeps the finish time
    /// of the previous stop.
    pub fn lap(&self) {
        let mut state = self.lock();
        let lap = LapLog::new(state.start_time, state.finish_time);

        state.laps.push(lap);

        tracing::debug!(?lap, laps = state.laps.len(), "recorded lap");
    }

    /// Clears all lap logs.
    pub fn clear(&self) {
        let mut state = self.lock();
        let cleared = state.laps.len();

        state.laps.clear();

        tracing::debug!(cleared, "cleared laps");
    }

    /// A copy of the recorded laps, oldest first.
    pub fn laps(&self) -> Vec<LapLog> {
        self.lock().laps.clone()
    }

    pub fn lap_count(&self) -> usize {
        self.lock().laps.len()
    }

    pub fn is_running(&self) -> bool {
        self.lock().running
    }
}
