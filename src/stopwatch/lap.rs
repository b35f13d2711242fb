use serde::Serialize;

/// The start and finish times of a stopwatch at the moment a lap was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LapLog {
    start_time: i64,
    finish_time: i64,
}

impl LapLog {
    pub(crate) fn new(start_time: i64, finish_time: i64) -> Self {
        Self {
            start_time,
            finish_time,
        }
    }

    /// The time the stopwatch was started for this log.
    pub fn start_time(&self) -> i64 {
        self.start_time
    }

    /// The time the stopwatch was stopped for this log.
    pub fn finish_time(&self) -> i64 {
        self.finish_time
    }

    /// The time the stopwatch was running for this log.
    ///
    /// Negative when the finish time is stale or the clock went backwards.
    pub fn running_time(&self) -> i64 {
        self.finish_time - self.start_time
    }
}
