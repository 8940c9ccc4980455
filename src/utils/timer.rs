use std::time::{Duration, Instant};

/// An accumulating wall-clock stopwatch.
///
/// Every `start`/`stop` cycle adds the elapsed time to the total, until
/// [`Timer::reset`] is called.
#[derive(Copy, Clone, Debug, Default)]
pub struct Timer {
    total: Duration,
    started: Option<Instant>,
}

impl Timer {
    /// Creates a stopped timer with a zero accumulated time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts measuring time. Restarting a running timer discards the pending interval.
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Stops the timer and accumulates the time elapsed since the last `start`.
    ///
    /// Does nothing if the timer is not running.
    pub fn stop(&mut self) {
        if let Some(started) = self.started.take() {
            self.total += started.elapsed();
        }
    }

    /// Resets the accumulated time to zero and stops the timer.
    pub fn reset(&mut self) {
        self.total = Duration::ZERO;
        self.started = None;
    }

    /// Is this timer currently running?
    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// The accumulated time.
    pub fn elapsed(&self) -> Duration {
        self.total
    }

    /// The accumulated time, in seconds.
    pub fn seconds(&self) -> f64 {
        self.total.as_secs_f64()
    }
}
