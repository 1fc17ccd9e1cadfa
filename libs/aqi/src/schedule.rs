//! Read and telemetry cadence
//!
//! The main loop polls the scheduler with the current uptime. A read cycle
//! is due every 2 s; telemetry rides along on read cycles whose timestamp
//! falls in the first 2 s of a 5 s window. That gating is approximate: over
//! a long run it averages one line per 5 s, but single windows may be
//! skipped when a read cycle lands just past them.

use crate::config::{SENSOR_READ_INTERVAL_MS, TELEMETRY_INTERVAL_MS};

/// Work due on this pass of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub now: u64,
    pub emit_telemetry: bool,
}

/// Holds the time of the last read cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scheduler {
    previous_millis: u64,
}

impl Scheduler {
    pub const fn new() -> Self {
        Self { previous_millis: 0 }
    }

    pub fn previous_millis(&self) -> u64 {
        self.previous_millis
    }

    /// Check whether a read cycle is due.
    ///
    /// # Arguments
    ///
    /// * `now` - Monotonic uptime in milliseconds
    ///
    /// # Returns
    ///
    /// `Some(Tick)` when at least 2 s have elapsed since the last read
    /// cycle, in which case `now` becomes the new reference point.
    ///
    /// # Examples
    ///
    /// ```
    /// use aqi::schedule::Scheduler;
    ///
    /// let mut scheduler = Scheduler::new();
    /// assert!(scheduler.poll(1999).is_none());
    ///
    /// let tick = scheduler.poll(6000).unwrap();
    /// assert!(tick.emit_telemetry);
    /// assert!(scheduler.poll(7999).is_none());
    /// ```
    pub fn poll(&mut self, now: u64) -> Option<Tick> {
        let elapsed = now.wrapping_sub(self.previous_millis);
        if elapsed < SENSOR_READ_INTERVAL_MS {
            return None;
        }

        self.previous_millis = now;
        Some(Tick {
            now,
            emit_telemetry: now % TELEMETRY_INTERVAL_MS < SENSOR_READ_INTERVAL_MS,
        })
    }
}
