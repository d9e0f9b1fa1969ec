//! Chess clock and the timer query the game consumes.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::types::Color;

/// The only thing the game asks a clock.
pub trait Timer {
    fn has_expired(&self, color: Color) -> bool;
}

/// Time control settings. An initial time of zero means untimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeControl {
    pub initial_secs: u64,
    #[serde(default)]
    pub increment_secs: u64,
}

impl TimeControl {
    pub fn new(minutes: u64, increment_secs: u64) -> Self {
        Self {
            initial_secs: minutes * 60,
            increment_secs,
        }
    }

    pub fn blitz() -> Self {
        Self::new(5, 0)
    }
    pub fn rapid() -> Self {
        Self::new(10, 5)
    }
    pub fn classical() -> Self {
        Self::new(90, 30)
    }
    pub fn untimed() -> Self {
        Self::new(0, 0)
    }

    pub fn is_untimed(&self) -> bool {
        self.initial_secs == 0
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::blitz()
    }
}

impl fmt::Display for TimeControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_untimed() {
            write!(f, "untimed")
        } else {
            write!(f, "{}+{}", self.initial_secs / 60, self.increment_secs)
        }
    }
}

/// Two-sided clock. Only one side runs at a time; stopping it charges the
/// elapsed time and adds the increment.
#[derive(Debug, Clone)]
pub struct ChessClock {
    time_control: TimeControl,
    remaining_ms: [u64; 2],
    started_at: Option<Instant>,
    running_for: Option<Color>,
}

impl Default for ChessClock {
    fn default() -> Self {
        Self::new(TimeControl::default())
    }
}

impl ChessClock {
    pub fn new(time_control: TimeControl) -> Self {
        let initial_ms = time_control.initial_secs * 1000;
        Self {
            time_control,
            remaining_ms: [initial_ms; 2],
            started_at: None,
            running_for: None,
        }
    }

    pub fn time_control(&self) -> TimeControl {
        self.time_control
    }

    pub fn is_enabled(&self) -> bool {
        !self.time_control.is_untimed()
    }

    pub fn running_for(&self) -> Option<Color> {
        self.running_for
    }

    /// Starts `color`'s clock, stopping the other side's first.
    pub fn start(&mut self, color: Color) {
        if !self.is_enabled() {
            return;
        }
        if self.running_for.is_some() {
            self.stop_and_increment();
        }
        self.started_at = Some(Instant::now());
        self.running_for = Some(color);
    }

    pub fn stop_and_increment(&mut self) {
        if let (Some(started), Some(color)) = (self.started_at.take(), self.running_for.take()) {
            let elapsed_ms = started.elapsed().as_millis() as u64;
            let increment_ms = self.time_control.increment_secs * 1000;
            let left = &mut self.remaining_ms[color.idx()];
            // A fallen flag stays down
            *left = match left.saturating_sub(elapsed_ms) {
                0 => 0,
                rest => rest + increment_ms,
            };
        }
    }

    /// Remaining time including the portion used by a running clock.
    pub fn remaining(&self, color: Color) -> Duration {
        let base_ms = self.remaining_ms[color.idx()];
        let elapsed_ms = match (self.running_for, self.started_at) {
            (Some(c), Some(started)) if c == color => started.elapsed().as_millis() as u64,
            _ => 0,
        };
        Duration::from_millis(base_ms.saturating_sub(elapsed_ms))
    }

    /// Overrides the stored remaining time, e.g. when resuming a saved game.
    pub fn set_remaining(&mut self, color: Color, remaining: Duration) {
        self.remaining_ms[color.idx()] = remaining.as_millis() as u64;
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.time_control);
    }

    /// MM:SS, with tenths under ten seconds.
    pub fn format(duration: Duration) -> String {
        let total_secs = duration.as_secs();
        let mins = total_secs / 60;
        let secs = total_secs % 60;
        if duration.as_millis() < 10_000 {
            let tenths = (duration.as_millis() % 1000) / 100;
            format!("{mins}:{secs:02}.{tenths}")
        } else {
            format!("{mins}:{secs:02}")
        }
    }
}

impl Timer for ChessClock {
    fn has_expired(&self, color: Color) -> bool {
        self.is_enabled() && self.remaining(color).is_zero()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod clock_tests;
