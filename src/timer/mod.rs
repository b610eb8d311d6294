//! Countdown state machine.
//!
//! [`TimerState`] is a plain value mutated only through the methods here, so the
//! transitions (Idle, Running, Finished) can be exercised without a terminal,
//! a clock or an audio device. Time itself is supplied from outside by the
//! [`ticker::Ticker`].

pub mod display;
pub mod duration;
pub mod ticker;

pub use display::{format_clock, Tone};
pub use duration::{Minutes, PRESETS};
pub use ticker::Ticker;

/// Coarse state derived from the timer flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not counting; either fresh or paused
    Idle,
    /// Counting down once per tick
    Running,
    /// Reached zero; terminal until reset or reconfigured
    Finished,
}

/// Result of feeding one tick to the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer was not running; nothing changed
    Ignored,
    /// One second was consumed and time remains
    Counted,
    /// This tick reached zero. Reported once per countdown.
    Expired,
}

/// Timer state owned by the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    total_seconds: u32,
    remaining_seconds: u32,
    is_running: bool,
    is_finished: bool,
}

impl TimerState {
    /// Create an idle timer configured for `minutes`
    pub fn new(minutes: Minutes) -> Self {
        let seconds = minutes.as_seconds();
        Self {
            total_seconds: seconds,
            remaining_seconds: seconds,
            is_running: false,
            is_finished: false,
        }
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn is_finished(&self) -> bool {
        self.is_finished
    }

    pub fn phase(&self) -> Phase {
        if self.is_finished {
            Phase::Finished
        } else if self.is_running {
            Phase::Running
        } else {
            Phase::Idle
        }
    }

    /// Configured duration in whole minutes (floored)
    pub fn configured_minutes(&self) -> u32 {
        self.total_seconds / 60
    }

    /// Whether an externally supplied duration differs from the configured one.
    ///
    /// Compared as real minutes, so a total that is not a whole number of
    /// minutes never matches.
    pub fn differs_from(&self, minutes: Minutes) -> bool {
        f64::from(minutes.get()) != f64::from(self.total_seconds) / 60.0
    }

    /// Replace the whole state with a fresh idle timer.
    ///
    /// Returns `false` and leaves the state alone while running.
    pub fn configure(&mut self, minutes: Minutes) -> bool {
        if self.is_running {
            return false;
        }
        *self = Self::new(minutes);
        true
    }

    /// Start or pause. Has no effect once finished.
    pub fn toggle(&mut self) {
        if self.is_finished {
            return;
        }
        self.is_running = !self.is_running;
    }

    /// Restore the configured duration and stop, from any state
    pub fn reset(&mut self) {
        self.remaining_seconds = self.total_seconds;
        self.is_running = false;
        self.is_finished = false;
    }

    /// Consume one second of a running countdown
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running || self.remaining_seconds == 0 {
            return TickOutcome::Ignored;
        }

        self.remaining_seconds -= 1;
        if self.remaining_seconds > 0 {
            return TickOutcome::Counted;
        }

        // Finished is only reachable from here, so this fires once per countdown
        self.is_running = false;
        self.is_finished = true;
        TickOutcome::Expired
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(Minutes::DEFAULT)
    }
}
