//! One-second repeating tick source.
//!
//! A [`Ticker`] only exists while the countdown runs: the owner creates one
//! when the timer enters Running and drops it on every way out, so a stale
//! deadline can never fire into an idle or finished timer.

use std::time::{Duration, Instant};

use tracing::trace;

/// Interval between countdown ticks
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Deadline-based repeating timer, polled from the event loop
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    next_due: Instant,
}

impl Ticker {
    /// Arm a ticker whose first tick is one period after `now`
    pub fn start(now: Instant) -> Self {
        Self::with_period(now, TICK_PERIOD)
    }

    pub fn with_period(now: Instant, period: Duration) -> Self {
        trace!(?period, "ticker armed");
        Self {
            period,
            next_due: now + period,
        }
    }

    /// Returns true at most once per call when a tick is due, then re-arms.
    ///
    /// If the loop fell far behind (e.g. the process was suspended), the next
    /// deadline is pushed from `now` instead of replaying every missed tick.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due += self.period;
        if self.next_due <= now {
            self.next_due = now + self.period;
        }
        true
    }

    /// Time left until the next tick
    pub fn until_next(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        trace!("ticker released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_due_before_one_period() {
        let start = Instant::now();
        let mut ticker = Ticker::start(start);
        assert!(!ticker.poll(start));
        assert!(!ticker.poll(start + Duration::from_millis(999)));
        assert!(ticker.poll(start + Duration::from_secs(1)));
    }

    #[test]
    fn fires_once_per_period_without_drift() {
        let start = Instant::now();
        let mut ticker = Ticker::start(start);

        assert!(ticker.poll(start + Duration::from_millis(1040)));
        // second deadline is still start + 2s, not 1040ms + 1s
        assert!(!ticker.poll(start + Duration::from_millis(1990)));
        assert!(ticker.poll(start + Duration::from_millis(2000)));
    }

    #[test]
    fn skips_missed_ticks_after_a_long_stall() {
        let start = Instant::now();
        let mut ticker = Ticker::start(start);
        let late = start + Duration::from_secs(10);

        assert!(ticker.poll(late));
        assert!(!ticker.poll(late));
        assert_eq!(ticker.until_next(late), TICK_PERIOD);
    }
}
