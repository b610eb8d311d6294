//! Presentation attributes derived from [`TimerState`].
//!
//! Everything here is recomputed on each draw; nothing is stored.

use super::TimerState;

/// Urgency level used to pick colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Plenty of time left
    Ok,
    /// Half or less remaining
    Warning,
    /// Almost out of time
    Critical,
    /// Countdown finished
    Expired,
}

impl TimerState {
    /// Share of the configured duration already consumed, clamped to `[0, 100]`
    pub fn elapsed_percentage(&self) -> f64 {
        let total = f64::from(self.total_seconds());
        let elapsed = f64::from(self.total_seconds() - self.remaining_seconds());
        (elapsed / total * 100.0).clamp(0.0, 100.0)
    }

    /// Share of the configured duration still left
    pub fn remaining_percentage(&self) -> f64 {
        f64::from(self.remaining_seconds()) / f64::from(self.total_seconds()) * 100.0
    }

    /// Tone of the big clock digits
    pub fn text_tone(&self) -> Tone {
        if self.is_finished() {
            return Tone::Expired;
        }
        tone_for_remaining(self.remaining_percentage())
    }

    /// Tone of the screen background tint
    pub fn background_tone(&self) -> Tone {
        if self.is_finished() {
            return Tone::Expired;
        }
        tone_for_remaining(self.remaining_percentage())
    }

    /// Tone of the progress bar fill.
    ///
    /// Driven by the elapsed share with 80/50 breakpoints, unlike the text and
    /// background which use the remaining share with 20/50 breakpoints.
    pub fn progress_tone(&self) -> Tone {
        if self.is_finished() {
            return Tone::Expired;
        }
        let elapsed = self.elapsed_percentage();
        if elapsed >= 80.0 {
            Tone::Critical
        } else if elapsed >= 50.0 {
            Tone::Warning
        } else {
            Tone::Ok
        }
    }

    /// Remaining time as `MM:SS`
    pub fn clock_text(&self) -> String {
        format_clock(self.remaining_seconds())
    }
}

fn tone_for_remaining(remaining_pct: f64) -> Tone {
    if remaining_pct <= 20.0 {
        Tone::Critical
    } else if remaining_pct <= 50.0 {
        Tone::Warning
    } else {
        Tone::Ok
    }
}

/// Format seconds as zero-padded `MM:SS`
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::Minutes;

    /// A ten-minute timer with `remaining` seconds left, paused
    fn ten_minutes_with(remaining: u32) -> TimerState {
        let mut timer = TimerState::new(Minutes::new(10).unwrap());
        timer.toggle();
        for _ in remaining..600 {
            timer.tick();
        }
        if timer.is_running() {
            timer.toggle();
        }
        timer
    }

    #[test]
    fn format_clock_pads_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(9), "00:09");
        assert_eq!(format_clock(600), "10:00");
        assert_eq!(format_clock(99 * 60), "99:00");
        assert_eq!(format_clock(3599), "59:59");
    }

    #[test]
    fn percentages_track_progress() {
        let fresh = ten_minutes_with(600);
        assert_eq!(fresh.elapsed_percentage(), 0.0);
        assert_eq!(fresh.remaining_percentage(), 100.0);

        let half = ten_minutes_with(300);
        assert_eq!(half.elapsed_percentage(), 50.0);
        assert_eq!(half.remaining_percentage(), 50.0);
    }

    #[test]
    fn text_tone_uses_remaining_thresholds() {
        assert_eq!(ten_minutes_with(301).text_tone(), Tone::Ok);
        assert_eq!(ten_minutes_with(300).text_tone(), Tone::Warning);
        assert_eq!(ten_minutes_with(121).text_tone(), Tone::Warning);
        assert_eq!(ten_minutes_with(119).text_tone(), Tone::Critical);
        assert_eq!(ten_minutes_with(1).background_tone(), Tone::Critical);
    }

    #[test]
    fn progress_tone_uses_elapsed_thresholds() {
        assert_eq!(ten_minutes_with(301).progress_tone(), Tone::Ok);
        assert_eq!(ten_minutes_with(300).progress_tone(), Tone::Warning);
        assert_eq!(ten_minutes_with(121).progress_tone(), Tone::Warning);
        assert_eq!(ten_minutes_with(119).progress_tone(), Tone::Critical);
    }

    #[test]
    fn finished_timer_is_expired_everywhere() {
        let finished = ten_minutes_with(0);
        assert!(finished.is_finished());
        assert_eq!(finished.text_tone(), Tone::Expired);
        assert_eq!(finished.background_tone(), Tone::Expired);
        assert_eq!(finished.progress_tone(), Tone::Expired);
        assert_eq!(finished.elapsed_percentage(), 100.0);
        assert_eq!(finished.clock_text(), "00:00");
    }
}
