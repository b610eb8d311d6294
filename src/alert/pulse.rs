//! Terminal bell fallback, the terminal's stand-in for a vibration motor.

use std::io::{self, IsTerminal, Write};
use std::thread;
use std::time::Duration;

use super::AlertChannel;
use crate::platform::CapabilityError;

/// Alternating on/off durations in milliseconds, starting with "on"
pub const PULSE_PATTERN_MS: [u64; 5] = [200, 100, 200, 100, 200];

/// Rings the terminal bell once at the start of every "on" segment
#[derive(Debug, Default)]
pub struct BellPulse;

impl BellPulse {
    pub fn new() -> Self {
        Self
    }
}

/// Offsets from the start of the pattern at which the bell rings
pub fn ring_offsets(pattern: &[u64]) -> Vec<Duration> {
    let mut offsets = Vec::new();
    let mut elapsed = 0;
    for (idx, segment) in pattern.iter().enumerate() {
        if idx % 2 == 0 {
            offsets.push(Duration::from_millis(elapsed));
        }
        elapsed += segment;
    }
    offsets
}

impl AlertChannel for BellPulse {
    fn name(&self) -> &'static str {
        "bell"
    }

    fn play(&mut self) -> Result<(), CapabilityError> {
        if !io::stdout().is_terminal() {
            return Err(CapabilityError::Unsupported("terminal bell"));
        }

        let offsets = ring_offsets(&PULSE_PATTERN_MS);
        thread::Builder::new()
            .name("bell-pulse".into())
            .spawn(move || {
                let mut previous = Duration::ZERO;
                for offset in offsets {
                    thread::sleep(offset - previous);
                    previous = offset;
                    let mut stdout = io::stdout();
                    let _ = stdout.write_all(b"\x07").and_then(|()| stdout.flush());
                }
            })
            .map(|_| ())
            .map_err(|e| CapabilityError::failed("terminal bell", e))
    }
}
