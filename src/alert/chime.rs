//! Chime synthesis.
//!
//! One strike is a C-major triad whose notes enter 100 ms apart; the chime is
//! three strikes 600 ms apart. Every note is a sine with a short linear attack
//! and an exponential decay, rendered into a mono sample buffer.

use std::f32::consts::TAU;
use std::time::Duration;

/// C5, E5, G5
pub const CHORD_HZ: [f32; 3] = [523.25, 659.25, 783.99];
/// Start of each strike relative to the alert
pub const STRIKE_OFFSETS_MS: [u64; 3] = [0, 600, 1200];
/// Delay between consecutive notes of a strike
pub const NOTE_STAGGER_MS: u64 = 100;
/// Length of one note, attack included
pub const NOTE_LENGTH_MS: u64 = 800;

const NOTE_LENGTH_SECS: f32 = 0.8;

const ATTACK_SECS: f32 = 0.05;
const PEAK_GAIN: f32 = 0.2;
const FLOOR_GAIN: f32 = 0.01;

/// Output rate of [`render`]
pub const SAMPLE_RATE: u32 = 44_100;

/// Gain of a note `t` seconds after it starts
pub fn envelope(t: f32) -> f32 {
    if !(0.0..=NOTE_LENGTH_SECS).contains(&t) {
        0.0
    } else if t <= ATTACK_SECS {
        PEAK_GAIN * t / ATTACK_SECS
    } else {
        let progress = (t - ATTACK_SECS) / (NOTE_LENGTH_SECS - ATTACK_SECS);
        PEAK_GAIN * (FLOOR_GAIN / PEAK_GAIN).powf(progress)
    }
}

/// Total length of the chime, from the first strike to the last note's end
pub fn duration() -> Duration {
    let last_strike = STRIKE_OFFSETS_MS[STRIKE_OFFSETS_MS.len() - 1];
    let strike_len = NOTE_STAGGER_MS * (CHORD_HZ.len() as u64 - 1) + NOTE_LENGTH_MS;
    Duration::from_millis(last_strike + strike_len)
}

/// Render the whole chime as mono samples in `[-1, 1]`
pub fn render(sample_rate: u32) -> Vec<f32> {
    let rate = sample_rate as f32;
    let len = duration().as_millis() as usize * sample_rate as usize / 1000;
    let mut samples = vec![0.0f32; len];

    let count = NOTE_LENGTH_MS as usize * sample_rate as usize / 1000;
    for offset_ms in STRIKE_OFFSETS_MS {
        for (idx, freq) in CHORD_HZ.iter().enumerate() {
            let note_start_ms = offset_ms + NOTE_STAGGER_MS * idx as u64;
            let first = note_start_ms as usize * sample_rate as usize / 1000;

            for (n, sample) in samples.iter_mut().skip(first).take(count).enumerate() {
                let t = n as f32 / rate;
                *sample += envelope(t) * (TAU * freq * t).sin();
            }
        }
    }

    for sample in &mut samples {
        *sample = sample.clamp(-1.0, 1.0);
    }
    samples
}
