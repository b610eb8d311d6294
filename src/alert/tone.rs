//! Chime playback on the default audio output device.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, Sink};
use tracing::debug;

use super::{chime, AlertChannel};
use crate::platform::CapabilityError;

/// How long to wait for the device to open before giving up on it
const OPEN_TIMEOUT: Duration = Duration::from_millis(250);

/// Sine-tone chime through `rodio`.
///
/// Each alert runs on its own detached thread that owns the output stream
/// until the chime has finished; it cannot be cancelled once started.
pub struct ToneSynth {
    volume: f32,
}

impl ToneSynth {
    /// `volume` is a percentage, clamped to 100
    pub fn new(volume: u8) -> Self {
        Self {
            volume: f32::from(volume.min(100)) / 100.0,
        }
    }
}

impl AlertChannel for ToneSynth {
    fn name(&self) -> &'static str {
        "tone"
    }

    fn play(&mut self) -> Result<(), CapabilityError> {
        let (opened_tx, opened_rx) = mpsc::channel::<Result<(), String>>();
        let volume = self.volume;

        thread::Builder::new()
            .name("chime".into())
            .spawn(move || {
                // The stream is not Send, so it has to be created on this thread
                let (_stream, handle) = match OutputStream::try_default() {
                    Ok(pair) => pair,
                    Err(e) => {
                        let _ = opened_tx.send(Err(e.to_string()));
                        return;
                    }
                };
                let sink = match Sink::try_new(&handle) {
                    Ok(sink) => sink,
                    Err(e) => {
                        let _ = opened_tx.send(Err(e.to_string()));
                        return;
                    }
                };
                let _ = opened_tx.send(Ok(()));

                sink.set_volume(volume);
                sink.append(SamplesBuffer::new(
                    1,
                    chime::SAMPLE_RATE,
                    chime::render(chime::SAMPLE_RATE),
                ));
                sink.sleep_until_end();
                debug!("chime finished");
            })
            .map_err(|e| CapabilityError::failed("tone synthesis", e))?;

        match opened_rx.recv_timeout(OPEN_TIMEOUT) {
            Ok(Ok(())) => Ok(()),
            Ok(Err(reason)) => Err(CapabilityError::failed("tone synthesis", reason)),
            Err(_) => Err(CapabilityError::Unsupported("tone synthesis")),
        }
    }
}
