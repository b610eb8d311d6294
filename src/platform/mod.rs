//! Environment capabilities: clipboard and full-screen.
//!
//! Each provider tries its operation and reports [`CapabilityError`] when the
//! environment cannot do it, so the app can degrade without knowing which
//! concrete backend it runs against. Alert channels live in [`crate::alert`].

use std::io::{self, IsTerminal, Write};

use thiserror::Error;

/// Why an environment capability could not be used
#[derive(Debug, Error)]
pub enum CapabilityError {
    /// The environment does not offer this capability at all
    #[error("{0} is not supported here")]
    Unsupported(&'static str),
    /// The capability exists but the call failed
    #[error("{capability} failed: {reason}")]
    Failed {
        capability: &'static str,
        reason: String,
    },
}

impl CapabilityError {
    pub fn failed(capability: &'static str, reason: impl ToString) -> Self {
        Self::Failed {
            capability,
            reason: reason.to_string(),
        }
    }
}

/// Write-only access to the system clipboard
pub trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<(), CapabilityError>;
}

/// Clipboard backed by `arboard`. The handle is opened per call, so a
/// clipboard that appears later (e.g. after an X server restart) still works.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), CapabilityError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|_| CapabilityError::Unsupported("clipboard"))?;
        clipboard
            .set_text(text)
            .map_err(|e| CapabilityError::failed("clipboard", e))
    }
}

/// Ask the hosting terminal to enter or leave full-screen
pub trait FullscreenProvider {
    fn set_fullscreen(&mut self, on: bool) -> Result<(), CapabilityError>;
}

/// Uses the xterm window-manipulation sequence `CSI 10 ; Ps t`.
///
/// Terminals that do not implement it ignore the sequence, so success only
/// means the request was written.
#[derive(Debug, Default)]
pub struct TerminalFullscreen;

impl FullscreenProvider for TerminalFullscreen {
    fn set_fullscreen(&mut self, on: bool) -> Result<(), CapabilityError> {
        let mut stdout = io::stdout();
        if !stdout.is_terminal() {
            return Err(CapabilityError::Unsupported("full-screen"));
        }
        let sequence = if on { "\x1b[10;1t" } else { "\x1b[10;0t" };
        stdout
            .write_all(sequence.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| CapabilityError::failed("full-screen", e))
    }
}
