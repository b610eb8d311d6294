//! Application state and core data types for presentation-timer.

mod actions;

use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info};

use crate::alert::Alerter;
use crate::config::Config;
use crate::input::{InputMode, TextInput};
use crate::location::Location;
use crate::platform::{
    ClipboardProvider, FullscreenProvider, SystemClipboard, TerminalFullscreen,
};
use crate::timer::{TickOutcome, Ticker, TimerState};
use crate::ui::toast::ToastManager;

/// Modal dialog state
#[derive(Debug, Default)]
pub enum ModalState {
    /// No modal is open
    #[default]
    None,
    /// "Open address" prompt
    OpenAddress(TextInput),
}

/// Environment capabilities the app talks to.
///
/// Kept behind traits so the app can run against fakes in tests.
pub struct Capabilities {
    pub alerter: Alerter,
    pub clipboard: Box<dyn ClipboardProvider>,
    pub fullscreen: Box<dyn FullscreenProvider>,
}

impl Capabilities {
    /// Real audio device, system clipboard and terminal full-screen
    pub fn system(config: &Config, sound_enabled: bool) -> Self {
        Self {
            alerter: Alerter::system(config.sound.volume, sound_enabled),
            clipboard: Box::new(SystemClipboard),
            fullscreen: Box::new(TerminalFullscreen),
        }
    }
}

/// Application state
pub struct App {
    /// The countdown
    pub timer: TimerState,
    /// Present exactly while the countdown runs
    ticker: Option<Ticker>,
    /// Shareable address; its `time` parameter mirrors the configured duration
    pub location: Location,
    /// Pending custom-minutes text, may be invalid
    pub custom_minutes: TextInput,
    /// Alert chain and sound switch
    pub alerter: Alerter,
    clipboard: Box<dyn ClipboardProvider>,
    fullscreen: Box<dyn FullscreenProvider>,
    /// Clock-only layout
    pub presentation_mode: bool,
    /// Current input mode (Normal, Insert)
    pub input_mode: InputMode,
    /// Current modal state
    pub modal_state: ModalState,
    /// Toast notification manager
    pub toast_manager: ToastManager,
    /// Application configuration
    pub config: Config,
    /// Whether the help menu overlay is open (toggled by '?')
    pub help_menu_open: bool,
    /// Should quit
    pub should_quit: bool,
    /// Config file preference changes are written to, if any
    config_path: Option<PathBuf>,
}

impl App {
    /// Create the app for the given starting address
    pub fn new(config: Config, location: Location, capabilities: Capabilities) -> Self {
        let minutes = location.minutes();
        info!(%location, %minutes, "timer configured from address");

        Self {
            timer: TimerState::new(minutes),
            ticker: None,
            location,
            custom_minutes: TextInput::with_text(minutes.to_string()),
            alerter: capabilities.alerter,
            clipboard: capabilities.clipboard,
            fullscreen: capabilities.fullscreen,
            presentation_mode: false,
            input_mode: InputMode::default(),
            modal_state: ModalState::None,
            toast_manager: ToastManager::new(),
            config,
            help_menu_open: false,
            should_quit: false,
            config_path: None,
        }
    }

    /// Write preference changes (sound switch) back to `path`, if given
    pub fn with_config_persistence(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Whether a ticker is currently armed
    pub fn ticker_armed(&self) -> bool {
        self.ticker.is_some()
    }

    /// Time left until the next tick is due, if the countdown runs
    pub fn until_next_tick(&self, now: Instant) -> Option<std::time::Duration> {
        self.ticker.as_ref().map(|t| t.until_next(now))
    }

    /// Advance the countdown if a tick is due, called every loop iteration
    pub fn on_frame(&mut self, now: Instant) {
        let due = self.ticker.as_mut().is_some_and(|t| t.poll(now));
        if due {
            self.tick(now);
        }
    }

    /// Apply one tick to the timer, ringing the alert on expiry
    pub fn tick(&mut self, now: Instant) {
        if self.timer.tick() == TickOutcome::Expired {
            info!(total = self.timer.total_seconds(), "time is up");
            self.alerter.ring();
        }
        self.sync_ticker(now);
    }

    /// Arm or release the ticker so it exists exactly while running.
    ///
    /// Called after every state change; this is the only place a ticker is
    /// created or dropped. Leaving Running re-checks the address.
    pub(crate) fn sync_ticker(&mut self, now: Instant) {
        match (self.timer.is_running(), self.ticker.is_some()) {
            (true, false) => {
                debug!(remaining = self.timer.remaining_seconds(), "countdown running");
                self.ticker = Some(Ticker::start(now));
            }
            (false, true) => {
                debug!(remaining = self.timer.remaining_seconds(), "countdown stopped");
                self.ticker = None;
                // An address change made while running takes effect now
                self.on_location_changed();
            }
            _ => {}
        }
    }

    /// Check if a modal is currently open
    pub fn is_modal_open(&self) -> bool {
        !matches!(self.modal_state, ModalState::None)
    }

    /// Leave the app, releasing the ticker and full-screen
    pub fn quit(&mut self) {
        self.ticker = None;
        if self.presentation_mode {
            if let Err(e) = self.fullscreen.set_fullscreen(false) {
                debug!(error = %e, "leaving terminal full-screen not honored");
            }
        }
        self.should_quit = true;
    }
}
