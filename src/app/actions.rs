//! User-facing actions: timer controls, duration changes, sound, sharing.

use std::time::Instant;

use tracing::{debug, info, warn};

use super::{App, ModalState};
use crate::alert::AlertOutcome;
use crate::input::{InputMode, TextInputResult, TextInput};
use crate::timer::{Minutes, PRESETS};
use crate::ui::toast::ToastType;

impl App {
    // =========================================================================
    // Timer Controls
    // =========================================================================

    /// Start or pause the countdown
    pub fn toggle_timer(&mut self) {
        self.toggle_timer_at(Instant::now());
    }

    pub(crate) fn toggle_timer_at(&mut self, now: Instant) {
        self.timer.toggle();
        self.sync_ticker(now);
    }

    /// Restore the configured duration and stop
    pub fn reset_timer(&mut self) {
        self.timer.reset();
        self.sync_ticker(Instant::now());
    }

    // =========================================================================
    // Duration Configuration
    // =========================================================================

    /// Select the preset at `index` (0-based); inert while running
    pub fn apply_preset(&mut self, index: usize) -> bool {
        let Some(&minutes) = PRESETS.get(index) else {
            return false;
        };
        if !self.apply_duration(minutes) {
            return false;
        }
        self.custom_minutes.set_text(minutes.to_string());
        true
    }

    /// Focus the custom-minutes field; inert while running
    pub fn begin_custom_edit(&mut self) {
        if self.timer.is_running() {
            return;
        }
        self.input_mode = InputMode::Insert;
    }

    /// Route a key to the custom-minutes field
    pub fn edit_custom_minutes(&mut self, key: crossterm::event::KeyEvent) {
        match self.custom_minutes.handle_key(key) {
            TextInputResult::Editing => {}
            TextInputResult::Submitted(_) => {
                self.input_mode = InputMode::Normal;
                self.confirm_custom();
            }
            TextInputResult::Cancelled => {
                self.input_mode = InputMode::Normal;
            }
        }
    }

    /// Apply the pending custom-minutes text.
    ///
    /// Invalid text (non-numeric, below 1 or above 99) is ignored silently.
    pub fn confirm_custom(&mut self) -> bool {
        let Some(minutes) = Minutes::parse(self.custom_minutes.text()) else {
            debug!(text = self.custom_minutes.text(), "custom duration rejected");
            return false;
        };
        self.apply_duration(minutes)
    }

    /// Reconfigure from a user choice and mirror it into the address
    fn apply_duration(&mut self, minutes: Minutes) -> bool {
        if !self.timer.configure(minutes) {
            return false;
        }
        self.sync_ticker(Instant::now());
        self.location.set_minutes(minutes);
        info!(%minutes, location = %self.location, "duration set");
        true
    }

    // =========================================================================
    // Address Navigation
    // =========================================================================

    /// Open the address prompt prefilled with the current address
    pub fn open_address_prompt(&mut self) {
        self.modal_state = ModalState::OpenAddress(TextInput::with_text(self.location.to_string()));
        self.input_mode = InputMode::Insert;
    }

    /// Close any open modal
    pub fn close_modal(&mut self) {
        self.modal_state = ModalState::None;
        self.input_mode = InputMode::Normal;
    }

    /// Route a key to the open modal
    pub fn handle_modal_key(&mut self, key: crossterm::event::KeyEvent) {
        let ModalState::OpenAddress(ref mut input) = self.modal_state else {
            return;
        };
        match input.handle_key(key) {
            TextInputResult::Editing => {}
            TextInputResult::Submitted(address) => {
                self.close_modal();
                if !address.trim().is_empty() {
                    self.navigate(&address);
                }
            }
            TextInputResult::Cancelled => self.close_modal(),
        }
    }

    /// Move to a new address, as if the page had been navigated
    pub fn navigate(&mut self, address: &str) {
        self.location = self.location.navigate(address);
        info!(location = %self.location, "navigated");
        self.on_location_changed();
    }

    /// React to an external change of the address.
    ///
    /// Deferred while running: the check runs again when the countdown
    /// stops. Otherwise the timer is reset to the address's duration, but
    /// only when that differs from the configured one.
    pub fn on_location_changed(&mut self) {
        if self.timer.is_running() {
            debug!("address changed while running, deferred until stopped");
            return;
        }
        let minutes = self.location.minutes();
        if !self.timer.differs_from(minutes) {
            return;
        }
        self.timer.configure(minutes);
        self.custom_minutes.set_text(minutes.to_string());
        self.sync_ticker(Instant::now());
    }

    // =========================================================================
    // Sound
    // =========================================================================

    /// Flip the sound switch and remember it in the config
    pub fn toggle_sound(&mut self) {
        let enabled = !self.alerter.is_enabled();
        self.alerter.set_enabled(enabled);
        self.config.sound.enabled = enabled;
        if let Some(ref path) = self.config_path {
            if let Err(e) = self.config.save_to(path) {
                warn!(error = %e, "failed to save sound preference");
            }
        }
    }

    /// Play the chime on demand; inert while sound is off
    pub fn test_chime(&mut self) {
        if !self.alerter.is_enabled() {
            return;
        }
        if self.alerter.ring() == AlertOutcome::Unavailable {
            self.toast_warning("No sound output available");
        }
    }

    // =========================================================================
    // Sharing and Display
    // =========================================================================

    /// Copy the shareable address to the clipboard
    pub fn copy_share_address(&mut self) {
        let address = self.location.to_string();
        match self.clipboard.set_text(&address) {
            Ok(()) => self.toast_success("Address copied to clipboard"),
            Err(e) => {
                warn!(error = %e, "copy failed");
                self.toast_error("Failed to copy address");
            }
        }
    }

    /// Switch between the full layout and the clock-only presentation view
    pub fn toggle_fullscreen(&mut self) {
        self.presentation_mode = !self.presentation_mode;
        if let Err(e) = self.fullscreen.set_fullscreen(self.presentation_mode) {
            debug!(error = %e, "terminal full-screen request not honored");
        }
    }

    /// Toggle the keybinding overlay
    pub fn toggle_help_menu(&mut self) {
        self.help_menu_open = !self.help_menu_open;
    }

    // =========================================================================
    // Toasts
    // =========================================================================

    /// Show a success toast
    pub fn toast_success(&mut self, message: impl Into<String>) {
        self.toast_manager.push(message, ToastType::Success);
    }

    /// Show a warning toast
    pub fn toast_warning(&mut self, message: impl Into<String>) {
        self.toast_manager.push(message, ToastType::Warning);
    }

    /// Show an error toast
    pub fn toast_error(&mut self, message: impl Into<String>) {
        self.toast_manager.push(message, ToastType::Error);
    }
}
