//! End-of-time alert.
//!
//! The alert tries a chain of [`AlertChannel`]s in order (tone synthesis, then
//! a bell pulse) and stops at the first one that works. When every channel is
//! unavailable the failure is only logged: a missing sound device must never
//! disturb the countdown.

pub mod chime;
pub mod pulse;
pub mod tone;

use tracing::{debug, info, warn};

use crate::platform::CapabilityError;

pub use pulse::BellPulse;
pub use tone::ToneSynth;

/// One way of getting the speaker's attention
pub trait AlertChannel {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Start the alert. Must not block for the length of the alert.
    fn play(&mut self) -> Result<(), CapabilityError>;
}

/// What happened when the alert was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertOutcome {
    /// Sound is switched off; nothing was attempted
    Muted,
    /// The named channel accepted the alert
    Played(&'static str),
    /// Every channel failed
    Unavailable,
}

/// Sound switch plus the ordered fallback chain
pub struct Alerter {
    channels: Vec<Box<dyn AlertChannel>>,
    enabled: bool,
}

impl Alerter {
    pub fn new(channels: Vec<Box<dyn AlertChannel>>, enabled: bool) -> Self {
        Self { channels, enabled }
    }

    /// Tone synthesis on the default audio device, falling back to the
    /// terminal bell
    pub fn system(volume: u8, enabled: bool) -> Self {
        Self::new(
            vec![Box::new(ToneSynth::new(volume)), Box::new(BellPulse::new())],
            enabled,
        )
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Play the chime through the first channel that works
    pub fn ring(&mut self) -> AlertOutcome {
        if !self.enabled {
            debug!("alert skipped, sound is off");
            return AlertOutcome::Muted;
        }

        for channel in &mut self.channels {
            match channel.play() {
                Ok(()) => {
                    info!(channel = channel.name(), "alert played");
                    return AlertOutcome::Played(channel.name());
                }
                Err(e) => {
                    warn!(channel = channel.name(), error = %e, "alert channel unavailable");
                }
            }
        }

        warn!("no alert channel available, alert dropped");
        AlertOutcome::Unavailable
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Channel that records attempts and succeeds or fails on demand
    pub(crate) struct FakeChannel {
        pub name: &'static str,
        pub works: bool,
        pub calls: Rc<RefCell<Vec<&'static str>>>,
    }

    impl AlertChannel for FakeChannel {
        fn name(&self) -> &'static str {
            self.name
        }

        fn play(&mut self) -> Result<(), CapabilityError> {
            self.calls.borrow_mut().push(self.name);
            if self.works {
                Ok(())
            } else {
                Err(CapabilityError::Unsupported(self.name))
            }
        }
    }

    /// Build an alerter over fake channels, returning the shared call log
    pub(crate) fn fake_alerter(
        channels: &[(&'static str, bool)],
        enabled: bool,
    ) -> (Alerter, Rc<RefCell<Vec<&'static str>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let boxed = channels
            .iter()
            .map(|&(name, works)| {
                Box::new(FakeChannel {
                    name,
                    works,
                    calls: Rc::clone(&calls),
                }) as Box<dyn AlertChannel>
            })
            .collect();
        (Alerter::new(boxed, enabled), calls)
    }

    #[test]
    fn muted_alerter_tries_nothing() {
        let (mut alerter, calls) = fake_alerter(&[("tone", true)], false);
        assert_eq!(alerter.ring(), AlertOutcome::Muted);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn first_working_channel_wins() {
        let (mut alerter, calls) = fake_alerter(&[("tone", true), ("bell", true)], true);
        assert_eq!(alerter.ring(), AlertOutcome::Played("tone"));
        assert_eq!(*calls.borrow(), vec!["tone"]);
    }

    #[test]
    fn falls_back_in_order() {
        let (mut alerter, calls) = fake_alerter(&[("tone", false), ("bell", true)], true);
        assert_eq!(alerter.ring(), AlertOutcome::Played("bell"));
        assert_eq!(*calls.borrow(), vec!["tone", "bell"]);
    }

    #[test]
    fn all_channels_failing_is_not_fatal() {
        let (mut alerter, calls) = fake_alerter(&[("tone", false), ("bell", false)], true);
        assert_eq!(alerter.ring(), AlertOutcome::Unavailable);
        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn toggling_sound_gates_the_chain() {
        let (mut alerter, calls) = fake_alerter(&[("tone", true)], true);
        alerter.set_enabled(false);
        assert_eq!(alerter.ring(), AlertOutcome::Muted);
        alerter.set_enabled(true);
        assert_eq!(alerter.ring(), AlertOutcome::Played("tone"));
        assert_eq!(calls.borrow().len(), 1);
    }
}
