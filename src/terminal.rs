//! Terminal setup with a guaranteed restore.

use std::io;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Runs `restore` when dropped, on every exit path including `?` and panics
pub struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreGuard<F> {
    pub fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Leave the alternate screen and raw mode, best-effort
pub fn restore() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Enter raw mode and the alternate screen.
///
/// The guard is created before anything can fail, so a setup error still
/// restores the terminal.
pub fn setup() -> Result<(
    Terminal<CrosstermBackend<io::Stdout>>,
    RestoreGuard<fn()>,
)> {
    enable_raw_mode().context("Failed to enable raw mode - are you in a terminal?")?;
    let guard = RestoreGuard::new(restore as fn());

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")?;
    Ok((terminal, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn failing_setup(restored: &Cell<u32>) -> Result<()> {
        let _guard = RestoreGuard::new(|| restored.set(restored.get() + 1));
        anyhow::bail!("alternate screen unavailable");
    }

    #[test]
    fn guard_restores_when_setup_fails_midway() {
        let restored = Cell::new(0);
        assert!(failing_setup(&restored).is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn guard_restores_exactly_once_on_success() {
        let restored = Cell::new(0);
        {
            let _guard = RestoreGuard::new(|| restored.set(restored.get() + 1));
            assert_eq!(restored.get(), 0);
        }
        assert_eq!(restored.get(), 1);
    }
}
