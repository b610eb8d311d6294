use std::io;
use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use presentation_timer::app::{App, Capabilities};
use presentation_timer::cli::Cli;
use presentation_timer::config::Config;
use presentation_timer::event_loop::run_app;
use presentation_timer::{logging, terminal};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging is best-effort; the timer works without a writable config dir
    let _log_guard = Config::app_dir()
        .and_then(|dir| logging::init(&dir, &cli.log_level))
        .ok();

    // A config file that fails to load is never written back
    let (config, save_path) = match Config::default_path() {
        Ok(path) => Config::load_or_default(path),
        Err(e) => {
            warn!("No config location, using defaults: {e:#}");
            (Config::default(), None)
        }
    };

    // Check if we're in a proper terminal
    if !io::stdin().is_terminal() {
        anyhow::bail!("presentation-timer must be run in an interactive terminal");
    }

    let sound_enabled = config.sound.enabled && !cli.mute;
    let location = cli.location(&config.share_url);
    let start_fullscreen = cli.fullscreen || config.display.presentation_mode;
    let capabilities = Capabilities::system(&config, sound_enabled);
    let mut app = App::new(config, location, capabilities).with_config_persistence(save_path);

    // Restored when the guard drops, whether setup, the loop or main fails
    let (mut terminal, _restore_guard) = terminal::setup()?;

    if start_fullscreen {
        app.toggle_fullscreen();
    }

    info!(location = %app.location, "presentation-timer started");
    let result = run_app(&mut terminal, &mut app);

    if let Err(ref e) = result {
        warn!("exited with error: {e:#}");
    }
    result
}
