//! Command-line arguments.

use clap::Parser;

use crate::location::Location;

#[derive(Debug, Parser)]
#[command(name = "presentation-timer")]
#[command(about = "A full-screen countdown timer for keeping talks on time")]
#[command(version)]
pub struct Cli {
    /// Shareable address to open, e.g. "http://localhost:3000/?time=7"
    pub address: Option<String>,

    /// Duration in minutes (1-99); overrides the address's `time` parameter
    #[arg(short, long, value_name = "MINUTES")]
    pub time: Option<String>,

    /// Start with the alert sound switched off
    #[arg(short, long)]
    pub mute: bool,

    /// Start in full-screen presentation mode
    #[arg(short, long)]
    pub fullscreen: bool,

    /// Log level written to the log file
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: String,
}

impl Cli {
    /// Resolve the starting address from the arguments and the configured base.
    ///
    /// `--time` is written into the address verbatim, so an invalid value
    /// falls back to the default duration exactly like a bad `?time=`.
    pub fn location(&self, share_url: &str) -> Location {
        let mut location = Location::parse(self.address.as_deref().unwrap_or(share_url));
        if let Some(ref time) = self.time {
            location.set_param(crate::location::TIME_PARAM, time.clone());
        }
        location
    }
}
