//! Colors for each urgency [`Tone`].

use ratatui::style::Color;

use crate::timer::Tone;

/// Big clock digits
pub fn text_color(tone: Tone) -> Color {
    match tone {
        Tone::Ok => Color::Green,
        Tone::Warning => Color::Yellow,
        Tone::Critical => Color::LightRed,
        Tone::Expired => Color::Red,
    }
}

/// Screen background tint, kept dark so the digits stay readable
pub fn background_color(tone: Tone) -> Color {
    match tone {
        Tone::Ok => Color::Rgb(8, 32, 16),
        Tone::Warning => Color::Rgb(40, 36, 6),
        Tone::Critical => Color::Rgb(44, 12, 12),
        Tone::Expired => Color::Rgb(80, 10, 10),
    }
}

/// Progress bar fill
pub fn progress_color(tone: Tone) -> Color {
    match tone {
        Tone::Ok => Color::LightGreen,
        Tone::Warning => Color::LightYellow,
        Tone::Critical => Color::LightRed,
        Tone::Expired => Color::Red,
    }
}
