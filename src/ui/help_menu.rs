//! Help menu overlay showing all normal-mode keybindings.
//!
//! Toggled by `?` in normal mode and drawn just above the help bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// A single keybinding entry for display
struct HelpEntry {
    key: &'static str,
    label: &'static str,
}

const COMMANDS_PER_ROW: usize = 4;

/// Widget that renders the help menu overlay
#[derive(Default)]
pub struct HelpMenuWidget;

impl HelpMenuWidget {
    /// Create a new help menu widget
    pub fn new() -> Self {
        Self
    }

    /// Calculate the area for the help menu popup.
    /// Positioned at the bottom of the screen, above the help bar.
    pub fn calculate_area(screen: Rect) -> Rect {
        let row_count = Self::entries().len().div_ceil(COMMANDS_PER_ROW);
        let height = (row_count as u16 + 1).min(screen.height.saturating_sub(1)); // +1 for top border
        let y = screen.height.saturating_sub(height + 1); // +1 for help bar

        Rect {
            x: screen.x,
            y: screen.y + y,
            width: screen.width,
            height,
        }
    }

    /// All normal-mode keybinding entries
    fn entries() -> Vec<HelpEntry> {
        vec![
            HelpEntry { key: "Space", label: "start/pause" },
            HelpEntry { key: "r", label: "reset" },
            HelpEntry { key: "1-5", label: "preset" },
            HelpEntry { key: "c", label: "custom min" },
            HelpEntry { key: "m", label: "sound" },
            HelpEntry { key: "t", label: "test chime" },
            HelpEntry { key: "y", label: "copy address" },
            HelpEntry { key: "o", label: "open address" },
            HelpEntry { key: "f", label: "full screen" },
            HelpEntry { key: "?", label: "help" },
            HelpEntry { key: "q", label: "quit" },
            HelpEntry { key: "C-q", label: "quit" },
        ]
    }

    /// Build command display lines grouped into rows
    fn build_command_lines() -> Vec<Line<'static>> {
        Self::entries()
            .chunks(COMMANDS_PER_ROW)
            .map(|chunk| {
                let spans: Vec<Span> = chunk
                    .iter()
                    .flat_map(|entry| {
                        [
                            Span::styled(
                                format!(" {:>5} ", entry.key),
                                Style::default()
                                    .fg(Color::Cyan)
                                    .add_modifier(Modifier::BOLD),
                            ),
                            Span::styled(
                                format!("{:<13}", entry.label),
                                Style::default().fg(Color::White),
                            ),
                        ]
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

impl Widget for HelpMenuWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear the area first (overlay effect)
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                " ? | Keybindings ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(Color::Black));

        Paragraph::new(Self::build_command_lines())
            .block(block)
            .style(Style::default().bg(Color::Black))
            .render(area, buf);
    }
}
