//! "Open address" prompt: edit the shareable address and navigate to it.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::input::TextInput;
use crate::location::Location;
use crate::ui::text_field::input_spans;

/// Widget for rendering the address prompt
pub struct AddressModal<'a> {
    input: &'a TextInput,
    current: &'a Location,
}

impl<'a> AddressModal<'a> {
    pub fn new(input: &'a TextInput, current: &'a Location) -> Self {
        Self { input, current }
    }

    /// Calculate the modal area (centered, 60% width, fixed height)
    pub fn calculate_area(total: Rect) -> Rect {
        let width = (total.width * 60 / 100)
            .max(40)
            .min(total.width.saturating_sub(4));
        let height = 9u16.min(total.height.saturating_sub(2));

        let x = total.x + (total.width.saturating_sub(width)) / 2;
        let y = total.y + (total.height.saturating_sub(height)) / 2;

        Rect::new(x, y, width, height)
    }

    /// Duration the typed address would configure
    fn preview(&self) -> String {
        let target = self.current.navigate(self.input.text());
        format!("Starts at {} min", target.minutes())
    }
}

impl Widget for AddressModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Skip rendering if area is too small
        if area.width < 20 || area.height < 7 {
            return;
        }

        Clear.render(area, buf);

        let block = Block::default()
            .title(" Open Address ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);

        let [input_area, preview_area, _, help_area] = Layout::vertical([
            Constraint::Length(3), // Input field
            Constraint::Length(1), // Resolved duration
            Constraint::Min(0),    // Spacer
            Constraint::Length(1), // Help bar
        ])
        .areas(inner);

        let input_block = Block::default()
            .title(" Address ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let input_inner = input_block.inner(input_area);
        input_block.render(input_area, buf);
        Paragraph::new(Line::from(input_spans(
            self.input,
            input_inner.width as usize,
            true,
        )))
        .render(input_inner, buf);

        Paragraph::new(Line::from(Span::styled(
            self.preview(),
            Style::default().fg(Color::DarkGray),
        )))
        .render(preview_area, buf);

        let help_text = vec![
            Span::styled(" Enter ", Style::default().fg(Color::Cyan)),
            Span::raw("open "),
            Span::styled(" Esc ", Style::default().fg(Color::Cyan)),
            Span::raw("cancel"),
        ];
        Paragraph::new(Line::from(help_text))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(help_area, buf);
    }
}
