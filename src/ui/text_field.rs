//! Rendering of a single-line [`TextInput`] with a block cursor.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::input::TextInput;

/// Build spans for `input`, scrolled so the cursor stays within `width` cells
pub fn input_spans(input: &TextInput, width: usize, focused: bool) -> Vec<Span<'static>> {
    let chars: Vec<char> = input.text().chars().collect();
    let cursor = input.cursor();

    if !focused {
        return vec![Span::raw(chars.iter().take(width).collect::<String>())];
    }

    // Keep one cell for the end-of-text cursor
    let width = width.max(1);
    let start = (cursor + 1).saturating_sub(width);
    let end = (start + width).min(chars.len());

    let mut spans = Vec::new();
    for (i, c) in chars[start..end].iter().enumerate() {
        if start + i == cursor {
            spans.push(Span::styled(
                c.to_string(),
                Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw(c.to_string()));
        }
    }
    // If cursor is at the end, show a block cursor
    if cursor >= chars.len() {
        spans.push(Span::styled(" ", Style::default().bg(Color::White)));
    }
    spans
}
