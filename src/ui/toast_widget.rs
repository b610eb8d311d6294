use crate::ui::toast::{Toast, ToastType};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Stacked notifications in the bottom-right corner
pub struct ToastWidget<'a> {
    toasts: &'a [&'a Toast],
}

impl<'a> ToastWidget<'a> {
    pub fn new(toasts: &'a [&'a Toast]) -> Self {
        Self { toasts }
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let toast_height = 3u16;
        let gap = 1u16;

        for (idx, toast) in self.toasts.iter().enumerate() {
            let width = (toast.message.chars().count() as u16 + 6).clamp(24, 48);
            let toast_area = toast_rect(area, width, toast_height, idx as u16 * (toast_height + gap));
            if toast_area.height == 0 {
                break;
            }

            frame.render_widget(Clear, toast_area);

            let border_style = border_style(toast.toast_type);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .style(Style::default().bg(Color::Black));

            let text = Paragraph::new(Line::from(vec![
                Span::styled(icon(toast.toast_type), border_style.add_modifier(Modifier::BOLD)),
                Span::raw(" "),
                Span::raw(toast.message.clone()),
            ]))
            .block(block)
            .alignment(Alignment::Left);

            frame.render_widget(text, toast_area);
        }
    }
}

fn toast_rect(area: Rect, width: u16, height: u16, offset: u16) -> Rect {
    let x = area.right().saturating_sub(width + 2).max(area.left());
    let bottom = area.bottom().saturating_sub(2 + offset);
    let y = bottom.saturating_sub(height).max(area.top());
    Rect::new(
        x,
        y,
        width.min(area.width),
        height.min(bottom.saturating_sub(y)),
    )
}

fn icon(toast_type: ToastType) -> &'static str {
    match toast_type {
        ToastType::Success => "✓",
        ToastType::Warning => "⚠",
        ToastType::Error => "✗",
    }
}

fn border_style(toast_type: ToastType) -> Style {
    let color = match toast_type {
        ToastType::Success => Color::Green,
        ToastType::Warning => Color::Yellow,
        ToastType::Error => Color::Red,
    };
    Style::default().fg(color)
}
