//! Controls panel: start/reset, presets, custom duration, sound, sharing.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::text_field::input_spans;
use crate::app::App;
use crate::input::InputMode;
use crate::location::TIME_PARAM;
use crate::timer::{Phase, PRESETS};

/// Rows needed to show the whole panel, borders included
pub const PANEL_HEIGHT: u16 = 12;

/// Settings and controls below the clock
pub struct SettingsPanel<'a> {
    app: &'a App,
}

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

fn label_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn heading(text: &'static str) -> Span<'static> {
    Span::styled(
        format!("{text:<10}"),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

impl<'a> SettingsPanel<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    fn controls_line(&self) -> Line<'static> {
        let timer = &self.app.timer;
        let toggle_label = match timer.phase() {
            Phase::Running => "⏸ Pause",
            Phase::Idle | Phase::Finished => "▶ Start",
        };
        Line::from(vec![
            heading("Timer"),
            Span::styled(" Space ", key_style()),
            Span::styled(toggle_label, label_style(!timer.is_finished())),
            Span::raw("   "),
            Span::styled(" r ", key_style()),
            Span::styled("🔄 Reset", label_style(true)),
        ])
    }

    fn presets_line(&self) -> Line<'static> {
        let enabled = !self.app.timer.is_running();
        let current = self.app.timer.configured_minutes();
        let mut spans = vec![heading("Presets")];
        for (idx, minutes) in PRESETS.iter().enumerate() {
            let mut style = label_style(enabled);
            if minutes.get() == current {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!(" {} ", idx + 1), key_style()));
            spans.push(Span::styled(format!("{minutes} min"), style));
            spans.push(Span::raw("  "));
        }
        Line::from(spans)
    }

    fn custom_line(&self, width: usize) -> Line<'static> {
        let enabled = !self.app.timer.is_running();
        let editing = self.app.input_mode == InputMode::Insert && !self.app.is_modal_open();

        let mut spans = vec![
            heading("Custom"),
            Span::styled(" c ", key_style()),
            Span::styled("[", label_style(enabled)),
        ];
        let field = input_spans(&self.app.custom_minutes, width.clamp(2, 4), editing);
        spans.extend(field.into_iter().map(|s| {
            if editing {
                s
            } else {
                s.style(label_style(enabled))
            }
        }));
        spans.push(Span::styled("] min (1-99)", label_style(enabled)));
        if editing {
            spans.push(Span::styled(
                "  Enter apply · Esc cancel",
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    }

    fn sound_line(&self) -> Line<'static> {
        let enabled = self.app.alerter.is_enabled();
        let (label, style) = if enabled {
            ("🔊 Sound on ", Style::default().fg(Color::Green))
        } else {
            ("🔇 Sound off", Style::default().fg(Color::DarkGray))
        };
        Line::from(vec![
            heading("Sound"),
            Span::styled(" m ", key_style()),
            Span::styled(label, style),
            Span::raw("   "),
            Span::styled(" t ", key_style()),
            Span::styled("🔔 Test chime", label_style(enabled)),
        ])
    }

    fn share_line(&self) -> Line<'static> {
        Line::from(vec![
            heading("Share"),
            Span::styled(" y ", key_style()),
            Span::styled("📋 Copy ", label_style(true)),
            Span::styled(
                self.app.location.to_string(),
                Style::default().fg(Color::Blue),
            ),
        ])
    }

    fn display_line(&self) -> Line<'static> {
        let enabled = !self.app.timer.is_running();
        Line::from(vec![
            heading("Display"),
            Span::styled(" f ", key_style()),
            Span::styled("🖥 Full screen", label_style(true)),
            Span::raw("   "),
            Span::styled(" o ", key_style()),
            Span::styled("Open address", label_style(enabled)),
        ])
    }
}

impl Widget for SettingsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Settings ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let hint = Line::from(Span::styled(
            format!(
                "Chime rings 3 times when time is up · open with ?{TIME_PARAM}=5 to start at 5 minutes"
            ),
            Style::default().fg(Color::DarkGray),
        ));

        let lines = vec![
            self.controls_line(),
            Line::raw(""),
            self.presets_line(),
            self.custom_line(inner.width as usize),
            self.sound_line(),
            self.share_line(),
            self.display_line(),
            Line::raw(""),
            hint,
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;

    fn render_text(app: &App) -> String {
        let area = Rect::new(0, 0, 100, PANEL_HEIGHT);
        let mut buf = Buffer::empty(area);
        SettingsPanel::new(app).render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn shows_share_address_and_presets() {
        let (app, _) = test_app("http://localhost:3000/?time=15");
        let text = render_text(&app);
        assert!(text.contains("http://localhost:3000/?time=15"));
        assert!(text.contains("30 min"));
        assert!(text.contains("Start"));
    }

    #[test]
    fn running_timer_shows_pause() {
        let (mut app, _) = test_app("/");
        app.toggle_timer();
        assert!(render_text(&app).contains("Pause"));
    }
}
