use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{poll, read, Event};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use tracing::debug;

use crate::app::{App, ModalState};
use crate::handlers::{handle_key_event, KeyAction};
use crate::input::InputMode;
use crate::ui::layout::create_layout;
use crate::ui::modal::AddressModal;
use crate::ui::{ClockWidget, HelpMenuWidget, SettingsPanel, ToastWidget};

/// Upper bound on how long the loop waits for input before redrawing
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        let now = Instant::now();

        // Fire the countdown tick if one is due
        app.on_frame(now);

        // Update toast manager (remove expired)
        app.toast_manager.update(now);

        // Draw UI
        terminal.draw(|f| draw_ui(f, app))?;

        // Wake up in time for the next tick
        let timeout = app
            .until_next_tick(Instant::now())
            .map_or(FRAME_INTERVAL, |d| d.min(FRAME_INTERVAL));

        if poll(timeout)? {
            match read()? {
                Event::Key(key) => {
                    if handle_key_event(app, key) == KeyAction::Quit {
                        app.quit();
                    }
                }
                Event::Resize(w, h) => debug!(w, h, "terminal resized"),
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn draw_ui(f: &mut Frame, app: &App) {
    let layout = create_layout(f.area(), app.presentation_mode);

    f.render_widget(ClockWidget::new(&app.timer), layout.clock);
    if let Some(settings_area) = layout.settings {
        f.render_widget(SettingsPanel::new(app), settings_area);
    }

    draw_help_bar(f, layout.help_bar, app);

    let toasts = app.toast_manager.visible_toasts();
    ToastWidget::new(&toasts).render(f, f.area());

    if app.help_menu_open {
        let area = HelpMenuWidget::calculate_area(f.area());
        f.render_widget(HelpMenuWidget::new(), area);
    }

    // Modal last so it sits on top
    draw_modal(f, app);
}

fn draw_modal(f: &mut Frame, app: &App) {
    match &app.modal_state {
        ModalState::None => {}
        ModalState::OpenAddress(input) => {
            let area = AddressModal::calculate_area(f.area());
            f.render_widget(AddressModal::new(input, &app.location), area);
        }
    }
}

fn draw_help_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![build_mode_indicator(app)];

    let hints: &[(&str, &str)] = if app.is_modal_open() {
        &[(" Enter ", "open "), (" Esc ", "cancel")]
    } else if app.input_mode == InputMode::Insert {
        &[(" Enter ", "apply "), (" Esc ", "cancel")]
    } else if app.presentation_mode {
        &[(" Space ", "start/pause "), (" r ", "reset "), (" Esc ", "exit full screen "), (" q ", "quit")]
    } else {
        &[(" Space ", "start/pause "), (" r ", "reset "), (" 1-5 ", "preset "), (" ? ", "help "), (" q ", "quit")]
    };
    for (key, label) in hints {
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(*label));
    }

    if !app.alerter.is_enabled() {
        spans.push(Span::styled(
            "  🔇 muted",
            Style::default().fg(Color::Gray),
        ));
    }

    let help = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    f.render_widget(help, area);
}

/// Build the mode indicator span for the help bar
fn build_mode_indicator(app: &App) -> Span<'static> {
    let bg = match app.input_mode {
        InputMode::Normal => Color::Blue,
        InputMode::Insert => Color::Green,
    };
    Span::styled(
        format!(" -- {} -- ", app.input_mode.display_name()),
        Style::default().fg(Color::Black).bg(bg),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let area = buf.area;
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
    fn full_frame_shows_settings_and_help_bar() {
        let (app, _) = test_app("http://localhost:3000/?time=5");
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| draw_ui(f, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Duration: 5 min"));
        assert!(text.contains("Settings"));
        assert!(text.contains("-- NORMAL --"));
    }

    #[test]
    fn presentation_mode_hides_settings() {
        let (mut app, _) = test_app("/");
        app.toggle_fullscreen();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| draw_ui(f, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(!text.contains("Settings"));
        assert!(text.contains("exit full screen"));
    }

    #[test]
    fn address_prompt_draws_over_everything() {
        let (mut app, _) = test_app("/");
        app.open_address_prompt();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| draw_ui(f, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Open Address"));
        assert!(text.contains("-- INSERT --"));
    }
}
