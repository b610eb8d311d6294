//! Big-digit clock, progress bar and status line.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget},
};

use super::palette;
use crate::timer::{Phase, TimerState};

/// Rows of a glyph
const GLYPH_HEIGHT: usize = 5;
/// Cells per glyph pixel horizontally, so pixels look roughly square
const PIXEL_WIDTH: usize = 2;
/// Empty pixels between glyphs
const GLYPH_GAP: usize = 1;

/// 3x5 pixel glyphs, `#` is lit
fn glyph(c: char) -> Option<[&'static str; GLYPH_HEIGHT]> {
    let rows = match c {
        '0' => ["###", "#.#", "#.#", "#.#", "###"],
        '1' => [".#.", "##.", ".#.", ".#.", "###"],
        '2' => ["###", "..#", "###", "#..", "###"],
        '3' => ["###", "..#", "###", "..#", "###"],
        '4' => ["#.#", "#.#", "###", "..#", "..#"],
        '5' => ["###", "#..", "###", "..#", "###"],
        '6' => ["###", "#..", "###", "#.#", "###"],
        '7' => ["###", "..#", "..#", "..#", "..#"],
        '8' => ["###", "#.#", "###", "#.#", "###"],
        '9' => ["###", "#.#", "###", "..#", "###"],
        ':' => [".", "#", ".", "#", "."],
        _ => return None,
    };
    Some(rows)
}

/// Render `text` as big block characters, each pixel `scale` rows tall and
/// `PIXEL_WIDTH * scale` cells wide. Unknown characters are skipped.
pub fn big_text_lines(text: &str, scale: usize) -> Vec<String> {
    let scale = scale.max(1);
    let glyphs: Vec<_> = text.chars().filter_map(glyph).collect();
    let cell = |lit: bool| if lit { "█" } else { " " };

    let mut lines = Vec::with_capacity(GLYPH_HEIGHT * scale);
    for row in 0..GLYPH_HEIGHT {
        let mut line = String::new();
        for (idx, rows) in glyphs.iter().enumerate() {
            if idx > 0 {
                line.push_str(&" ".repeat(GLYPH_GAP * PIXEL_WIDTH * scale));
            }
            for pixel in rows[row].chars() {
                line.push_str(&cell(pixel == '#').repeat(PIXEL_WIDTH * scale));
            }
        }
        for _ in 0..scale {
            lines.push(line.clone());
        }
    }
    lines
}

/// Width in cells of [`big_text_lines`] output
pub fn big_text_width(text: &str, scale: usize) -> usize {
    let glyphs: Vec<_> = text.chars().filter_map(glyph).collect();
    let pixels: usize = glyphs.iter().map(|rows| rows[0].len()).sum::<usize>()
        + GLYPH_GAP * glyphs.len().saturating_sub(1);
    pixels * PIXEL_WIDTH * scale.max(1)
}

/// Largest scale at which `text` fits, or `None` when even scale 1 does not
pub fn fit_scale(text: &str, area: Rect) -> Option<usize> {
    (1..=4)
        .rev()
        .find(|&s| big_text_width(text, s) <= area.width as usize && GLYPH_HEIGHT * s <= area.height as usize)
}

/// Clock face for the timer
pub struct ClockWidget<'a> {
    timer: &'a TimerState,
}

impl<'a> ClockWidget<'a> {
    pub fn new(timer: &'a TimerState) -> Self {
        Self { timer }
    }

    fn status_line(&self) -> Line<'static> {
        match self.timer.phase() {
            Phase::Finished => Line::from(Span::styled(
                "⏰ Time's up!",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
            )),
            Phase::Running => Line::from(Span::styled(
                "running",
                Style::default().fg(Color::Gray),
            )),
            Phase::Idle if self.timer.remaining_seconds() < self.timer.total_seconds() => {
                Line::from(Span::styled("paused", Style::default().fg(Color::Gray)))
            }
            Phase::Idle => Line::from(Span::styled("ready", Style::default().fg(Color::Gray))),
        }
    }
}

impl Widget for ClockWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let background = palette::background_color(self.timer.background_tone());
        buf.set_style(area, Style::default().bg(background));

        let [caption_area, digits_area, gauge_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let caption = format!("Duration: {} min", self.timer.configured_minutes());
        Paragraph::new(Line::from(Span::styled(
            caption,
            Style::default().fg(Color::Gray),
        )))
        .alignment(Alignment::Center)
        .render(caption_area, buf);

        let clock = self.timer.clock_text();
        let digit_style = Style::default()
            .fg(palette::text_color(self.timer.text_tone()))
            .add_modifier(Modifier::BOLD);
        match fit_scale(&clock, digits_area) {
            Some(scale) => {
                let lines = big_text_lines(&clock, scale);
                let top = digits_area.y + (digits_area.height.saturating_sub(lines.len() as u16)) / 2;
                let height = (lines.len() as u16).min(digits_area.height);
                let text: Vec<Line> = lines.into_iter().map(Line::from).collect();
                Paragraph::new(text)
                    .style(digit_style)
                    .alignment(Alignment::Center)
                    .render(Rect::new(digits_area.x, top, digits_area.width, height), buf);
            }
            None => {
                // Too small for big digits
                let top = digits_area.y + digits_area.height / 2;
                Paragraph::new(Line::from(Span::styled(clock, digit_style)))
                    .alignment(Alignment::Center)
                    .render(Rect::new(digits_area.x, top, digits_area.width, 1), buf);
            }
        }

        let elapsed = self.timer.elapsed_percentage();
        let margin = gauge_area.width / 10;
        let gauge_rect = Rect::new(
            gauge_area.x + margin,
            gauge_area.y,
            gauge_area.width.saturating_sub(margin * 2),
            gauge_area.height,
        );
        Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(palette::progress_color(self.timer.progress_tone()))
                    .bg(Color::DarkGray),
            )
            .ratio(elapsed / 100.0)
            .label(format!("{elapsed:.0}%"))
            .render(gauge_rect, buf);

        Paragraph::new(self.status_line())
            .alignment(Alignment::Center)
            .render(status_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn big_text_has_glyph_height_rows() {
        let lines = big_text_lines("10:00", 1);
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.chars().count() == big_text_width("10:00", 1)));
    }

    #[test]
    fn width_accounts_for_colon_and_gaps() {
        // four 3-pixel digits, one 1-pixel colon, four gaps, two cells per pixel
        assert_eq!(big_text_width("10:00", 1), (4 * 3 + 1 + 4) * 2);
        assert_eq!(big_text_width("10:00", 2), (4 * 3 + 1 + 4) * 4);
    }

    #[test]
    fn scaled_text_repeats_rows() {
        let lines = big_text_lines("8", 2);
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], lines[1]);
        assert_eq!(lines[0].chars().count(), 12);
    }

    #[test]
    fn fit_scale_picks_largest_that_fits() {
        assert_eq!(fit_scale("10:00", Rect::new(0, 0, 34, 5)), Some(1));
        assert_eq!(fit_scale("10:00", Rect::new(0, 0, 80, 12)), Some(2));
        assert_eq!(fit_scale("10:00", Rect::new(0, 0, 20, 5)), None);
        assert_eq!(fit_scale("10:00", Rect::new(0, 0, 200, 4)), None);
    }

    #[test]
    fn renders_finished_banner() {
        let mut timer = TimerState::new(crate::timer::Minutes::new(1).unwrap());
        timer.toggle();
        for _ in 0..60 {
            timer.tick();
        }
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        ClockWidget::new(&timer).render(area, &mut buf);

        let last_row: String = (0..area.width)
            .map(|x| buf[(x, area.height - 1)].symbol().to_string())
            .collect();
        assert!(last_row.contains("Time's up!"));
    }
}
