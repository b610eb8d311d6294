use ratatui::layout::{Constraint, Layout, Rect};

use super::settings::PANEL_HEIGHT;

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub clock: Rect,
    /// Hidden in presentation mode
    pub settings: Option<Rect>,
    pub help_bar: Rect,
}

/// Clock on top, settings panel below it, help bar at the bottom.
///
/// Presentation mode gives the clock everything but the help bar.
pub fn create_layout(area: Rect, presentation_mode: bool) -> ScreenLayout {
    let [main, help_bar] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    if presentation_mode {
        return ScreenLayout {
            clock: main,
            settings: None,
            help_bar,
        };
    }

    let [clock, settings] =
        Layout::vertical([Constraint::Min(7), Constraint::Length(PANEL_HEIGHT)]).areas(main);

    ScreenLayout {
        clock,
        settings: Some(settings),
        help_bar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_layout_stacks_clock_settings_and_help() {
        let layout = create_layout(Rect::new(0, 0, 80, 40), false);
        assert_eq!(layout.help_bar, Rect::new(0, 39, 80, 1));
        let settings = layout.settings.unwrap();
        assert_eq!(settings.height, PANEL_HEIGHT);
        assert_eq!(settings.bottom(), 39);
        assert_eq!(layout.clock, Rect::new(0, 0, 80, 39 - PANEL_HEIGHT));
    }

    #[test]
    fn presentation_mode_hides_settings() {
        let layout = create_layout(Rect::new(0, 0, 80, 40), true);
        assert!(layout.settings.is_none());
        assert_eq!(layout.clock, Rect::new(0, 0, 80, 39));
    }
}
