use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;

/// Action returned from key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Continue,
    Quit,
}

pub fn handle_key_event(app: &mut App, key: KeyEvent) -> KeyAction {
    // Windows reports releases too; only act on presses
    if key.kind == KeyEventKind::Release {
        return KeyAction::Continue;
    }

    // 0. True global keybindings, work even while typing
    if let (KeyCode::Char('q' | 'c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return KeyAction::Quit;
    }

    // 1. Insert mode - modal prompt or the custom-minutes field
    if app.input_mode.is_text_input() {
        if app.is_modal_open() {
            app.handle_modal_key(key);
        } else {
            app.edit_custom_minutes(key);
        }
        return KeyAction::Continue;
    }

    // 2. Help overlay swallows everything except its own toggles
    if app.help_menu_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.toggle_help_menu();
        }
        return KeyAction::Continue;
    }

    // 3. Normal-mode keybindings
    handle_normal_key(app, key)
}

fn handle_normal_key(app: &mut App, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => return KeyAction::Quit,
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('s') => app.toggle_timer(),
        KeyCode::Char('r') => app.reset_timer(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.apply_preset(index);
        }
        KeyCode::Char('c') => app.begin_custom_edit(),
        KeyCode::Char('o') => {
            if !app.timer.is_running() {
                app.open_address_prompt();
            }
        }
        KeyCode::Char('m') => app.toggle_sound(),
        KeyCode::Char('t') => app.test_chime(),
        KeyCode::Char('y') => app.copy_share_address(),
        KeyCode::Char('f') => app.toggle_fullscreen(),
        KeyCode::Esc if app.presentation_mode => app.toggle_fullscreen(),
        KeyCode::Char('?') => app.toggle_help_menu(),
        _ => {}
    }
    KeyAction::Continue
}
