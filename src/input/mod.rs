//! Input modes and single-line text editing.
//!
//! - **Normal**: single-key commands (start, reset, presets, ...)
//! - **Insert**: keys go to a text field (custom minutes or the address prompt)

use crossterm::event::{KeyCode, KeyEvent};

/// Modal input state for the TUI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Commands are active
    #[default]
    Normal,
    /// A text field has the keyboard
    Insert,
}

impl InputMode {
    /// Returns the display name for the status line
    pub fn display_name(&self) -> &'static str {
        match self {
            InputMode::Normal => "NORMAL",
            InputMode::Insert => "INSERT",
        }
    }

    /// Returns true if this mode accepts text input
    pub fn is_text_input(&self) -> bool {
        matches!(self, InputMode::Insert)
    }
}

/// What a key did to a [`TextInput`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputResult {
    /// Still editing
    Editing,
    /// Enter pressed; carries the current text
    Submitted(String),
    /// Escape pressed
    Cancelled,
}

/// A single-line text buffer with a cursor (char index)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    /// Create a field holding `text`, cursor at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the contents, moving the cursor to the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        *self = Self::with_text(text);
    }

    /// Handle key input for the field
    pub fn handle_key(&mut self, key: KeyEvent) -> TextInputResult {
        match key.code {
            KeyCode::Enter => return TextInputResult::Submitted(self.text.clone()),
            KeyCode::Esc => return TextInputResult::Cancelled,
            KeyCode::Char(c) => {
                let at = self.byte_index(self.cursor);
                self.text.insert(at, c);
                self.cursor += 1;
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_index(self.cursor);
                    self.text.remove(at);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.len() {
                    let at = self.byte_index(self.cursor);
                    self.text.remove(at);
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.cursor < self.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Home => {
                self.cursor = 0;
            }
            KeyCode::End => {
                self.cursor = self.len();
            }
            _ => {}
        }
        TextInputResult::Editing
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(input: &mut TextInput, s: &str) {
        for c in s.chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn display_name_returns_correct_string_for_each_mode() {
        assert_eq!(InputMode::Normal.display_name(), "NORMAL");
        assert_eq!(InputMode::Insert.display_name(), "INSERT");
        assert!(InputMode::Insert.is_text_input());
        assert!(!InputMode::Normal.is_text_input());
    }

    #[test]
    fn typing_and_submitting() {
        let mut input = TextInput::default();
        type_str(&mut input, "15");
        assert_eq!(
            input.handle_key(key(KeyCode::Enter)),
            TextInputResult::Submitted("15".to_string())
        );
    }

    #[test]
    fn editing_in_the_middle() {
        let mut input = TextInput::with_text("19");
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Backspace));
        type_str(&mut input, "2");
        assert_eq!(input.text(), "29");
        assert_eq!(input.cursor(), 1);

        input.handle_key(key(KeyCode::Home));
        input.handle_key(key(KeyCode::Delete));
        assert_eq!(input.text(), "9");
    }

    #[test]
    fn multibyte_characters_are_edited_by_char() {
        let mut input = TextInput::with_text("5分");
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.text(), "5");
    }

    #[test]
    fn escape_cancels() {
        let mut input = TextInput::with_text("abc");
        assert_eq!(input.handle_key(key(KeyCode::Esc)), TextInputResult::Cancelled);
        assert_eq!(input.text(), "abc");
    }
}
