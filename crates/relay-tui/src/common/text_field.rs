//! Minimal single-line text field for form editing.
//!
//! This is a lightweight replacement for external textarea helpers.
//! It supports the subset of editing operations the login form needs.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Single-line edit buffer with a char-indexed cursor.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    /// Creates a field pre-filled with `value`, cursor at the end.
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    /// Returns the field contents.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the cursor position in char units.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Inserts a character at the cursor, advancing the cursor.
    pub fn insert_char(&mut self, ch: char) {
        let byte_idx = char_to_byte_index(&self.value, self.cursor);
        self.value.insert(byte_idx, ch);
        self.cursor += 1;
    }

    /// Deletes the character before the cursor (Backspace semantics).
    pub fn delete_prev_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = char_to_byte_index(&self.value, self.cursor - 1);
        let end = char_to_byte_index(&self.value, self.cursor);
        self.value.replace_range(start..end, "");
        self.cursor -= 1;
    }

    /// Deletes the character at the cursor (Delete key semantics).
    pub fn delete_next_char(&mut self) {
        if self.cursor >= self.value.chars().count() {
            return;
        }
        let start = char_to_byte_index(&self.value, self.cursor);
        let end = char_to_byte_index(&self.value, self.cursor + 1);
        self.value.replace_range(start..end, "");
    }

    /// Clears the field entirely.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Applies an editing key to the field.
    ///
    /// Returns true if the key was consumed. Navigation keys that move
    /// focus between fields are not handled here.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
                true
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_char(ch);
                true
            }
            KeyCode::Backspace => {
                self.delete_prev_char();
                true
            }
            KeyCode::Delete => {
                self.delete_next_char();
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                true
            }
            _ => false,
        }
    }
}

/// Converts a char index to a byte index, clamped to the string end.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventKind;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_insert_and_delete() {
        let mut field = TextField::default();
        field.insert_char('a');
        field.insert_char('b');
        assert_eq!(field.value(), "ab");
        assert_eq!(field.cursor(), 2);

        field.delete_prev_char();
        assert_eq!(field.value(), "a");
        assert_eq!(field.cursor(), 1);
    }

    #[test]
    fn test_with_value_places_cursor_at_end() {
        let field = TextField::with_value("alice");
        assert_eq!(field.cursor(), 5);
    }

    #[test]
    fn test_insert_mid_string_multibyte() {
        let mut field = TextField::with_value("zółw");
        field.handle_key(key(KeyCode::Home));
        field.handle_key(key(KeyCode::Right));
        field.insert_char('x');
        assert_eq!(field.value(), "zxółw");
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut field = TextField::with_value("secret");
        let cleared = field.handle_key(KeyEvent {
            code: KeyCode::Char('u'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        });
        assert!(cleared);
        assert!(field.is_empty());
    }

    #[test]
    fn test_cursor_clamped_at_bounds() {
        let mut field = TextField::with_value("ab");
        field.handle_key(key(KeyCode::Right));
        assert_eq!(field.cursor(), 2);
        field.handle_key(key(KeyCode::Home));
        field.handle_key(key(KeyCode::Left));
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_space_is_a_regular_character() {
        let mut field = TextField::with_value("alice");
        field.insert_char(' ');
        field.insert_char('s');
        assert_eq!(field.value(), "alice s");
    }
}
