//! Search input handling (pure state transitions).
//!
//! Edits the name search box. The cursor counts characters, not bytes, so
//! multi-byte names never split a code point.
//! All functions are pure - no side effects, testable without TUI.

/// Text and cursor of the search box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchEdit {
    /// Current text.
    pub text: String,
    /// Cursor position in characters, `0..=text.chars().count()`.
    pub cursor: usize,
}

impl SearchEdit {
    /// Start editing `text` with the cursor at the end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

/// Insert a character at the cursor and advance it.
pub fn handle_char_input(mut edit: SearchEdit, ch: char) -> SearchEdit {
    let at = edit.byte_offset(edit.cursor);
    edit.text.insert(at, ch);
    edit.cursor += 1;
    edit
}

/// Delete the character before the cursor. No-op at position 0.
pub fn handle_backspace(mut edit: SearchEdit) -> SearchEdit {
    if edit.cursor == 0 {
        return edit;
    }
    let at = edit.byte_offset(edit.cursor - 1);
    edit.text.remove(at);
    edit.cursor -= 1;
    edit
}

/// Delete the character under the cursor. No-op at the end.
pub fn handle_delete(mut edit: SearchEdit) -> SearchEdit {
    if edit.cursor < edit.char_len() {
        let at = edit.byte_offset(edit.cursor);
        edit.text.remove(at);
    }
    edit
}

/// Move cursor left by one position. Saturates at 0.
pub fn handle_cursor_left(mut edit: SearchEdit) -> SearchEdit {
    edit.cursor = edit.cursor.saturating_sub(1);
    edit
}

/// Move cursor right by one position. Saturates at the text length.
pub fn handle_cursor_right(mut edit: SearchEdit) -> SearchEdit {
    edit.cursor = (edit.cursor + 1).min(edit.char_len());
    edit
}

/// Move cursor to the start.
pub fn handle_home(mut edit: SearchEdit) -> SearchEdit {
    edit.cursor = 0;
    edit
}

/// Move cursor past the last character.
pub fn handle_end(mut edit: SearchEdit) -> SearchEdit {
    edit.cursor = edit.char_len();
    edit
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
