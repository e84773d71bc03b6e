//! Text input state
//!
//! Cursor-aware text editing state for form fields. Rendering is done by the
//! dialogs, which know the focus styling they want.

/// Editable text field state
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position (byte offset; input is edited char-by-char)
    pub cursor: usize,
    /// Placeholder text shown while empty and unfocused
    pub placeholder: String,
}

impl TextInput {
    /// Create a new empty text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content, placing the cursor at the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.content.len();
        self
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = previous_boundary(&self.content, self.cursor);
            self.content.remove(prev);
            self.cursor = prev;
        }
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
        }
    }

    /// Move cursor left one character
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = previous_boundary(&self.content, self.cursor);
        }
    }

    /// Move cursor right one character
    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            let c = self.content[self.cursor..].chars().next().unwrap_or(' ');
            self.cursor += c.len_utf8();
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

/// Byte offset of the char boundary before `at`
fn previous_boundary(s: &str, at: usize) -> usize {
    s[..at]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_value() {
        let mut input = TextInput::new();
        for c in "Boss".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "Boss");
        assert_eq!(input.cursor, 4);
    }

    #[test]
    fn test_backspace() {
        let mut input = TextInput::new().content("Boss");
        input.backspace();
        assert_eq!(input.value(), "Bos");

        input.move_start();
        input.backspace(); // no-op at start
        assert_eq!(input.value(), "Bos");
    }

    #[test]
    fn test_insert_mid_string() {
        let mut input = TextInput::new().content("Bss");
        input.move_start();
        input.move_right();
        input.insert('o');
        assert_eq!(input.value(), "Boss");
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = TextInput::new().content("Boss");
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "oss");
    }

    #[test]
    fn test_multibyte_chars() {
        let mut input = TextInput::new();
        input.insert('é');
        input.insert('t');
        input.backspace();
        input.backspace();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::new().content("something");
        input.clear();
        assert!(input.value().is_empty());
        assert_eq!(input.cursor, 0);
    }
}
