use zeroize::Zeroize;

/// Single-line text field with a char-based cursor.
///
/// Masked buffers never render their content and wipe it on drop, which is
/// what the device password field uses.
#[derive(Default, Clone)]
pub struct InputBuffer {
    content: String,
    cursor: usize,
    masked: bool,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn masked() -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            masked: true,
        }
    }

    /// Buffer pre-filled with `value`, cursor at the end.
    pub fn with_content(value: &str, masked: bool) -> Self {
        let mut buffer = Self {
            content: String::new(),
            cursor: 0,
            masked,
        };
        buffer.set(value);
        buffer
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn display(&self, mask_char: char) -> String {
        if self.masked {
            mask_char.to_string().repeat(self.len())
        } else {
            self.content.clone()
        }
    }

    pub fn insert(&mut self, c: char) {
        let byte_pos = self.cursor_byte_position();
        self.content.insert(byte_pos, c);
        self.cursor += 1;
    }

    pub fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.remove_at_cursor();
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        self.remove_at_cursor();
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.content.zeroize();
        self.content.clear();
        self.cursor = 0;
    }

    pub fn set(&mut self, value: &str) {
        self.content.zeroize();
        self.content = value.to_string();
        self.cursor = self.len();
    }

    fn remove_at_cursor(&mut self) {
        let byte_pos = self.cursor_byte_position();
        let next_byte_pos = self.content[byte_pos..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| byte_pos + i)
            .unwrap_or(self.content.len());
        self.content.drain(byte_pos..next_byte_pos);
    }

    fn cursor_byte_position(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}

impl Drop for InputBuffer {
    fn drop(&mut self) {
        if self.masked {
            self.content.zeroize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_content_places_cursor_at_end() {
        let buffer = InputBuffer::with_content("7015", false);
        assert_eq!(buffer.content(), "7015");
        assert_eq!(buffer.cursor(), 4);
    }

    #[test]
    fn edits_in_the_middle() {
        let mut buffer = InputBuffer::with_content("7015", false);
        buffer.move_left();
        buffer.move_left();
        buffer.delete_back();
        buffer.insert('9');
        assert_eq!(buffer.content(), "7915");
        assert_eq!(buffer.cursor(), 2);

        buffer.delete_forward();
        assert_eq!(buffer.content(), "795");
    }

    #[test]
    fn delete_at_edges_is_refused() {
        let mut buffer = InputBuffer::with_content("ab", false);
        assert!(!buffer.delete_forward());
        buffer.move_start();
        assert!(!buffer.delete_back());
        assert_eq!(buffer.content(), "ab");
    }

    #[test]
    fn multibyte_characters_are_single_positions() {
        let mut buffer = InputBuffer::with_content("سرور", false);
        assert_eq!(buffer.len(), 4);
        buffer.delete_back();
        assert_eq!(buffer.content(), "سرو");
    }

    #[test]
    fn masked_display_hides_content() {
        let buffer = InputBuffer::with_content("123456", true);
        assert!(buffer.is_masked());
        assert_eq!(buffer.display('*'), "******");
        assert_eq!(InputBuffer::with_content("abc", false).display('*'), "abc");
    }
}
