use roster_core::credentials::CredentialErrors;

/// Single-line editable text with a char-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    pub fn insert(&mut self, ch: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars().filter(|ch| !ch.is_control()) {
            self.insert(ch);
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map_or(self.value.len(), |(idx, _)| idx)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    pub fn toggle(self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        }
    }
}

/// Login form state. Rebuilt from default whenever the screen is shown again.
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub email: TextField,
    pub password: TextField,
    pub focus: LoginField,
    /// Messages from the last submit.
    pub errors: CredentialErrors,
}

impl LoginState {
    pub fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace_mid_string() {
        let mut field = TextField::default();
        field.insert_str("ac");
        field.move_left();
        field.insert('b');
        assert_eq!(field.value(), "abc");
        assert_eq!(field.cursor(), 2);

        field.backspace();
        assert_eq!(field.value(), "ac");
        assert_eq!(field.cursor(), 1);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut field = TextField::default();
        field.insert_str("héllo");
        field.move_home();
        field.move_right();
        field.delete();
        assert_eq!(field.value(), "hllo");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut field = TextField::default();
        field.backspace();
        field.move_left();
        assert_eq!(field.cursor(), 0);

        field.insert_str("ab");
        field.move_right();
        assert_eq!(field.cursor(), 2);
        field.delete();
        assert_eq!(field.value(), "ab");
    }

    #[test]
    fn test_paste_drops_control_chars() {
        let mut field = TextField::default();
        field.insert_str("a@b.com\n");
        assert_eq!(field.value(), "a@b.com");
    }
}
