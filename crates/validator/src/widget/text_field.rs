//! Editable single-line text field.
//!
//! Cursor positions are char indices. Every edit that changes the text
//! notifies listeners once with the full new text.

use super::{Listeners, SubscriptionId, TextListener, TextWidget, WidgetId};

/// An editable text widget with a cursor and an optional placeholder.
///
/// The placeholder is display-only and never reported as the text.
#[derive(Debug)]
pub struct TextField {
    id: WidgetId,
    text: String,
    placeholder: Option<String>,
    /// Char index, `0..=char_count`.
    cursor: usize,
    listeners: Listeners,
}

impl TextField {
    /// Creates an empty field.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: WidgetId::next(),
            text: String::new(),
            placeholder: None,
            cursor: 0,
            listeners: Listeners::default(),
        }
    }

    /// Set the initial text (builder). Moves the cursor to the end.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self.cursor = self.char_count();
        self
    }

    /// Set placeholder text (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Placeholder shown while the field is empty.
    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Cursor position (char index).
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replaces the text, clamping the cursor.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.text {
            return;
        }
        self.text = text;
        self.cursor = self.cursor.min(self.char_count());
        self.changed();
    }

    /// Inserts text at the cursor and advances past it.
    pub fn insert_text(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, s);
        self.cursor += s.chars().count();
        self.changed();
    }

    /// Inserts one character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        let mut buf = [0; 4];
        self.insert_text(c.encode_utf8(&mut buf));
    }

    /// Deletes the character before the cursor (backspace).
    pub fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
        self.changed();
    }

    /// Deletes the character after the cursor.
    pub fn delete_forward(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.text.replace_range(start..end, "");
        self.changed();
    }

    /// Removes all text.
    pub fn clear(&mut self) {
        self.cursor = 0;
        if self.text.is_empty() {
            return;
        }
        self.text.clear();
        self.changed();
    }

    /// Moves the cursor one char left.
    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor one char right.
    pub fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    /// Moves the cursor to the start.
    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the end.
    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn changed(&mut self) {
        self.listeners.notify(&self.text);
    }
}

impl Default for TextField {
    fn default() -> Self {
        Self::new()
    }
}

impl TextWidget for TextField {
    fn widget_id(&self) -> WidgetId {
        self.id
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn subscribe(&mut self, listener: TextListener) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }
}

impl Drop for TextField {
    fn drop(&mut self) {
        crate::binding::release(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(field: &mut TextField) -> Rc<RefCell<Vec<String>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        field.subscribe(Box::new(move |t: &str| sink.borrow_mut().push(t.to_owned())));
        seen
    }

    #[test]
    fn typing_and_backspace() {
        let mut field = TextField::new();
        let seen = recording(&mut field);

        field.insert_char('a');
        field.insert_text("bc");
        field.delete_backward();

        assert_eq!(field.text(), "ab");
        assert_eq!(field.cursor(), 2);
        assert_eq!(*seen.borrow(), vec!["a", "abc", "ab"]);
    }

    #[test]
    fn edits_at_cursor_with_multibyte_text() {
        let mut field = TextField::new().with_text("h\u{e9}o");
        field.move_cursor_left();
        field.insert_char('l');
        assert_eq!(field.text(), "h\u{e9}lo");

        field.move_cursor_home();
        field.move_cursor_right();
        field.delete_forward();
        assert_eq!(field.text(), "hlo");
    }

    #[test]
    fn no_op_edits_do_not_notify() {
        let mut field = TextField::new().with_placeholder("Email");
        let seen = recording(&mut field);

        field.delete_backward();
        field.delete_forward();
        field.insert_text("");
        field.clear();
        field.set_text("");

        assert!(seen.borrow().is_empty());
        assert_eq!(field.placeholder(), Some("Email"));
        assert_eq!(field.text(), "");
    }

    #[test]
    fn set_text_clamps_cursor() {
        let mut field = TextField::new().with_text("abcdef");
        field.set_text("ab");
        assert_eq!(field.cursor(), 2);
        field.move_cursor_end();
        field.move_cursor_right();
        assert_eq!(field.cursor(), 2);
    }
}
