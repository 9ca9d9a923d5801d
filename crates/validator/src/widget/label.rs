//! Read-only text label.

use super::{Listeners, SubscriptionId, TextListener, TextWidget, WidgetId};

/// A non-editable text widget. Its text only changes through
/// [`set_text`](Label::set_text).
#[derive(Debug)]
pub struct Label {
    id: WidgetId,
    text: String,
    listeners: Listeners,
}

impl Label {
    /// Creates an empty label.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: WidgetId::next(),
            text: String::new(),
            listeners: Listeners::default(),
        }
    }

    /// Set the initial text (builder). Does not notify.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Replaces the displayed text, notifying listeners if it changed.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.text {
            return;
        }
        self.text = text;
        self.listeners.notify(&self.text);
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::new()
    }
}

impl TextWidget for Label {
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

impl Drop for Label {
    fn drop(&mut self) {
        crate::binding::release(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn set_text_notifies_only_on_change() {
        let calls = Rc::new(Cell::new(0));
        let handle = Rc::clone(&calls);
        let mut label = Label::new().with_text("a");
        label.subscribe(Box::new(move |_: &str| handle.set(handle.get() + 1)));

        label.set_text("a");
        label.set_text("b");
        label.set_text(String::from("b"));
        label.set_text("");

        assert_eq!(calls.get(), 2);
        assert_eq!(label.text(), "");
    }
}
