//! Text-bearing widgets
//!
//! The binding layer needs three things from a widget: a stable identity,
//! its current text, and a way to hear about text changes. [`TextWidget`]
//! captures exactly that. [`Label`] and [`TextField`] are the two widget
//! models this crate binds validators to; host toolkits can implement
//! [`TextWidget`] for their own types.

mod label;
mod text_field;

pub use label::Label;
pub use text_field::TextField;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use smallvec::SmallVec;

/// Process-unique widget identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Allocates a fresh id.
    #[must_use]
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "widget#{}", self.0)
    }
}

/// Handle for a text-change subscription.
///
/// Only meaningful to the widget that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Wraps a widget-local subscription number.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Callback receiving the widget's new text.
pub type TextListener = Box<dyn FnMut(&str)>;

/// The contract a widget must meet to carry a validator.
pub trait TextWidget {
    /// Stable identity used to look up the bound validator.
    fn widget_id(&self) -> WidgetId;

    /// Currently displayed text.
    fn text(&self) -> &str;

    /// Registers a listener called after every text change.
    fn subscribe(&mut self, listener: TextListener) -> SubscriptionId;

    /// Removes a listener. Returns false if `id` is unknown.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;
}

/// Listener list shared by the widget models.
#[derive(Default)]
pub(crate) struct Listeners {
    entries: SmallVec<[(SubscriptionId, TextListener); 1]>,
    next: u64,
}

impl Listeners {
    pub(crate) fn subscribe(&mut self, listener: TextListener) -> SubscriptionId {
        let id = SubscriptionId::new(self.next);
        self.next += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(existing, _)| *existing != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, text: &str) {
        for (_, listener) in &mut self.entries {
            listener(text);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn widget_ids_are_unique() {
        let a = WidgetId::next();
        let b = WidgetId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn listeners_notify_in_order_and_unsubscribe() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::default();

        let first = Rc::clone(&seen);
        let a = listeners.subscribe(Box::new(move |t: &str| {
            first.borrow_mut().push(format!("a:{t}"));
        }));
        let second = Rc::clone(&seen);
        listeners.subscribe(Box::new(move |t: &str| {
            second.borrow_mut().push(format!("b:{t}"));
        }));

        listeners.notify("x");
        assert!(listeners.unsubscribe(a));
        assert!(!listeners.unsubscribe(a));
        listeners.notify("y");

        assert_eq!(*seen.borrow(), vec!["a:x", "b:x", "b:y"]);
        assert_eq!(listeners.len(), 1);
    }
}
