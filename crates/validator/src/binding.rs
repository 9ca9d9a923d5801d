//! Widget ↔ validator association
//!
//! A validator is attached to a widget through a per-thread side table keyed
//! by [`WidgetId`]. The table owns a strong handle to the validator; the
//! listener installed on the widget only holds a `Weak`, so neither side
//! keeps the other alive through the subscription.
//!
//! ```rust
//! use textguard::binding::TextValidation;
//! use textguard::widget::TextField;
//! use textguard::StringValidator;
//!
//! let validator = StringValidator::new(Some(3), None, None)?.into_shared();
//! let mut field = TextField::new();
//! field.set_string_validator(Some(validator.clone()));
//!
//! field.insert_text("ab");
//! assert!(!validator.borrow().is_valid());
//! field.insert_text("c");
//! assert!(validator.borrow().is_valid());
//! # Ok::<(), textguard::ConfigError>(())
//! ```
//!
//! Binding does not evaluate the widget's current text; the validator
//! first sees the text on the next change.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::validator::SharedValidator;
use crate::widget::{Label, SubscriptionId, TextField, TextWidget, WidgetId};

struct Binding {
    validator: SharedValidator,
    subscription: SubscriptionId,
}

thread_local! {
    static BINDINGS: RefCell<HashMap<WidgetId, Binding>> = RefCell::new(HashMap::new());
}

/// Binds `validator` to `widget`, or detaches with `None`.
///
/// Any previous binding on the widget is removed together with its
/// subscription first.
pub fn bind<W>(widget: &mut W, validator: Option<SharedValidator>)
where
    W: TextWidget + ?Sized,
{
    let id = widget.widget_id();

    if let Some(previous) = take(id) {
        widget.unsubscribe(previous.subscription);
        tracing::debug!(widget = %id, "validator detached");
    }

    let Some(validator) = validator else {
        return;
    };

    let weak = Rc::downgrade(&validator);
    let subscription = widget.subscribe(Box::new(move |text: &str| {
        let Some(validator) = weak.upgrade() else {
            return;
        };
        match validator.try_borrow_mut() {
            Ok(mut validator) => validator.update(text),
            Err(_) => tracing::warn!(
                widget = %id,
                "validator is busy in another update; text change skipped"
            ),
        };
    }));

    BINDINGS.with(|bindings| {
        bindings.borrow_mut().insert(
            id,
            Binding {
                validator,
                subscription,
            },
        )
    });
    tracing::debug!(widget = %id, "validator attached");
}

/// The validator bound to `id`, if any.
pub fn validator_for(id: WidgetId) -> Option<SharedValidator> {
    BINDINGS.with(|bindings| {
        bindings
            .borrow()
            .get(&id)
            .map(|binding| Rc::clone(&binding.validator))
    })
}

/// Forgets the binding for a widget that is going away.
///
/// The widget's listeners die with the widget, so there is nothing to
/// unsubscribe. Safe to call during thread teardown.
pub fn release(id: WidgetId) {
    let released = BINDINGS
        .try_with(|bindings| bindings.borrow_mut().remove(&id))
        .ok()
        .flatten();
    if released.is_some() {
        tracing::trace!(widget = %id, "binding released with widget");
    }
}

/// Number of live bindings on this thread.
pub fn bound_count() -> usize {
    BINDINGS.with(|bindings| bindings.borrow().len())
}

fn take(id: WidgetId) -> Option<Binding> {
    BINDINGS.with(|bindings| bindings.borrow_mut().remove(&id))
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Attach a [`StringValidator`](crate::StringValidator) to a widget so it is
/// updated on every text change.
pub trait TextValidation: TextWidget {
    /// The validator bound to this widget.
    fn string_validator(&self) -> Option<SharedValidator> {
        validator_for(self.widget_id())
    }

    /// Binds a validator, replacing any previous one. `None` detaches.
    fn set_string_validator(&mut self, validator: Option<SharedValidator>) {
        bind(self, validator);
    }
}

impl TextValidation for Label {}

impl TextValidation for TextField {}
